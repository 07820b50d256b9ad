use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG: &str = r#"
[twin]
uri = "http://localhost:3000"
physical_asset_id = "lampPA"

[semantics]
types = ["https://w3id.org/rec/Lamp"]

[semantics.properties.luminosity]
domain_tag = "https://purl.org/onto/LuminosityFlux"
datatype = "double"

[semantics.actions.switch]
domain_tag = "https://purl.org/onto/SwitchCommand"
"#;

const STATE: &str = r#"{
    "properties": [{ "key": "luminosity", "value": 100 }],
    "actions": [{ "key": "switch" }]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("wodt")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dtkg"))
        .stdout(predicate::str::contains("dtd"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("wodt")
        .args(["--verbose", "--quiet", "dtkg", "--config", "twin.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn dtkg_prints_turtle() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "twin.toml", CONFIG);
    let state = write(&tmp, "state.json", STATE);

    cargo_bin_cmd!("wodt")
        .arg("dtkg")
        .arg("--config")
        .arg(&config)
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@prefix saref:"))
        .stdout(predicate::str::contains(r#"saref:hasValue "100.0"^^xsd:double"#))
        .stdout(predicate::str::contains(r#"wodt:availableActionId "switch""#));
}

#[test]
fn dtkg_without_state_is_empty() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "twin.toml", CONFIG);

    cargo_bin_cmd!("wodt")
        .arg("dtkg")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn dtd_prints_descriptor_with_platforms() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "twin.toml", CONFIG);
    let state = write(&tmp, "state.json", STATE);

    let output = cargo_bin_cmd!("wodt")
        .arg("dtd")
        .arg("--config")
        .arg(&config)
        .arg("--state")
        .arg(&state)
        .args(["--platform", "http://platform-a.it", "--platform", "http://platform-b.it"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dtd: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dtd["id"], "http://localhost:3000");
    assert_eq!(
        dtd["actions"]["switch"]["forms"][0]["href"],
        "http://localhost:3000/action/switch"
    );
    let platforms = dtd["links"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|link| link["rel"] == "https://purl.org/wodt/registeredToPlatform")
        .count();
    assert_eq!(platforms, 2);
}

#[test]
fn twin_uri_override() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "twin.toml", CONFIG);

    cargo_bin_cmd!("wodt")
        .arg("dtd")
        .arg("--config")
        .arg(&config)
        .args(["--twin-uri", "http://twin.example:9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "http://twin.example:9000""#));
}

#[test]
fn missing_config_fails() {
    cargo_bin_cmd!("wodt")
        .args(["dtkg", "--config", "/nonexistent/twin.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_state_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write(&tmp, "twin.toml", CONFIG);
    let state = write(&tmp, "state.json", "{ not json");

    cargo_bin_cmd!("wodt")
        .arg("dtkg")
        .arg("--config")
        .arg(&config)
        .arg("--state")
        .arg(&state)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid state file"));
}

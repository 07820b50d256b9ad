//! Shared test harness for wodt-adapter integration tests

#![allow(dead_code)]

use wodt_adapter::{
    AdapterConfig, AdapterFileConfig, ConfigOverrides, DigitalTwinState, WodtAdapter,
};
use wodt_dtkg::{ActionState, PropertyState, RelationshipInstance};

pub const TWIN: &str = "http://localhost:3000";

/// Smart lamp described through the declarative mapping table
pub const LAMP_CONFIG: &str = r#"
platforms = ["http://localhost:4000"]

[twin]
uri = "http://localhost:3000"
version = "1.0.0"
physical_asset_id = "lampPA"

[semantics]
types = ["https://w3id.org/rec/Lamp"]

[semantics.prefixes]
brick = "https://brickschema.org/schema/Brick#"

[semantics.properties.luminosity]
domain_tag = "https://purl.org/onto/LuminosityFlux"
unit = "https://qudt.org/2.1/vocab/unit/LM"
datatype = "double"

[semantics.relationships.isInRoom]
predicate = "https://brickschema.org/schema/Brick#hasLocation"

[semantics.actions.switch]
domain_tag = "https://purl.org/onto/SwitchCommand"
"#;

pub fn lamp_config() -> AdapterConfig {
    let file: AdapterFileConfig = toml::from_str(LAMP_CONFIG).expect("lamp config parses");
    AdapterConfig::resolve(file, &ConfigOverrides::default()).expect("lamp config is valid")
}

pub fn lamp_adapter() -> WodtAdapter {
    WodtAdapter::from_config(lamp_config())
}

pub fn luminosity(value: f64) -> PropertyState {
    PropertyState::new("luminosity", value)
}

pub fn in_room(room: &str) -> RelationshipInstance {
    RelationshipInstance::new("isInRoom", room, "isInRoom-1")
}

pub fn switch() -> ActionState {
    ActionState::new("switch", "status.switch", "")
}

pub fn lamp_state() -> DigitalTwinState {
    DigitalTwinState {
        properties: vec![luminosity(100.0)],
        relationships: vec![in_room("http://room.it")],
        actions: vec![switch()],
    }
}

/// Canonical text after syncing [`lamp_state`]
pub const LAMP_DTKG: &str = r#"@prefix brick: <https://brickschema.org/schema/Brick#> .
@prefix saref: <https://saref.etsi.org/core/> .
@prefix wodt: <https://purl.org/wodt/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<http://localhost:3000>
    brick:hasLocation <http://room.it> ;
    wodt:availableActionId "switch" ;
    saref:hasProperty <https://purl.org/onto/LuminosityFlux> ;
    saref:hasPropertyValue [
        saref:hasValue "100.0"^^xsd:double ;
        saref:isMeasuredIn <https://qudt.org/2.1/vocab/unit/LM> ;
        saref:isValueOfProperty <https://purl.org/onto/LuminosityFlux>
    ] .
"#;

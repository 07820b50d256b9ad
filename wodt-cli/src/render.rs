use crate::cli::RenderArgs;
use crate::error::{CliError, CliResult};
use std::path::Path;
use wodt_adapter::{AdapterConfig, ConfigOverrides, DigitalTwinState, WodtAdapter};

/// Build an adapter from the config file and load the state into it
pub fn load_adapter(args: &RenderArgs) -> CliResult<WodtAdapter> {
    let overrides = ConfigOverrides {
        twin_uri: args.twin_uri.clone(),
        platforms: args.platforms.clone(),
        ..Default::default()
    };
    let config = AdapterConfig::load(&args.config, &overrides)?;
    let adapter = WodtAdapter::from_config(config);
    adapter.register_platforms();

    if let Some(path) = &args.state {
        let state = read_state(path)?;
        let report = adapter.on_sync(&state);
        if report.failed > 0 {
            tracing::warn!(failed = report.failed, "some state elements were not loaded");
        }
    }
    Ok(adapter)
}

fn read_state(path: &Path) -> CliResult<DigitalTwinState> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::State {
        path: path.to_path_buf(),
        source,
    })
}

pub fn dtkg(args: &RenderArgs) -> CliResult<()> {
    let adapter = load_adapter(args)?;
    print!("{}", adapter.current_dtkg());
    Ok(())
}

pub fn dtd(args: &RenderArgs) -> CliResult<()> {
    let adapter = load_adapter(args)?;
    println!("{}", adapter.descriptor().build_json()?);
    Ok(())
}

use std::path::PathBuf;
use std::process;
use thiserror::Error;

pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Config, mapping or engine failure.
    #[error("error: {0}")]
    Adapter(#[from] wodt_adapter::AdapterError),

    /// Descriptor could not be built.
    #[error("error: {0}")]
    Dtd(#[from] wodt_dtd::DtdError),

    /// Unreadable input file.
    #[error("error: failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// State file is not valid JSON.
    #[error("error: invalid state file {path}: {source}")]
    State {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Print error and exit.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;

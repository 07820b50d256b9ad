use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wodt",
    about = "Web of Digital Twins knowledge graph and descriptor renderer",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the digital twin knowledge graph as Turtle
    Dtkg(RenderArgs),

    /// Print the digital twin description as JSON
    Dtd(RenderArgs),
}

#[derive(Args)]
pub struct RenderArgs {
    /// Adapter config file (TOML, or JSON with a .json extension)
    #[arg(long, short = 'c')]
    pub config: PathBuf,

    /// Digital twin state to load (JSON)
    #[arg(long, short = 's')]
    pub state: Option<PathBuf>,

    /// Platform the twin is registered to (repeatable)
    #[arg(long = "platform", value_name = "URI")]
    pub platforms: Vec<String>,

    /// Override the twin URI from the config file
    #[arg(long)]
    pub twin_uri: Option<String>,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "geomdiff",
    about = "Structural diffs for nodes, ways, and relations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OnlyArg {
    Deleted,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the diff between two versions of an element
    Diff(DiffArgs),
    /// Apply the diff between two versions to a third copy
    Apply(ApplyArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// JSON file holding the "from" version
    pub from: PathBuf,
    /// JSON file holding the "to" version
    pub to: PathBuf,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// JSON file holding the "from" version
    pub from: PathBuf,
    /// JSON file holding the "to" version
    pub to: PathBuf,
    /// JSON file holding the element to update
    pub target: PathBuf,
    /// Apply only part of the diff; overrides the config file
    #[arg(long)]
    pub only: Option<OnlyArg>,
}

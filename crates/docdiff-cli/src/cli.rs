use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "docdiff",
    about = "Show what changes between two versions of a configuration document",
    version,
)]
pub struct Cli {
    /// The old document (YAML or JSON)
    pub old: PathBuf,

    /// The current document (YAML or JSON)
    pub current: PathBuf,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Print a one-line summary of additions, removals and changes
    #[arg(long)]
    pub stat: bool,

    /// Spaces per nesting level in the report
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

use std::io::{self, Write};

use clap::Parser;
use tracing::Level;

mod cli;
mod color;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    color::apply(color::choice_from_env());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    commands::run_command(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

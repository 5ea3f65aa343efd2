use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use docdiff_diff::diff;
use docdiff_render::{RenderConfig, Renderer};
use docdiff_types::{parse_document, Node};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::color::Painter;

pub fn run_command<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let old = load(&cli.old)?;
    let current = load(&cli.current)?;

    let tree = diff(&old, &current);
    let stats = tree.stats();
    debug!(
        additions = stats.additions,
        removals = stats.removals,
        changes = stats.changes,
        "documents compared"
    );

    match cli.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tree).context("failed to encode diff")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if tree.is_empty() {
                writeln!(out, "No changes.")?;
            } else {
                let renderer = Renderer::new(RenderConfig::with_indent_width(cli.indent));
                let mut painter = Painter::new(&mut *out);
                renderer.render(&tree, &mut painter)?;
                painter.flush()?;
            }
            if cli.stat {
                writeln!(
                    out,
                    "{} additions, {} removals, {} changes",
                    stats.additions, stats.removals, stats.changes
                )?;
            }
        }
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Node> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&text).with_context(|| format!("failed to parse {}", path.display()))
}

//! Report rendering: a diff tree into marker-prefixed lines.

use std::fmt;
use std::io;

use docdiff_diff::{DiffNode, ListOp};
use docdiff_types::Node;
use tracing::debug;

use crate::config::RenderConfig;
use crate::dump;
use crate::error::RenderError;

/// The marker leading a changed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Added,
    Removed,
    Changed,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Self::Added => '+',
            Self::Removed => '-',
            Self::Changed => '~',
        }
    }
}

/// Writes diff reports.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `diff` into `out`.
    ///
    /// Lines are written one at a time as they are assembled. The sink is
    /// neither flushed nor closed; that stays with the caller. A write error
    /// stops rendering and is returned as [`RenderError::Output`].
    pub fn render<W: io::Write + ?Sized>(
        &self,
        diff: &DiffNode,
        out: &mut W,
    ) -> Result<(), RenderError> {
        let mut sink = IoSink {
            inner: out,
            error: None,
        };
        match self.render_fmt(diff, &mut sink) {
            Ok(lines) => {
                debug!(lines, "rendered diff report");
                Ok(())
            }
            Err(fmt::Error) => Err(RenderError::Output(
                sink.error
                    .take()
                    .unwrap_or_else(|| io::Error::other("formatter error")),
            )),
        }
    }

    /// Render `diff` into a new string.
    pub fn render_to_string(&self, diff: &DiffNode) -> String {
        self.report(diff).to_string()
    }

    /// A `Display` view of `diff` rendered with this configuration.
    pub fn report<'a>(&self, diff: &'a DiffNode) -> Report<'a> {
        Report {
            diff,
            renderer: self.clone(),
        }
    }

    fn render_fmt<F: fmt::Write>(&self, diff: &DiffNode, out: &mut F) -> Result<usize, fmt::Error> {
        let mut emitter = Emitter {
            out,
            indent_width: self.config.indent_width,
            lines: 0,
        };
        emitter.node(0, diff)?;
        Ok(emitter.lines)
    }
}

/// Render `diff` into `out` with the default configuration.
pub fn render<W: io::Write + ?Sized>(diff: &DiffNode, out: &mut W) -> Result<(), RenderError> {
    Renderer::default().render(diff, out)
}

/// Render `diff` into a string with the default configuration.
///
/// An empty diff renders as the empty string. Otherwise every line,
/// including the last, ends with `\n`.
pub fn render_to_string(diff: &DiffNode) -> String {
    Renderer::default().render_to_string(diff)
}

/// `Display` adapter over a diff tree.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    diff: &'a DiffNode,
    renderer: Renderer,
}

impl<'a> Report<'a> {
    /// A view of `diff` with the default configuration.
    pub fn new(diff: &'a DiffNode) -> Self {
        Renderer::default().report(diff)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.render_fmt(self.diff, f).map(|_| ())
    }
}

/// Bridges an `io::Write` sink into `fmt::Write`, keeping the I/O error.
struct IoSink<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

struct Emitter<'a, F: fmt::Write> {
    out: &'a mut F,
    indent_width: usize,
    lines: usize,
}

impl<F: fmt::Write> Emitter<'_, F> {
    /// Write one line at `level`, optionally led by a marker.
    fn line(&mut self, level: usize, marker: Option<Marker>, text: &str) -> fmt::Result {
        let mut line = " ".repeat(level * self.indent_width);
        if let Some(marker) = marker {
            line.push(marker.symbol());
            line.push(' ');
        }
        line.push_str(text);
        line.push('\n');
        self.out.write_str(&line)?;
        self.lines += 1;
        Ok(())
    }

    /// Write pre-built dump lines, each led by the same marker.
    fn marked(&mut self, level: usize, marker: Marker, lines: Vec<String>) -> fmt::Result {
        for text in lines {
            self.line(level, Some(marker), &text)?;
        }
        Ok(())
    }

    /// A node with no key: the root, or the body of a changed container.
    fn node(&mut self, level: usize, diff: &DiffNode) -> fmt::Result {
        let width = self.indent_width;
        match diff {
            DiffNode::Unchanged => Ok(()),
            DiffNode::Added(node) => {
                self.marked(level, Marker::Added, dump::node_lines(node, width))
            }
            DiffNode::Removed(node) => {
                self.marked(level, Marker::Removed, dump::node_lines(node, width))
            }
            DiffNode::Changed { old, new } => {
                self.line(level, Some(Marker::Changed), &format!("{old} -> {new}"))
            }
            DiffNode::Replaced { old, new } => {
                self.marked(level, Marker::Removed, dump::node_lines(old, width))?;
                self.marked(level, Marker::Added, dump::node_lines(new, width))
            }
            DiffNode::Map(entries) => {
                for (key, entry) in entries {
                    self.entry(level, key, entry)?;
                }
                Ok(())
            }
            DiffNode::List(ops) => {
                if diff.is_empty() {
                    return Ok(());
                }
                for op in ops {
                    self.op(level, op)?;
                }
                Ok(())
            }
        }
    }

    /// A mapping entry.
    fn entry(&mut self, level: usize, key: &str, diff: &DiffNode) -> fmt::Result {
        let width = self.indent_width;
        match diff {
            DiffNode::Unchanged => Ok(()),
            DiffNode::Added(node) => {
                self.marked(level, Marker::Added, dump::entry_lines(key, node, width))
            }
            DiffNode::Removed(node) => {
                self.marked(level, Marker::Removed, dump::entry_lines(key, node, width))
            }
            DiffNode::Changed { old, new } => self.line(
                level,
                Some(Marker::Changed),
                &format!("{key}: {old} -> {new}"),
            ),
            DiffNode::Replaced { old, new } => {
                self.marked(level, Marker::Removed, dump::entry_lines(key, old, width))?;
                self.marked(level, Marker::Added, dump::entry_lines(key, new, width))
            }
            DiffNode::Map(_) | DiffNode::List(_) => {
                // Containers without changes vanish together with their key.
                if diff.is_empty() {
                    return Ok(());
                }
                self.line(level, Some(Marker::Changed), &format!("{key}:"))?;
                self.node(level + 1, diff)
            }
        }
    }

    /// One list edit operation.
    fn op(&mut self, level: usize, op: &ListOp) -> fmt::Result {
        match op {
            ListOp::Unchanged(count) => {
                let noun = if *count == 1 { "item" } else { "items" };
                self.line(level, None, &format!("({count} unchanged {noun})"))
            }
            ListOp::Inserted(node) => self.item(level, Marker::Added, node),
            ListOp::Removed(node) => self.item(level, Marker::Removed, node),
            ListOp::Changed { old, new } => {
                self.line(level, Some(Marker::Changed), &format!("- {old} -> {new}"))
            }
        }
    }

    fn item(&mut self, level: usize, marker: Marker, node: &Node) -> fmt::Result {
        let lines = dump::item_lines(node, self.indent_width);
        self.marked(level, marker, lines)
    }
}

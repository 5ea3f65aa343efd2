//! Terminal styling of report lines.
//!
//! The `COLOR` environment variable decides whether output is styled. When
//! it is unset, `colored` falls back to its own terminal detection.

use std::io::{self, Write};

use colored::Colorize;

const COLOR_ENV_VAR: &str = "COLOR";

/// Whether report lines get terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    /// Leave the decision to terminal detection.
    Auto,
    Always,
    Never,
}

/// Read the color choice from the `COLOR` environment variable.
pub fn choice_from_env() -> ColorChoice {
    parse_choice(std::env::var(COLOR_ENV_VAR).ok().as_deref())
}

fn parse_choice(value: Option<&str>) -> ColorChoice {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true") => ColorChoice::Always,
        Some("false") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Apply a color choice process-wide.
pub fn apply(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => colored::control::unset_override(),
    }
}

/// Style one report line by its leading marker.
pub fn paint(line: &str) -> String {
    match line.trim_start().chars().next() {
        Some('+') => line.green().to_string(),
        Some('-') => line.red().to_string(),
        Some('~') => line.yellow().to_string(),
        Some('(') => line.dimmed().to_string(),
        _ => line.to_string(),
    }
}

/// An `io::Write` sink that styles each complete line before passing it on.
pub struct Painter<W: Write> {
    inner: W,
    pending: Vec<u8>,
}

impl<W: Write> Painter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            pending: Vec::new(),
        }
    }

    fn emit(&mut self, line: &[u8]) -> io::Result<()> {
        let text = String::from_utf8_lossy(line);
        self.inner.write_all(paint(&text).as_bytes())
    }
}

impl<W: Write> Write for Painter<W> {
    /// Bytes after the last newline wait in a buffer for the rest of their
    /// line. `buf` is only taken once every complete line in it has reached
    /// the inner writer; on error the buffer is left as it was.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(last) = buf.iter().rposition(|b| *b == b'\n') else {
            self.pending.extend_from_slice(buf);
            return Ok(buf.len());
        };

        let mut complete = self.pending.clone();
        complete.extend_from_slice(&buf[..last]);
        for line in complete.split(|b| *b == b'\n') {
            self.emit(line)?;
            self.inner.write_all(b"\n")?;
        }

        self.pending.clear();
        self.pending.extend_from_slice(&buf[last + 1..]);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let rest = self.pending.clone();
            self.emit(&rest)?;
            self.pending.clear();
        }
        self.inner.flush()
    }
}

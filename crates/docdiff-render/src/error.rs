//! Error types for the render crate.

use std::io;

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output sink rejected a write. The I/O error is passed through
    /// unchanged.
    #[error("failed to write diff output: {0}")]
    Output(#[from] io::Error),
}

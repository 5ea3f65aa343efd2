//! Text renderer for docdiff.
//!
//! Serializes a [`DiffNode`](docdiff_diff::DiffNode) tree into an indented
//! report. Every changed line carries a marker: `~` for a changed value or a
//! container holding changes, `+` for additions and `-` for removals. Runs
//! of unchanged list items collapse into `(n unchanged items)`.
//!
//! ```text
//! ~ Mary:
//!     + Weight:
//!     +     kg: 52
//! ```
//!
//! # Key Types
//!
//! - [`Renderer`] — Writes reports to any `io::Write` sink
//! - [`Report`] — `Display` adapter over a diff tree
//! - [`RenderConfig`] — Indentation settings
//! - [`RenderError`] — Sink failures

pub mod config;
pub mod dump;
pub mod error;
pub mod render;

pub use config::RenderConfig;
pub use dump::dump;
pub use error::RenderError;
pub use render::{render, render_to_string, Renderer, Report};

//! Document model for docdiff.
//!
//! A parsed structured-configuration document is a tree of three node kinds:
//! mappings, ordered lists and opaque scalars. This crate owns that tree and
//! the YAML front end that produces it. Every other docdiff crate depends on
//! `docdiff-types`.
//!
//! # Key Types
//!
//! - [`Node`] — A mapping, list or scalar node
//! - [`NodeKind`] — The structural kind of a node, without its payload
//! - [`ParseError`] — Raised when raw input is not a well-formed document

pub mod error;
pub mod node;
pub mod yaml;

pub use error::ParseError;
pub use node::{Node, NodeKind};
pub use yaml::parse_document;

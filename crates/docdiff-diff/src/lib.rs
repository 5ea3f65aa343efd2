//! Diff engine for docdiff.
//!
//! Compares an old and a current document tree and produces a parallel diff
//! tree that separates additions, removals, value changes and structural
//! kind changes. Lists are aligned with a longest-common-subsequence edit
//! script; mappings are compared key by key.
//!
//! # Key Types
//!
//! - [`DiffNode`] -- One node of the diff tree
//! - [`ListOp`] -- One operation of a list edit script
//! - [`DiffStats`] -- Addition, removal and change counts over a diff tree

pub mod differ;
pub mod list;
pub mod tree;

pub use differ::{diff, diff_mappings};
pub use list::diff_lists;
pub use tree::{DiffNode, DiffStats, ListOp};

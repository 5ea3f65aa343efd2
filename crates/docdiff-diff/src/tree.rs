//! The diff tree produced by [`diff`](crate::diff).

use docdiff_types::Node;
use serde::{Deserialize, Serialize};

/// One node of a diff tree, parallel to the document trees it compares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiffNode {
    /// Identical in both documents.
    Unchanged,
    /// A whole subtree present only in the current document.
    Added(Node),
    /// A whole subtree present only in the old document.
    Removed(Node),
    /// Both sides are scalars with different text.
    Changed { old: String, new: String },
    /// The two sides have different kinds. Rendered as a full removal of
    /// `old` immediately followed by a full addition of `new`.
    Replaced { old: Node, new: Node },
    /// Per-key differences of two mappings. Unchanged keys are not kept.
    Map(Vec<(String, DiffNode)>),
    /// Edit script aligning two lists.
    List(Vec<ListOp>),
}

/// One operation of a list edit script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum ListOp {
    /// A run of this many consecutive items identical on both sides.
    Unchanged(usize),
    /// An item present only in the current list.
    Inserted(Node),
    /// An item present only in the old list.
    Removed(Node),
    /// A single scalar item whose value changed in place.
    Changed { old: String, new: String },
}

/// Addition, removal and change counts over a diff tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub removals: usize,
    pub changes: usize,
}

impl DiffStats {
    /// Returns `true` if nothing was added, removed or changed.
    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.removals == 0 && self.changes == 0
    }

    /// Total number of counted differences.
    pub fn total(&self) -> usize {
        self.additions + self.removals + self.changes
    }
}

impl DiffNode {
    /// Returns `true` for [`DiffNode::Unchanged`].
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Returns `true` if this node would render as nothing.
    ///
    /// That is the case for `Unchanged`, for a map diff without entries,
    /// and for a list diff made only of unchanged runs.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Unchanged => true,
            Self::Map(entries) => entries.iter().all(|(_, node)| node.is_empty()),
            Self::List(ops) => ops.iter().all(|op| matches!(op, ListOp::Unchanged(_))),
            Self::Added(_) | Self::Removed(_) | Self::Changed { .. } | Self::Replaced { .. } => {
                false
            }
        }
    }

    /// Count additions, removals and changes over the whole tree.
    ///
    /// An added or removed subtree counts once. A kind replacement counts as
    /// one removal and one addition.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        self.accumulate(&mut stats);
        stats
    }

    fn accumulate(&self, stats: &mut DiffStats) {
        match self {
            Self::Unchanged => {}
            Self::Added(_) => stats.additions += 1,
            Self::Removed(_) => stats.removals += 1,
            Self::Changed { .. } => stats.changes += 1,
            Self::Replaced { .. } => {
                stats.removals += 1;
                stats.additions += 1;
            }
            Self::Map(entries) => {
                for (_, node) in entries {
                    node.accumulate(stats);
                }
            }
            Self::List(ops) => {
                for op in ops {
                    match op {
                        ListOp::Unchanged(_) => {}
                        ListOp::Inserted(_) => stats.additions += 1,
                        ListOp::Removed(_) => stats.removals += 1,
                        ListOp::Changed { .. } => stats.changes += 1,
                    }
                }
            }
        }
    }
}

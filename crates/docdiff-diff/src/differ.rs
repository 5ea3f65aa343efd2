//! Top-level dispatch and mapping comparison.

use std::collections::{HashMap, HashSet};

use docdiff_types::Node;

use crate::list::diff_lists;
use crate::tree::{DiffNode, ListOp};

/// Compute the diff between an old and a current document tree.
///
/// - Two scalars: `Unchanged` when the text is equal, else `Changed`.
/// - Two mappings: a `Map` of the differing keys, or `Unchanged`.
/// - Two lists: a `List` edit script, or `Unchanged` when every item is kept.
/// - Different kinds: `Replaced`, with no attempt to reuse any structure.
///
/// Neither input is modified.
pub fn diff(old: &Node, curr: &Node) -> DiffNode {
    match (old, curr) {
        (Node::Scalar(a), Node::Scalar(b)) => {
            if a == b {
                DiffNode::Unchanged
            } else {
                DiffNode::Changed {
                    old: a.clone(),
                    new: b.clone(),
                }
            }
        }
        (Node::Mapping(a), Node::Mapping(b)) => {
            let entries = diff_mappings(a, b);
            if entries.is_empty() {
                DiffNode::Unchanged
            } else {
                DiffNode::Map(entries)
            }
        }
        (Node::List(a), Node::List(b)) => {
            let ops = diff_lists(a, b);
            if ops.iter().all(|op| matches!(op, ListOp::Unchanged(_))) {
                DiffNode::Unchanged
            } else {
                DiffNode::List(ops)
            }
        }
        _ => DiffNode::Replaced {
            old: old.clone(),
            new: curr.clone(),
        },
    }
}

/// Compare two mappings key by key.
///
/// Keys appear in first-seen order scanning `old` and then `curr`. Keys
/// whose values diff as `Unchanged` are dropped. A key repeated within one
/// mapping is read by its first occurrence and reported once.
pub fn diff_mappings(old: &[(String, Node)], curr: &[(String, Node)]) -> Vec<(String, DiffNode)> {
    let mut curr_index: HashMap<&str, &Node> = HashMap::with_capacity(curr.len());
    for (key, value) in curr {
        curr_index.entry(key.as_str()).or_insert(value);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(old.len() + curr.len());
    let mut entries = Vec::new();

    // Keys from the old mapping: removed or compared.
    for (key, old_val) in old {
        if !seen.insert(key.as_str()) {
            continue;
        }
        let node = match curr_index.get(key.as_str()) {
            Some(curr_val) => diff(old_val, curr_val),
            None => DiffNode::Removed(old_val.clone()),
        };
        if !node.is_unchanged() {
            entries.push((key.clone(), node));
        }
    }

    // Keys only in the current mapping.
    for (key, curr_val) in curr {
        if seen.insert(key.as_str()) {
            entries.push((key.clone(), DiffNode::Added(curr_val.clone())));
        }
    }

    entries
}

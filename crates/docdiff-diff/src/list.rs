//! List alignment: longest-common-subsequence edit scripts.
//!
//! Items are opaque. Two items match only when they are structurally equal;
//! mappings inside lists are never diffed field by field, and a reordered
//! list comes out as removals and insertions.

use std::iter;

use docdiff_types::Node;
use tracing::debug;

use crate::tree::ListOp;

/// One step of the raw edit script.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Step<'a> {
    Keep,
    Delete(&'a Node),
    Insert(&'a Node),
}

/// Align two lists and return the coalesced edit script.
///
/// Consecutive kept items collapse into one [`ListOp::Unchanged`] run.
/// Between two kept items, removals come before insertions; when that span
/// holds exactly one removed and one inserted scalar, the pair becomes a
/// single [`ListOp::Changed`].
///
/// Two empty lists produce an empty script.
pub fn diff_lists(old: &[Node], curr: &[Node]) -> Vec<ListOp> {
    let steps = edit_script(old, curr);

    let mut ops = Vec::new();
    let mut run = 0usize;
    let mut removed: Vec<&Node> = Vec::new();
    let mut inserted: Vec<&Node> = Vec::new();

    for step in steps {
        match step {
            Step::Keep => {
                flush_span(&mut ops, &mut removed, &mut inserted);
                run += 1;
            }
            Step::Delete(node) => {
                flush_run(&mut ops, &mut run);
                removed.push(node);
            }
            Step::Insert(node) => {
                flush_run(&mut ops, &mut run);
                inserted.push(node);
            }
        }
    }
    flush_run(&mut ops, &mut run);
    flush_span(&mut ops, &mut removed, &mut inserted);

    debug!(old = old.len(), new = curr.len(), ops = ops.len(), "aligned lists");
    ops
}

fn flush_run(ops: &mut Vec<ListOp>, run: &mut usize) {
    if *run > 0 {
        ops.push(ListOp::Unchanged(*run));
        *run = 0;
    }
}

fn flush_span(ops: &mut Vec<ListOp>, removed: &mut Vec<&Node>, inserted: &mut Vec<&Node>) {
    if let ([Node::Scalar(old)], [Node::Scalar(new)]) = (removed.as_slice(), inserted.as_slice()) {
        ops.push(ListOp::Changed {
            old: old.clone(),
            new: new.clone(),
        });
    } else {
        ops.extend(removed.iter().map(|node| ListOp::Removed((*node).clone())));
        ops.extend(inserted.iter().map(|node| ListOp::Inserted((*node).clone())));
    }
    removed.clear();
    inserted.clear();
}

/// Compute a minimal edit script turning `old` into `curr`.
///
/// A shared prefix is kept outright. A shared trailing item is kept outright
/// only while it does not also occur in what remains of either list, so
/// trimming never changes which occurrence an item matches. The table is
/// built for the middle alone.
fn edit_script<'a>(old: &'a [Node], curr: &'a [Node]) -> Vec<Step<'a>> {
    let prefix = old.iter().zip(curr).take_while(|(a, b)| a == b).count();
    let (mut n, mut m) = (old.len(), curr.len());
    while n > prefix
        && m > prefix
        && old[n - 1] == curr[m - 1]
        && !old[prefix..n - 1].contains(&old[n - 1])
        && !curr[prefix..m - 1].contains(&curr[m - 1])
    {
        n -= 1;
        m -= 1;
    }
    let suffix = old.len() - n;
    debug!(prefix, suffix, "trimmed shared list ends");

    let mut steps = Vec::with_capacity(old.len().max(curr.len()));
    steps.extend(iter::repeat(Step::Keep).take(prefix));
    align(&old[prefix..n], &curr[prefix..m], &mut steps);
    steps.extend(iter::repeat(Step::Keep).take(suffix));
    steps
}

/// LCS alignment of two slices, appended to `steps`.
///
/// `table[i][j]` holds the LCS length of `old[i..]` and `curr[j..]`. Walking
/// from the front, equal items are always kept, so each item matches the
/// earliest equal item still available. On a tie between dropping from
/// `old` and taking from `curr`, the deletion goes first.
fn align<'a>(old: &'a [Node], curr: &'a [Node], steps: &mut Vec<Step<'a>>) {
    let (n, m) = (old.len(), curr.len());
    let width = m + 1;
    let mut table = vec![0usize; (n + 1) * width];

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if old[i] == curr[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i] == curr[j] {
            steps.push(Step::Keep);
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            steps.push(Step::Delete(&old[i]));
            i += 1;
        } else {
            steps.push(Step::Insert(&curr[j]));
            j += 1;
        }
    }
    steps.extend(old[i..].iter().map(Step::Delete));
    steps.extend(curr[j..].iter().map(Step::Insert));
}

//! Structural dump of whole subtrees, in YAML block style.
//!
//! Added and removed subtrees are printed in full. Mapping children nest one
//! indentation level deeper, list items open with `- ` and continue two
//! spaces in, and empty containers print as `{}` or `[]`.

use docdiff_types::Node;

use crate::config::RenderConfig;

/// Dump a node as YAML-style text, one line per `\n`-terminated row.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    for line in node_lines(node, RenderConfig::default().indent_width) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Lines of a bare node.
pub(crate) fn node_lines(node: &Node, indent_width: usize) -> Vec<String> {
    match node {
        Node::Scalar(text) => vec![text.clone()],
        Node::Mapping(entries) if entries.is_empty() => vec!["{}".to_string()],
        Node::List(items) if items.is_empty() => vec!["[]".to_string()],
        Node::Mapping(entries) => entries
            .iter()
            .flat_map(|(key, value)| entry_lines(key, value, indent_width))
            .collect(),
        Node::List(items) => items
            .iter()
            .flat_map(|item| item_lines(item, indent_width))
            .collect(),
    }
}

/// Lines of a `key: value` mapping entry.
pub(crate) fn entry_lines(key: &str, value: &Node, indent_width: usize) -> Vec<String> {
    if let Some(inline) = inline(value) {
        return vec![format!("{key}: {inline}")];
    }
    let pad = " ".repeat(indent_width);
    let mut lines = vec![format!("{key}:")];
    lines.extend(
        node_lines(value, indent_width)
            .into_iter()
            .map(|line| format!("{pad}{line}")),
    );
    lines
}

/// Lines of a list item, starting with `- `.
pub(crate) fn item_lines(item: &Node, indent_width: usize) -> Vec<String> {
    node_lines(item, indent_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("- {line}")
            } else {
                format!("  {line}")
            }
        })
        .collect()
}

/// The single-line form of a scalar or empty container.
fn inline(node: &Node) -> Option<&str> {
    match node {
        Node::Scalar(text) => Some(text),
        Node::Mapping(entries) if entries.is_empty() => Some("{}"),
        Node::List(items) if items.is_empty() => Some("[]"),
        _ => None,
    }
}

//! YAML front end: raw document text into a [`Node`] tree.
//!
//! JSON input is accepted too, since YAML is a superset of it. The tree is
//! built from the `saphyr-parser` event stream so that every scalar keeps
//! its source presentation: a value written `"168"` stays `"168"`, a plain
//! `168` stays `168`, and `'single'` quotes survive as written. Mapping keys
//! are identities, not values, and are stored unquoted.

use std::collections::HashMap;

use saphyr_parser::{Event, Parser, ScalarStyle, Tag};
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::node::Node;

/// Parse a YAML (or JSON) document into a tree.
///
/// A document with no content at all (blank or comments only) is an empty
/// mapping.
pub fn parse_document(input: &str) -> Result<Node, ParseError> {
    if is_blank(input) {
        debug!("blank document parsed as empty mapping");
        return Ok(Node::Mapping(Vec::new()));
    }

    let mut parser = Parser::new_from_str(input);
    let mut builder = TreeBuilder::default();
    while let Some(next) = parser.next_event() {
        let (event, _span) = next.map_err(|e| ParseError::Syntax(format!("{e}")))?;
        trace!(?event, "yaml event");
        builder.accept(event)?;
    }

    let node = builder.finish();
    debug!(kind = %node.kind(), "parsed document");
    Ok(node)
}

fn is_blank(input: &str) -> bool {
    input.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// A container that is still open while events stream in.
enum Frame {
    Mapping {
        anchor: usize,
        entries: Vec<(String, Node)>,
        /// The key read for the value that comes next, if any.
        key: Option<String>,
    },
    List {
        anchor: usize,
        items: Vec<Node>,
    },
}

#[derive(Default)]
struct TreeBuilder {
    stack: Vec<Frame>,
    anchors: HashMap<usize, Node>,
    root: Option<Node>,
    documents: usize,
}

impl TreeBuilder {
    fn accept(&mut self, event: Event<'_>) -> Result<(), ParseError> {
        match event {
            Event::StreamStart | Event::StreamEnd | Event::DocumentEnd | Event::Nothing => Ok(()),
            Event::DocumentStart(_) => {
                self.documents += 1;
                if self.documents > 1 {
                    return Err(ParseError::MultipleDocuments);
                }
                Ok(())
            }
            Event::MappingStart(anchor, _tag) => {
                self.open("mapping")?;
                self.stack.push(Frame::Mapping {
                    anchor,
                    entries: Vec::new(),
                    key: None,
                });
                Ok(())
            }
            Event::SequenceStart(anchor, _tag) => {
                self.open("sequence")?;
                self.stack.push(Frame::List {
                    anchor,
                    items: Vec::new(),
                });
                Ok(())
            }
            Event::MappingEnd | Event::SequenceEnd => {
                let (anchor, node) = match self.stack.pop() {
                    Some(Frame::Mapping {
                        anchor, entries, ..
                    }) => (anchor, Node::Mapping(entries)),
                    Some(Frame::List { anchor, items }) => (anchor, Node::List(items)),
                    None => return Err(ParseError::Syntax("unbalanced container end".into())),
                };
                self.remember(anchor, &node);
                self.attach(node)
            }
            Event::Scalar(value, style, anchor, tag) => {
                if self.expects_key() {
                    return self.set_key(value.into_owned());
                }
                let node = Node::Scalar(scalar_text(&value, style, tag.as_deref()));
                self.remember(anchor, &node);
                self.attach(node)
            }
            Event::Alias(id) => {
                let node = self
                    .anchors
                    .get(&id)
                    .cloned()
                    .ok_or(ParseError::UnknownAlias(id))?;
                if self.expects_key() {
                    return match node {
                        Node::Scalar(text) => self.set_key(text),
                        other => Err(ParseError::UnsupportedKey(format!("{} key", other.kind()))),
                    };
                }
                self.attach(node)
            }
        }
    }

    fn finish(self) -> Node {
        self.root.unwrap_or_else(|| Node::Mapping(Vec::new()))
    }

    fn expects_key(&self) -> bool {
        matches!(self.stack.last(), Some(Frame::Mapping { key: None, .. }))
    }

    /// Reject a container opening where a mapping key belongs.
    fn open(&self, what: &str) -> Result<(), ParseError> {
        if self.expects_key() {
            return Err(ParseError::UnsupportedKey(format!("{what} key")));
        }
        Ok(())
    }

    fn set_key(&mut self, text: String) -> Result<(), ParseError> {
        if let Some(Frame::Mapping { entries, key, .. }) = self.stack.last_mut() {
            if entries.iter().any(|(k, _)| *k == text) {
                return Err(ParseError::DuplicateKey(text));
            }
            *key = Some(text);
        }
        Ok(())
    }

    fn remember(&mut self, anchor: usize, node: &Node) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
    }

    fn attach(&mut self, node: Node) -> Result<(), ParseError> {
        match self.stack.last_mut() {
            None => {
                self.root = Some(node);
                Ok(())
            }
            Some(Frame::List { items, .. }) => {
                items.push(node);
                Ok(())
            }
            Some(Frame::Mapping { entries, key, .. }) => match key.take() {
                Some(k) => {
                    entries.push((k, node));
                    Ok(())
                }
                None => Err(ParseError::Syntax("mapping value without a key".into())),
            },
        }
    }
}

/// The display text of a scalar, in the style it was written.
fn scalar_text(value: &str, style: ScalarStyle, tag: Option<&Tag>) -> String {
    let text = match style {
        ScalarStyle::Plain => value.to_owned(),
        ScalarStyle::SingleQuoted if !value.contains(['\n', '\r']) => {
            format!("'{}'", value.replace('\'', "''"))
        }
        // Double quotes, and block scalars whose line breaks only survive
        // as escapes on a single report line.
        _ => quote(value),
    };
    match tag {
        Some(tag) => format!("{} {}", tag_text(tag), text),
        None => text,
    }
}

fn tag_text(tag: &Tag) -> String {
    format!("{}{}", tag.handle, tag.suffix)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

use thiserror::Error;

/// Errors produced while turning raw input into a document tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not valid YAML (or JSON, which YAML accepts).
    #[error("invalid document: {0}")]
    Syntax(String),

    /// A mapping key was itself a mapping or a list.
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// The same key appears twice in one mapping.
    #[error("duplicate mapping key: {0}")]
    DuplicateKey(String),

    /// The stream holds more than one document.
    #[error("expected a single document, found more")]
    MultipleDocuments,

    /// An alias refers to an anchor that was never defined.
    #[error("alias refers to unknown anchor #{0}")]
    UnknownAlias(usize),
}

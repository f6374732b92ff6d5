//! Error types for TEI assembly

use std::fmt;

/// Errors that can occur while building or formatting a TEI document
#[derive(Debug, Clone, PartialEq)]
pub enum TeiError {
    /// The template could not be read or has no root element
    Template(String),
    /// A target path could not be parsed
    InvalidPath(String),
    /// A required target path matched nothing in the template
    MissingNode(String),
    /// Writing the tree to a string failed
    Serialization(String),
    /// The formatter failed or reported an error
    Formatter(String),
    /// No formatter is registered under the name
    FormatterNotFound(String),
}

impl fmt::Display for TeiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeiError::Template(msg) => write!(f, "Template error: {}", msg),
            TeiError::InvalidPath(msg) => write!(f, "Invalid node path: {}", msg),
            TeiError::MissingNode(path) => write!(f, "Template has no node at '{}'", path),
            TeiError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            TeiError::Formatter(msg) => write!(f, "Formatter error: {}", msg),
            TeiError::FormatterNotFound(name) => write!(f, "Formatter '{}' not found", name),
        }
    }
}

impl std::error::Error for TeiError {}

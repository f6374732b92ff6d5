//! Source document loading
//!
//! ```rust,ignore
//! use pitaval_parser::SourceDocument;
//!
//! let source = SourceDocument::from_path("corpus/Bd05_1845_02.txt")?;
//! assert_eq!(source.identity().volume, 5);
//! ```

use crate::error::ParseError;
use crate::filename::FileIdentity;
use std::fs;
use std::path::Path;

/// One input file: its stem, the identity encoded in the stem, and its raw text
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    stem: String,
    identity: FileIdentity,
    text: String,
}

impl SourceDocument {
    /// Read a source file. The file must be UTF-8 and its stem must carry a valid identity.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| ParseError::InvalidFilename(path.display().to_string()))?;
        let identity = FileIdentity::parse(&stem)?;
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)?;
        tracing::debug!(%stem, bytes = text.len(), "loaded source document");
        Ok(SourceDocument {
            stem,
            identity,
            text,
        })
    }

    /// Build a source document from a stem and text already in memory.
    pub fn from_string<S: Into<String>>(stem: &str, text: S) -> Result<Self, ParseError> {
        Ok(SourceDocument {
            stem: stem.to_string(),
            identity: FileIdentity::parse(stem)?,
            text: text.into(),
        })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn identity(&self) -> FileIdentity {
        self.identity
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

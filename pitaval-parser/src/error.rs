//! Errors raised while turning a source file into an edition

use crate::transforms::TransformError;
use std::fmt;

/// Error that can occur while loading or analysing a source document
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The stem does not start with `Bd<digits>_<4-digit-year>_<digits>`
    InvalidFilename(String),
    /// The document has no text blocks, so no title can be derived
    EmptyDocument,
    /// The file is not valid UTF-8
    Encoding(String),
    /// IO error when reading the file
    Io(String),
    /// The text pipeline rejected the content (e.g. a control character)
    Transform(TransformError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFilename(stem) => write!(
                f,
                "filename '{}' does not match Bd<volume>_<year>_<sequence>",
                stem
            ),
            ParseError::EmptyDocument => write!(f, "document contains no text"),
            ParseError::Encoding(msg) => write!(f, "invalid UTF-8: {}", msg),
            ParseError::Io(msg) => write!(f, "IO error: {}", msg),
            ParseError::Transform(err) => write!(f, "invalid source text: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ParseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ParseError::Encoding(err.utf8_error().to_string())
    }
}

impl From<TransformError> for ParseError {
    fn from(err: TransformError) -> Self {
        ParseError::Transform(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filename_names_the_stem() {
        let err = ParseError::InvalidFilename("notes".to_string());
        assert!(err.to_string().contains("'notes'"));
    }

    #[test]
    fn utf8_errors_become_encoding_errors() {
        let err: ParseError = String::from_utf8(vec![0x66, 0xff]).unwrap_err().into();
        assert!(matches!(err, ParseError::Encoding(_)));
    }

    #[test]
    fn forbidden_characters_name_line_and_code_point() {
        let err: ParseError = TransformError::ForbiddenCharacter {
            line: 4,
            character: '\u{0007}',
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid source text: line 4: character U+0007 is not allowed in XML"
        );
    }
}

//! Transform pipeline
//!
//! Text processing is written as typed stages that compose:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//!
//! let pipeline = Transform::from_fn(Ok)
//!     .then(NormalizeText)   // String → String
//!     .then(SplitBlocks);    // String → Vec<TextBlock>
//! ```
//!
//! `then` only accepts a stage whose input type is the current output type, so a mis-ordered
//! pipeline does not compile. Standard pipelines are prebuilt statics; [`STRING_TO_BLOCKS`] is
//! the one every source document goes through.

use crate::block::{split_blocks, TextBlock};
use crate::normalize::{find_forbidden_char, normalize_text};
use once_cell::sync::Lazy;
use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The text holds a character that XML 1.0 does not allow
    ForbiddenCharacter { line: usize, character: char },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::ForbiddenCharacter { line, character } => write!(
                f,
                "line {}: character U+{:04X} is not allowed in XML",
                line, *character as u32
            ),
        }
    }
}

impl std::error::Error for TransformError {}

/// A single processing stage from `I` to `O`
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composed pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Start a pipeline from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, extending the output type to `O2`
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

/// Raw text → normalized text
pub struct NormalizeText;

impl Runnable<String, String> for NormalizeText {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(normalize_text(&input))
    }
}

/// Fails on the first character an XML document cannot carry
pub struct RejectForbiddenChars;

impl Runnable<String, String> for RejectForbiddenChars {
    fn run(&self, input: String) -> Result<String, TransformError> {
        match find_forbidden_char(&input) {
            Some((line, character)) => Err(TransformError::ForbiddenCharacter { line, character }),
            None => Ok(input),
        }
    }
}

/// Normalized text → paragraph-mode blocks
pub struct SplitBlocks;

impl Runnable<String, Vec<TextBlock>> for SplitBlocks {
    fn run(&self, input: String) -> Result<Vec<TextBlock>, TransformError> {
        let blocks = split_blocks(&input);
        tracing::debug!(blocks = blocks.len(), "split text into blocks");
        Ok(blocks)
    }
}

/// Type alias for the block pipeline
pub type BlockTransform = Transform<String, Vec<TextBlock>>;

/// Raw file content → ordered text blocks
///
/// 1. Normalization (form-feed lines, line endings, trailing whitespace)
/// 2. Rejection of characters outside the XML 1.0 `Char` production
/// 3. Paragraph-mode splitting
pub static STRING_TO_BLOCKS: Lazy<BlockTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(NormalizeText)
        .then(RejectForbiddenChars)
        .then(SplitBlocks)
});

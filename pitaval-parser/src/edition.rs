//! The edition record
//!
//! Everything the TEI assembler needs for one document, computed from a [`SourceDocument`]:
//!
//! - identity from the filename (volume, year, sequence)
//! - title and citation from the leading blocks
//! - editors from the volume
//! - body nodes from all blocks

use crate::block::TextBlock;
use crate::citation::build_citation;
use crate::editors::{EditorRecord, EditorTable};
use crate::error::ParseError;
use crate::segment::{segment, BodyNode};
use crate::source::SourceDocument;
use crate::title::extract_title;
use crate::transforms::STRING_TO_BLOCKS;
use serde::Serialize;

/// Semantic content of one converted document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edition<'a> {
    pub stem: String,
    pub volume: u32,
    pub year: u32,
    pub sequence: u32,
    pub title: String,
    pub citation: String,
    pub editors: Vec<&'a EditorRecord>,
    pub body: Vec<BodyNode>,
}

impl<'a> Edition<'a> {
    /// Analyse a source document.
    pub fn build(source: &SourceDocument, editors: &'a EditorTable) -> Result<Self, ParseError> {
        let blocks = STRING_TO_BLOCKS.run(source.text().to_string())?;
        Self::from_blocks(source, &blocks, editors)
    }

    /// Build from blocks that were already split.
    pub fn from_blocks(
        source: &SourceDocument,
        blocks: &[TextBlock],
        editors: &'a EditorTable,
    ) -> Result<Self, ParseError> {
        let identity = source.identity();
        let title = extract_title(blocks)?;
        let citation = build_citation(&title, identity.volume, identity.year);
        let selected = editors.select(identity.volume);
        let body = segment(blocks);

        tracing::debug!(
            stem = source.stem(),
            %title,
            editors = selected.len(),
            nodes = body.len(),
            "built edition"
        );

        Ok(Edition {
            stem: source.stem().to_string(),
            volume: identity.volume,
            year: identity.year,
            sequence: identity.sequence,
            title,
            citation,
            editors: selected,
            body,
        })
    }
}

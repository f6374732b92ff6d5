//! Body segmentation
//!
//! Every block becomes exactly one body node. The rule depends only on the block's position and
//! on whether it spans several lines:
//!
//! | Position | Lines | Node         | Text handling                              |
//! |----------|-------|--------------|--------------------------------------------|
//! | 0        | any   | `Heading`    | newlines become single spaces              |
//! | > 0      | > 1   | `VerseGroup` | one entry per line, verbatim               |
//! | > 0      | 1     | `Paragraph`  | verbatim                                   |
//!
//! The heading rule wins over the multi-line rule. Prose in the transcriptions is one line per
//! paragraph, so a block with internal line breaks is set verse (poems, songs, quoted
//! inscriptions). Whitespace inside the heading is not collapsed, unlike the title.

use crate::block::TextBlock;
use serde::Serialize;

/// A structural node of the narrative body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BodyNode {
    Heading { text: String },
    Paragraph { text: String },
    /// Each line is followed by a line break when rendered, the last one included.
    VerseGroup { lines: Vec<String> },
}

impl BodyNode {
    pub fn kind(&self) -> &'static str {
        match self {
            BodyNode::Heading { .. } => "heading",
            BodyNode::Paragraph { .. } => "paragraph",
            BodyNode::VerseGroup { .. } => "verse-group",
        }
    }
}

/// Classify a single block at `index`.
pub fn classify(index: usize, block: &TextBlock) -> BodyNode {
    if index == 0 {
        BodyNode::Heading {
            text: block.text().replace('\n', " "),
        }
    } else if block.is_multiline() {
        BodyNode::VerseGroup {
            lines: block.lines().map(str::to_string).collect(),
        }
    } else {
        BodyNode::Paragraph {
            text: block.text().to_string(),
        }
    }
}

/// Segment a whole document body, one node per block in block order.
pub fn segment(blocks: &[TextBlock]) -> Vec<BodyNode> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let node = classify(index, block);
            tracing::trace!(index, line = block.line(), kind = node.kind(), "classified block");
            node
        })
        .collect()
}

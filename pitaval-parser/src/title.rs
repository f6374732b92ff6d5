//! Title extraction
//!
//! Narratives open with a title that may run over several blocks (a main title block, then a
//! subtitle block ending in a period). Leading blocks are concatenated as-is, without a
//! separator, up to and including the first block that ends in `.`. If none does, every block is
//! taken. The result is flattened to one line with single spaces.

use crate::block::TextBlock;
use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Derive the title from the leading blocks of a document.
pub fn extract_title(blocks: &[TextBlock]) -> Result<String, ParseError> {
    if blocks.is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let mut accumulated = String::new();
    for block in blocks {
        accumulated.push_str(block.text());
        if block.ends_with_period() {
            break;
        }
    }

    let flattened = accumulated.replace('\n', " ");
    Ok(WHITESPACE_RUN.replace_all(&flattened, " ").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(texts: &[&str]) -> Vec<TextBlock> {
        texts.iter().map(|t| TextBlock::new(*t)).collect()
    }

    #[test]
    fn single_block_title() {
        let title = extract_title(&blocks(&["A short title.", "Body."])).unwrap();
        assert_eq!(title, "A short title.");
    }

    #[test]
    fn stops_at_first_block_ending_in_period() {
        let title = extract_title(&blocks(&["Der Fall", " Lafarge.", "Marie Cappelle."])).unwrap();
        assert_eq!(title, "Der Fall Lafarge.");
    }

    #[test]
    fn concatenates_without_separator() {
        let title = extract_title(&blocks(&["Der Fall", "Lafarge."])).unwrap();
        assert_eq!(title, "Der FallLafarge.");
    }

    #[test]
    fn flattens_and_collapses_whitespace() {
        let title = extract_title(&blocks(&["Die  Giftmischerin\n  Gesche\tGottfried."])).unwrap();
        assert_eq!(title, "Die Giftmischerin Gesche Gottfried.");
    }

    #[test]
    fn absorbs_everything_without_a_period() {
        let title = extract_title(&blocks(&["Erster", "Zweiter", "Dritter"])).unwrap();
        assert_eq!(title, "ErsterZweiterDritter");
    }

    #[test]
    fn empty_sequence_is_an_error() {
        assert_eq!(extract_title(&[]), Err(ParseError::EmptyDocument));
    }
}

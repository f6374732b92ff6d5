//! Filename conventions
//!
//! Source files are named `Bd<volume>_<year>_<sequence>` followed by anything, e.g.
//! `Bd05_1845_02_Der_Mord.txt`. Only the prefix carries meaning; the rest is ignored.
//!
//! Output files keep the stem, restricted to `[A-Za-z0-9_-]` and capped in length.

use crate::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Maximum length of a normalized output stem, in characters.
pub const MAX_STEM_LEN: usize = 100;

static STEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Bd([0-9]+)_([0-9]{4})_([0-9]+)").expect("valid stem regex"));

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid filename regex"));

/// Volume, year and sequence number encoded in a source filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileIdentity {
    pub volume: u32,
    pub year: u32,
    pub sequence: u32,
}

impl FileIdentity {
    /// Parse the identity from a filename stem (no extension).
    pub fn parse(stem: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidFilename(stem.to_string());
        let caps = STEM_PATTERN.captures(stem).ok_or_else(invalid)?;
        let number = |i: usize| caps[i].parse::<u32>().map_err(|_| invalid());

        Ok(FileIdentity {
            volume: number(1)?,
            year: number(2)?,
            sequence: number(3)?,
        })
    }
}

/// Normalize a stem into a safe output filename with the given extension.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, and the result is cut to `max_len`
/// characters before the extension is appended. No collision detection happens here.
pub fn output_filename(stem: &str, max_len: usize, extension: &str) -> String {
    let safe = UNSAFE_CHARS.replace_all(stem, "_");
    let truncated: String = safe.chars().take(max_len).collect();
    format!("{}.{}", truncated, extension)
}

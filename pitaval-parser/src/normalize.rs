//! Raw text cleanup
//!
//! The transcriptions come out of an OCR/typesetting pass that leaves page furniture behind:
//! running titles and column heads are emitted on lines that start with a form feed. Those lines
//! carry no narrative text and are dropped whole.
//!
//! Steps:
//! 1. Line terminators (CRLF, LF, lone CR) become LF.
//! 2. Lines starting with U+000C are removed, terminator included.
//! 3. Trailing whitespace at the very end of the text is removed. Lines are not trimmed
//!    individually; the splitter only trims the end of each block.
//!
//! A form feed that does not start a line survives normalization. It is one of the characters
//! [`find_forbidden_char`] reports, since XML 1.0 cannot carry it.

/// Form feed, the marker for page/column title lines.
pub const FORM_FEED: char = '\u{000C}';

/// Normalize raw file content. See the module docs for the steps.
pub fn normalize_text(raw: &str) -> String {
    let unified = normalize_line_endings(raw);
    let mut out = String::with_capacity(unified.len());
    for line in unified.split_inclusive('\n') {
        if line.starts_with(FORM_FEED) {
            continue;
        }
        out.push_str(line);
    }
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out
}

/// Convert CRLF and lone CR terminators to LF.
pub fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whether `c` matches the XML 1.0 `Char` production
pub fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}' => true,
        _ => false,
    }
}

/// First character outside XML 1.0 `Char`, with its 1-based line in `text`
pub fn find_forbidden_char(text: &str) -> Option<(usize, char)> {
    text.split('\n').enumerate().find_map(|(index, line)| {
        line.chars()
            .find(|c| !is_xml_char(*c))
            .map(|c| (index + 1, c))
    })
}

//! Text blocks
//!
//! A block is a maximal run of non-blank lines. Blank lines (empty or whitespace-only) separate
//! blocks and are discarded, however many there are. Inside a block the line structure is kept,
//! since the body segmenter tells prose from verse by it.
//!
//! | Source                     | Blocks                  |
//! |----------------------------|-------------------------|
//! | `"a\nb\n\nc"`              | `"a\nb"`, `"c"`         |
//! | `"\n\na\n \t\n\n\nb"`      | `"a"`, `"b"`            |
//! | `"a  \n\nb"`               | `"a"`, `"b"`            |

use std::fmt;

/// One paragraph-mode block of normalized text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    text: String,
    line: usize,
}

impl TextBlock {
    /// Create a block from its text, starting at line 1.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line: 1,
        }
    }

    /// Set the 1-based source line the block starts on.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line of the normalized text on which this block starts
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Whether the block spans more than one source line
    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }

    pub fn ends_with_period(&self) -> bool {
        self.text.ends_with('.')
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split normalized text into blocks, in source order.
pub fn split_blocks(text: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0;

    for (index, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            flush(&mut current, start_line, &mut blocks);
            continue;
        }
        if current.is_empty() {
            start_line = index + 1;
        }
        current.push(line);
    }
    flush(&mut current, start_line, &mut blocks);

    blocks
}

fn flush(current: &mut Vec<&str>, start_line: usize, blocks: &mut Vec<TextBlock>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join("\n");
    blocks.push(TextBlock::new(joined.trim_end()).at_line(start_line));
    current.clear();
}

//! # pitaval-parser
//!
//! The text-to-structure core of the Pitaval converter.
//!
//! A source file is a plain-text transcription of one case narrative from "Der neue Pitaval".
//! This crate turns it into an [`Edition`]: the bibliographic values derived from the filename
//! (volume, year, sequence), the title and citation derived from the text, the editors selected
//! for the volume, and the body split into heading, paragraphs and verse groups.
//!
//! File Layout
//!
//!     .
//!     ├── error.rs        # ParseError
//!     ├── filename.rs     # Bd<vol>_<year>_<seq> stems, output filenames
//!     ├── normalize.rs    # form-feed lines, line endings, trailing whitespace
//!     ├── block.rs        # TextBlock and paragraph-mode splitting
//!     ├── transforms.rs   # Runnable / Transform pipeline, STRING_TO_BLOCKS
//!     ├── title.rs        # title extraction
//!     ├── citation.rs     # citation string
//!     ├── editors.rs      # EditorRecord table and volume rule
//!     ├── segment.rs      # Heading / Paragraph / VerseGroup classification
//!     ├── source.rs       # SourceDocument loading
//!     └── edition.rs      # Edition record
//!
//! There is no XML here. The assembler in `pitaval-tei` consumes the [`Edition`] and owns the
//! template, the tree, and serialization, so everything in this crate is testable on strings.
//!
//! Two traversals of the same block sequence happen: the title extractor may consume several
//! leading blocks, but the body segmenter always makes block 0 the heading. Downstream documents
//! depend on that, so the two are kept independent.

pub mod block;
pub mod citation;
pub mod edition;
pub mod editors;
pub mod error;
pub mod filename;
pub mod normalize;
pub mod segment;
pub mod source;
pub mod title;
pub mod transforms;

pub use block::TextBlock;
pub use edition::Edition;
pub use editors::{EditorRecord, EditorTable, EDITORS};
pub use error::ParseError;
pub use filename::FileIdentity;
pub use segment::BodyNode;
pub use source::SourceDocument;

//! TEI-P5 assembly for Pitaval editions
//!
//!     This crate takes the [`Edition`](pitaval_parser::Edition) records produced by
//!     `pitaval-parser` and writes them into a TEI template: header metadata (title, volume,
//!     date, citation, editors) and the body `div` (head, p, lg/l/lb).
//!
//! Architecture
//!
//!     - Template: the TEI skeleton, parsed with xml5ever into an RcDom tree per document
//!     - NodePath: a small location-path subset used to find population targets
//!     - Assembler: template + targets, turns an Edition into a TeiDocument
//!     - XmlFormatter: injected pretty-printer capability (passthrough, xmllint)
//!     - FormatterRegistry: lookup of formatters by name
//!     - convert: the batch driver over an input directory
//!
//!     Like the parser, this is a pure lib: no printing, no env vars. Diagnostics go through
//!     `tracing`, and the CLI decides where they end up.
//!
//!     The file structure :
//!     .
//!     ├── error.rs        # TeiError
//!     ├── dom.rs          # RcDom node helpers
//!     ├── path.rs         # NodePath
//!     ├── template.rs     # Template loading, embedded default
//!     ├── assemble.rs     # Targets, Assembler, TeiDocument
//!     ├── serializer.rs   # RcDom → XML string
//!     ├── formatter.rs    # XmlFormatter trait and implementations
//!     ├── registry.rs     # FormatterRegistry
//!     ├── convert.rs      # batch conversion
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     We do not write an XML parser or serializer; xml5ever and markup5ever_rcdom do that.
//!     The work here is locating nodes in the template and appending the edition's content.
//!     The template is trusted: nothing is validated beyond the targets being present.

pub mod assemble;
pub mod convert;
pub mod dom;
pub mod error;
pub mod formatter;
pub mod path;
pub mod registry;
pub mod serializer;
pub mod template;

pub use assemble::{Assembler, Targets, TeiDocument};
pub use convert::{convert_directory, BatchReport, BatchSpec, ConvertError, ConvertOptions, Emit};
pub use error::TeiError;
pub use formatter::{PassthroughFormatter, XmlFormatter, XmllintFormatter};
pub use path::NodePath;
pub use registry::{FormatterRegistry, AUTO};
pub use template::Template;

/// The TEI namespace; template elements are only matched in it.
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";

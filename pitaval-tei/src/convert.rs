//! Batch conversion of a source directory
//!
//! ```ignore
//! let assembler = Assembler::new(Template::embedded(), &Targets::default())?;
//! let spec = BatchSpec::new("corpus", "out", &assembler, &PassthroughFormatter);
//! let report = convert_directory(&spec)?;
//! println!("{} files written", report.written.len());
//! ```
//!
//! Files are processed one at a time, in file-name order unless sorting is switched off. The
//! first failure ends the run, and the error names the file that caused it.

use crate::assemble::Assembler;
use crate::error::TeiError;
use crate::formatter::XmlFormatter;
use pitaval_parser::filename::{output_filename, MAX_STEM_LEN};
use pitaval_parser::{Edition, EditorTable, ParseError, SourceDocument, EDITORS};
use serde::Deserialize;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What is written per input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    /// TEI-P5 XML
    #[default]
    Tei,
    /// The Edition record as JSON
    Json,
}

impl Emit {
    pub fn extension(self) -> &'static str {
        match self {
            Emit::Tei => "xml",
            Emit::Json => "json",
        }
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emit::Tei => f.write_str("tei"),
            Emit::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Extension of input files, without the dot. Compared case-sensitively.
    pub input_extension: String,
    /// Process inputs in file-name order instead of listing order
    pub sort: bool,
    pub max_stem_len: usize,
    pub emit: Emit,
    /// Keep the unformatted document in formatter errors
    pub dump_on_error: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            input_extension: "txt".to_string(),
            sort: true,
            max_stem_len: MAX_STEM_LEN,
            emit: Emit::Tei,
            dump_on_error: true,
        }
    }
}

/// Everything one run needs
pub struct BatchSpec<'a> {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub assembler: &'a Assembler,
    pub formatter: &'a dyn XmlFormatter,
    pub editors: &'a EditorTable,
    pub options: ConvertOptions,
}

impl<'a> BatchSpec<'a> {
    pub fn new(
        input_dir: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        assembler: &'a Assembler,
        formatter: &'a dyn XmlFormatter,
    ) -> Self {
        BatchSpec {
            input_dir: input_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            assembler,
            formatter,
            editors: &EDITORS,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }
}

/// Errors that end a batch run
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Bad arguments or settings, detected before any file is touched
    Config(String),
    Filesystem { path: PathBuf, message: String },
    /// The source file could not be turned into an edition
    Document { file: PathBuf, source: ParseError },
    /// The edition could not be written into the template
    Tei { file: PathBuf, source: TeiError },
    Formatter {
        file: PathBuf,
        message: String,
        unformatted: Option<String>,
    },
    /// Two inputs normalize to the same output file
    Collision {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },
}

impl ConvertError {
    /// The unformatted document carried by a formatter error
    pub fn unformatted(&self) -> Option<&str> {
        match self {
            ConvertError::Formatter { unformatted, .. } => unformatted.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ConvertError::Filesystem { path, message } => {
                write!(f, "{}: {}", path.display(), message)
            }
            ConvertError::Document { file, source } => write!(f, "{}: {}", file.display(), source),
            ConvertError::Tei { file, source } => write!(f, "{}: {}", file.display(), source),
            ConvertError::Formatter { file, message, .. } => {
                write!(f, "{}: formatter failed: {}", file.display(), message)
            }
            ConvertError::Collision {
                first,
                second,
                output,
            } => write!(
                f,
                "{} and {} both map to {}",
                first.display(),
                second.display(),
                output.display()
            ),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Document { source, .. } => Some(source),
            ConvertError::Tei { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Files written by a run, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
}

/// Convert every input file in `spec.input_dir`
pub fn convert_directory(spec: &BatchSpec<'_>) -> Result<BatchReport, ConvertError> {
    if !spec.input_dir.is_dir() {
        return Err(ConvertError::Config(format!(
            "input directory {} does not exist",
            spec.input_dir.display()
        )));
    }
    fs::create_dir_all(&spec.output_dir).map_err(|e| fs_error(&spec.output_dir, e))?;

    let inputs = list_inputs(&spec.input_dir, &spec.options)?;
    tracing::info!(
        count = inputs.len(),
        input = %spec.input_dir.display(),
        output = %spec.output_dir.display(),
        emit = %spec.options.emit,
        formatter = spec.formatter.name(),
        template = spec.assembler.template().origin(),
        "converting"
    );

    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut report = BatchReport::default();

    for input in inputs {
        let source = SourceDocument::from_path(&input).map_err(|err| ConvertError::Document {
            file: input.clone(),
            source: err,
        })?;

        let name = output_filename(
            source.stem(),
            spec.options.max_stem_len,
            spec.options.emit.extension(),
        );
        let output = spec.output_dir.join(name);
        if let Some(first) = claimed.get(&output) {
            return Err(ConvertError::Collision {
                first: first.clone(),
                second: input,
                output,
            });
        }

        let edition = Edition::build(&source, spec.editors).map_err(|err| {
            ConvertError::Document {
                file: input.clone(),
                source: err,
            }
        })?;

        let contents = match spec.options.emit {
            Emit::Tei => render_tei(spec, &input, &edition)?,
            Emit::Json => render_json(&input, &edition)?,
        };

        fs::write(&output, contents).map_err(|e| fs_error(&output, e))?;
        tracing::info!(input = %input.display(), output = %output.display(), "wrote");

        claimed.insert(output.clone(), input);
        report.written.push(output);
    }

    Ok(report)
}

fn render_tei(
    spec: &BatchSpec<'_>,
    input: &Path,
    edition: &Edition<'_>,
) -> Result<String, ConvertError> {
    let tei_error = |source: TeiError| ConvertError::Tei {
        file: input.to_path_buf(),
        source,
    };
    let xml = spec
        .assembler
        .assemble(edition)
        .and_then(|doc| doc.serialize())
        .map_err(tei_error)?;

    spec.formatter
        .format(&xml)
        .map_err(|err| ConvertError::Formatter {
            file: input.to_path_buf(),
            message: match err {
                TeiError::Formatter(msg) => msg,
                other => other.to_string(),
            },
            unformatted: spec.options.dump_on_error.then_some(xml),
        })
}

fn render_json(input: &Path, edition: &Edition<'_>) -> Result<String, ConvertError> {
    let mut json = serde_json::to_string_pretty(edition).map_err(|e| ConvertError::Tei {
        file: input.to_path_buf(),
        source: TeiError::Serialization(e.to_string()),
    })?;
    json.push('\n');
    Ok(json)
}

fn list_inputs(dir: &Path, options: &ConvertOptions) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = fs::read_dir(dir).map_err(|e| fs_error(dir, e))?;
    let wanted = OsStr::new(&options.input_extension);

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| fs_error(dir, e))?.path();
        if path.is_file() && path.extension() == Some(wanted) {
            inputs.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping");
        }
    }
    if options.sort {
        inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(inputs)
}

fn fs_error(path: &Path, err: std::io::Error) -> ConvertError {
    ConvertError::Filesystem {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

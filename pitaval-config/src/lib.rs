//! Configuration loader for the Pitaval converter.
//!
//! `defaults/pitaval.default.toml` is embedded into the binary, so the documented defaults and
//! the runtime behavior cannot drift apart. A user file passed with `--config` and individual
//! CLI flags are layered on top via [`Loader`] before deserializing into [`PitavalConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pitaval_tei::{ConvertOptions, Emit, Targets, XmllintFormatter};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/pitaval.default.toml");

/// Top-level configuration consumed by the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct PitavalConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub formatter: FormatterConfig,
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub extension: String,
    pub sort: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub emit: Emit,
    pub max_stem_len: usize,
}

/// Which formatter to use and how to run the external one.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatterConfig {
    pub name: String,
    pub command: String,
    pub args: Vec<String>,
    pub error_marker: String,
    pub dump_on_error: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Template file; the embedded template is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    pub targets: Targets,
}

impl PitavalConfig {
    /// Per-batch options for the converter.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            input_extension: self.input.extension.clone(),
            sort: self.input.sort,
            max_stem_len: self.output.max_stem_len,
            emit: self.output.emit,
            dump_on_error: self.formatter.dump_on_error,
        }
    }

    /// The external formatter as configured.
    pub fn xmllint(&self) -> XmllintFormatter {
        XmllintFormatter::new(
            self.formatter.command.clone(),
            self.formatter.args.clone(),
            self.formatter.error_marker.clone(),
        )
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PitavalConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PitavalConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.input.extension, "txt");
        assert!(config.input.sort);
        assert_eq!(config.output.emit, Emit::Tei);
        assert_eq!(config.output.max_stem_len, 100);
        assert_eq!(config.formatter.name, "auto");
        assert!(config.template.path.is_none());
    }

    #[test]
    fn default_targets_match_the_assembler_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.template.targets, Targets::default());
    }

    #[test]
    fn default_formatter_matches_xmllint_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.xmllint(), XmllintFormatter::default());
        assert_eq!(config.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.emit", "json")
            .expect("override to apply")
            .set_override("formatter.name", "passthrough")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.emit, Emit::Json);
        assert_eq!(config.formatter.name, "passthrough");
    }

    #[test]
    fn layers_a_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pitaval.toml");
        fs::write(
            &path,
            "[input]\nsort = false\n\n[template]\npath = \"custom.xml\"\n",
        )
        .unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(!config.input.sort);
        assert_eq!(config.input.extension, "txt");
        assert_eq!(config.template.path, Some(PathBuf::from("custom.xml")));
        assert_eq!(config.template.targets.body, "//body/div");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new().with_file("/nonexistent/pitaval.toml").build().is_err());
    }

    #[test]
    fn rejects_unknown_emit_values() {
        let result = Loader::new()
            .set_override("output.emit", "html")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}

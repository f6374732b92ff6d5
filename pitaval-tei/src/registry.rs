//! Formatter registry
//!
//! Formatters are registered and retrieved by name. The name `auto` is not registered; it
//! resolves to `xmllint` when that is available and to `passthrough` otherwise.

use crate::error::TeiError;
use crate::formatter::{PassthroughFormatter, XmlFormatter, XmllintFormatter};
use std::collections::HashMap;

/// Name that picks the best available formatter
pub const AUTO: &str = "auto";

/// Registry of XML formatters
///
/// ```ignore
/// let registry = FormatterRegistry::with_defaults();
/// let formatter = registry.resolve("auto")?;
/// let pretty = formatter.format(&xml)?;
/// ```
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn XmlFormatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        FormatterRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing one with the same name
    pub fn register<F: XmlFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Result<&dyn XmlFormatter, TeiError> {
        self.formatters
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| TeiError::FormatterNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// All registered names (sorted)
    pub fn list_formatters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Like [`get`](Self::get), but also understands `auto`.
    pub fn resolve(&self, name: &str) -> Result<&dyn XmlFormatter, TeiError> {
        if name != AUTO {
            return self.get(name);
        }
        let chosen = match self.get("xmllint") {
            Ok(formatter) if formatter.is_available() => formatter,
            _ => self.get("passthrough")?,
        };
        tracing::debug!(formatter = chosen.name(), "resolved auto formatter");
        Ok(chosen)
    }

    /// Registry with `passthrough` and a default `xmllint`
    pub fn with_defaults() -> Self {
        Self::with_xmllint(XmllintFormatter::default())
    }

    /// Registry with `passthrough` and the given `xmllint` configuration
    pub fn with_xmllint(xmllint: XmllintFormatter) -> Self {
        let mut registry = Self::new();
        registry.register(PassthroughFormatter);
        registry.register(xmllint);
        registry
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

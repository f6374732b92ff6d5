//! TEI templates
//!
//! A template is kept as source text and parsed afresh for every document, since RcDom trees
//! are not cloneable and each document is populated in place.
//!
//! The default template ships inside the binary (`templates/pitaval.tei.xml`), so the converter
//! works without a template next to it.

use crate::error::TeiError;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::fs;
use std::path::Path;
use xml5ever::driver::{parse_document, XmlParseOpts};
use xml5ever::tendril::TendrilSink;

const DEFAULT_TEMPLATE: &str = include_str!("../templates/pitaval.tei.xml");

/// A TEI template and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    origin: String,
}

impl Template {
    /// The template embedded in the crate
    pub fn embedded() -> Self {
        Template {
            source: DEFAULT_TEMPLATE.to_string(),
            origin: "<embedded>".to_string(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TeiError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| TeiError::Template(format!("{}: {}", path.display(), e)))?;
        Ok(Template {
            source,
            origin: path.display().to_string(),
        })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Template {
            source: source.into(),
            origin: "<string>".to_string(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Path or label the template was loaded from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Parse a fresh tree. Fails when the source has no root element.
    pub fn instantiate(&self) -> Result<RcDom, TeiError> {
        let dom =
            parse_document(RcDom::default(), XmlParseOpts::default()).one(self.source.as_str());
        if root_element(&dom.document).is_none() {
            return Err(TeiError::Template(format!(
                "{}: no root element",
                self.origin
            )));
        }
        Ok(dom)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::embedded()
    }
}

/// The first element child of a document node
pub fn root_element(document: &Handle) -> Option<Handle> {
    document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{is_tei_element, local_name};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn embedded_template_has_a_tei_root() {
        let dom = Template::embedded().instantiate().unwrap();
        let root = root_element(&dom.document).unwrap();
        assert!(is_tei_element(&root, "TEI"));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mini.xml");
        fs::write(&path, r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text/></TEI>"#).unwrap();

        let template = Template::from_path(&path).unwrap();
        assert_eq!(template.origin(), path.display().to_string());
        let dom = template.instantiate().unwrap();
        assert_eq!(
            local_name(&root_element(&dom.document).unwrap()).as_deref(),
            Some("TEI")
        );
    }

    #[test]
    fn missing_file_is_a_template_error() {
        let err = Template::from_path("/nonexistent/template.xml").unwrap_err();
        assert!(matches!(err, TeiError::Template(_)));
    }

    #[test]
    fn text_without_elements_is_rejected() {
        let err = Template::from_string("just text").instantiate().err().unwrap();
        assert!(err.to_string().contains("no root element"));
    }
}

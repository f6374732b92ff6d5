//! RcDom → XML string
//!
//! Top-level nodes are serialized one by one with xml5ever. The template's own XML declaration
//! (a processing instruction with target `xml`) is skipped, and a UTF-8 declaration is written
//! instead, so the output carries exactly one.

use crate::error::TeiError;
use markup5ever::serialize::TraversalScope;
use markup5ever_rcdom::{NodeData, RcDom, SerializableHandle};
use xml5ever::serialize::{serialize, SerializeOpts};

/// Declaration written at the top of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub fn serialize_document(dom: &RcDom) -> Result<String, TeiError> {
    let mut output: Vec<u8> = Vec::new();
    output.extend_from_slice(XML_DECLARATION.as_bytes());

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in dom.document.children.borrow().iter() {
        match &child.data {
            NodeData::ProcessingInstruction { target, .. } if &**target == "xml" => continue,
            NodeData::Text { contents } if contents.borrow().trim().is_empty() => continue,
            _ => {}
        }
        output.push(b'\n');
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            TeiError::Serialization(format!("XML serialization failed: {}", e))
        })?;
    }
    output.push(b'\n');

    String::from_utf8(output)
        .map_err(|e| TeiError::Serialization(format!("UTF-8 conversion failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn writes_a_single_declaration() {
        let dom = Template::embedded().instantiate().unwrap();
        let xml = serialize_document(&dom).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert_eq!(xml.matches("<?xml").count(), 1);
    }

    #[test]
    fn keeps_template_content() {
        let dom = Template::embedded().instantiate().unwrap();
        let xml = serialize_document(&dom).unwrap();
        assert!(xml.contains("teiHeader"));
        assert!(xml.contains("Der neue Pitaval"));
        assert!(xml.contains("http://www.tei-c.org/ns/1.0"));
    }

    #[test]
    fn escapes_text() {
        let dom = Template::from_string(
            r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><p>a &amp; b &lt; c</p></TEI>"#,
        )
        .instantiate()
        .unwrap();
        let xml = serialize_document(&dom).unwrap();
        assert!(xml.contains("a &amp; b &lt; c"));
    }
}

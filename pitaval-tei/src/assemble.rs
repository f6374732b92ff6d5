//! Populating the template
//!
//! | Edition field | Default target                  | Operation                       |
//! |---------------|---------------------------------|---------------------------------|
//! | title         | `//title[@type="main"]`         | replace text                    |
//! | volume        | `//biblScope[@unit="volume"]`   | replace text                    |
//! | year          | `//publicationStmt/date`        | replace text, set `@when`       |
//! | citation      | `//sourceDesc/bibl`             | replace text                    |
//! | editors       | `//titleStmt`                   | append `editor` per editor      |
//! | body          | `//body/div`                    | append `head`, `p`, `lg`        |
//! | sequence      | `//idno[@type="sequence"]`      | replace text, if present        |
//!
//! Body nodes map as follows:
//!
//! | BodyNode     | TEI                                           |
//! |--------------|-----------------------------------------------|
//! | Heading      | `<head>text</head>`                           |
//! | Paragraph    | `<p>text</p>`                                 |
//! | VerseGroup   | `<lg><l>line</l><lb/>…</lg>`, `lb` after every `l` |

use crate::dom::{append, replace_text, set_attribute, tei_element, text_element};
use crate::error::TeiError;
use crate::path::NodePath;
use crate::serializer::serialize_document;
use crate::template::Template;
use markup5ever_rcdom::{Handle, RcDom};
use pitaval_parser::{BodyNode, Edition, EditorRecord};
use serde::Deserialize;

/// Target paths, as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Targets {
    pub main_title: String,
    pub volume: String,
    pub date: String,
    pub citation: String,
    pub editors: String,
    pub body: String,
    /// Optional: skipped with a warning when the template lacks it
    #[serde(default)]
    pub sequence: Option<String>,
}

impl Default for Targets {
    fn default() -> Self {
        Targets {
            main_title: r#"//title[@type="main"]"#.to_string(),
            volume: r#"//biblScope[@unit="volume"]"#.to_string(),
            date: "//publicationStmt/date".to_string(),
            citation: "//sourceDesc/bibl".to_string(),
            editors: "//titleStmt".to_string(),
            body: "//body/div".to_string(),
            sequence: Some(r#"//idno[@type="sequence"]"#.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledTargets {
    main_title: NodePath,
    volume: NodePath,
    date: NodePath,
    citation: NodePath,
    editors: NodePath,
    body: NodePath,
    sequence: Option<NodePath>,
}

impl CompiledTargets {
    fn compile(targets: &Targets) -> Result<Self, TeiError> {
        Ok(CompiledTargets {
            main_title: NodePath::parse(&targets.main_title)?,
            volume: NodePath::parse(&targets.volume)?,
            date: NodePath::parse(&targets.date)?,
            citation: NodePath::parse(&targets.citation)?,
            editors: NodePath::parse(&targets.editors)?,
            body: NodePath::parse(&targets.body)?,
            sequence: targets
                .sequence
                .as_deref()
                .map(NodePath::parse)
                .transpose()?,
        })
    }
}

/// Turns editions into TEI documents using one template
#[derive(Debug, Clone)]
pub struct Assembler {
    template: Template,
    targets: CompiledTargets,
}

impl Assembler {
    /// Bind a template to target paths. Paths are parsed here, once per run.
    pub fn new(template: Template, targets: &Targets) -> Result<Self, TeiError> {
        Ok(Assembler {
            template,
            targets: CompiledTargets::compile(targets)?,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Populate a fresh copy of the template with one edition.
    pub fn assemble(&self, edition: &Edition<'_>) -> Result<TeiDocument, TeiError> {
        let dom = self.template.instantiate()?;
        let root = dom.document.clone();
        let t = &self.targets;

        replace_text(&required(&root, &t.main_title)?, &edition.title);
        replace_text(&required(&root, &t.volume)?, &edition.volume.to_string());

        let year = edition.year.to_string();
        let date = required(&root, &t.date)?;
        replace_text(&date, &year);
        set_attribute(&date, "when", &year);

        replace_text(&required(&root, &t.citation)?, &edition.citation);

        if let Some(path) = &t.sequence {
            match path.select_first(&root) {
                Some(node) => replace_text(&node, &edition.sequence.to_string()),
                None => tracing::warn!(
                    path = path.as_str(),
                    template = self.template.origin(),
                    "template has no sequence target, skipping"
                ),
            }
        }

        let title_stmt = required(&root, &t.editors)?;
        for editor in &edition.editors {
            append(&title_stmt, editor_node(editor));
        }

        let div = required(&root, &t.body)?;
        for node in &edition.body {
            append(&div, body_node(node));
        }

        tracing::debug!(stem = %edition.stem, "assembled TEI document");
        Ok(TeiDocument { dom })
    }
}

fn required(root: &Handle, path: &NodePath) -> Result<Handle, TeiError> {
    path.select_first(root).ok_or_else(|| TeiError::MissingNode(path.to_string()))
}

/// `<editor><persName ref="…gnd…"><surname/><forename/></persName></editor>`
fn editor_node(editor: &EditorRecord) -> Handle {
    let uri = editor.gnd_uri();
    let pers_name = tei_element("persName", &[("ref", uri.as_str())]);
    append(&pers_name, text_element("surname", &[], editor.surname));
    append(&pers_name, text_element("forename", &[], editor.forename));
    let node = tei_element("editor", &[]);
    append(&node, pers_name);
    node
}

fn body_node(node: &BodyNode) -> Handle {
    match node {
        BodyNode::Heading { text } => text_element("head", &[], text),
        BodyNode::Paragraph { text } => text_element("p", &[], text),
        BodyNode::VerseGroup { lines } => {
            let lg = tei_element("lg", &[]);
            for line in lines {
                append(&lg, text_element("l", &[], line));
                append(&lg, tei_element("lb", &[]));
            }
            lg
        }
    }
}

/// A populated TEI tree
pub struct TeiDocument {
    dom: RcDom,
}

impl TeiDocument {
    /// First node matching `path`
    pub fn select(&self, path: &str) -> Result<Option<Handle>, TeiError> {
        Ok(NodePath::parse(path)?.select_first(&self.dom.document))
    }

    /// All nodes matching `path`
    pub fn select_all(&self, path: &str) -> Result<Vec<Handle>, TeiError> {
        Ok(NodePath::parse(path)?.select_all(&self.dom.document))
    }

    /// Serialize to XML with a declaration, unformatted
    pub fn serialize(&self) -> Result<String, TeiError> {
        serialize_document(&self.dom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{attribute, element_children, local_name, text_content};
    use pitaval_parser::{SourceDocument, EDITORS};

    fn edition(stem: &str, text: &str) -> Edition<'static> {
        let source = SourceDocument::from_string(stem, text).unwrap();
        Edition::build(&source, &EDITORS).unwrap()
    }

    fn assemble(stem: &str, text: &str) -> TeiDocument {
        Assembler::new(Template::embedded(), &Targets::default())
            .unwrap()
            .assemble(&edition(stem, text))
            .unwrap()
    }

    fn text_at(doc: &TeiDocument, path: &str) -> String {
        text_content(&doc.select(path).unwrap().unwrap())
    }

    #[test]
    fn fills_header_metadata() {
        let doc = assemble("Bd05_1845_02", "A short title.\n\nBody para one.\n");

        assert_eq!(text_at(&doc, r#"//title[@type="main"]"#), "A short title.");
        assert_eq!(text_at(&doc, r#"//biblScope[@unit="volume"]"#), "5");
        assert_eq!(text_at(&doc, "//publicationStmt/date"), "1845");
        assert_eq!(text_at(&doc, r#"//idno[@type="sequence"]"#), "2");
        assert_eq!(
            text_at(&doc, "//sourceDesc/bibl"),
            "A short title. In: Der neue Pitaval, Bd. 5. Leipzig, 1845."
        );
        let date = doc.select("//publicationStmt/date").unwrap().unwrap();
        assert_eq!(attribute(&date, "when").as_deref(), Some("1845"));
    }

    #[test]
    fn appends_editors_in_order() {
        let doc = assemble("Bd05_1845_02", "Titel.");
        let editors = doc.select_all("//titleStmt/editor").unwrap();
        assert_eq!(editors.len(), 2);
        assert_eq!(text_content(&editors[0]), "HäringWilhelm");
        assert_eq!(text_content(&editors[1]), "HitzigJulius Eduard");

        let pers = doc.select("//titleStmt/editor/persName").unwrap().unwrap();
        assert_eq!(
            attribute(&pers, "ref").as_deref(),
            Some("http://d-nb.info/gnd/118501828")
        );
    }

    #[test]
    fn later_volumes_have_one_editor() {
        let doc = assemble("Bd31_1861_03", "Titel.");
        let surnames: Vec<_> = doc
            .select_all("//editor//surname")
            .unwrap()
            .iter()
            .map(text_content)
            .collect();
        assert_eq!(surnames, vec!["Vollert"]);
    }

    #[test]
    fn renders_body_nodes() {
        let doc = assemble("Bd05_1845_02", "Titel.\n\nProsa.\n\nfoo\nbar");
        let div = doc.select("//body/div").unwrap().unwrap();
        let names: Vec<_> = element_children(&div)
            .iter()
            .filter_map(local_name)
            .collect();
        assert_eq!(names, vec!["head", "p", "lg"]);

        let lg = doc.select("//div/lg").unwrap().unwrap();
        let parts: Vec<_> = element_children(&lg)
            .iter()
            .map(|n| (local_name(n).unwrap(), text_content(n)))
            .collect();
        assert_eq!(
            parts,
            vec![
                ("l".to_string(), "foo".to_string()),
                ("lb".to_string(), String::new()),
                ("l".to_string(), "bar".to_string()),
                ("lb".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn missing_target_is_an_error() {
        let template = Template::from_string(
            r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><teiHeader/><text><body><div/></body></text></TEI>"#,
        );
        let assembler = Assembler::new(template, &Targets::default()).unwrap();
        let err = assembler.assemble(&edition("Bd05_1845_02", "Titel.")).err().unwrap();
        assert_eq!(
            err,
            TeiError::MissingNode(r#"//title[@type="main"]"#.to_string())
        );
    }

    #[test]
    fn sequence_target_is_optional() {
        let template = Template::from_string(
            r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
                 <teiHeader><fileDesc>
                   <titleStmt><title type="main"/></titleStmt>
                   <publicationStmt><date/></publicationStmt>
                   <seriesStmt><biblScope unit="volume"/></seriesStmt>
                   <sourceDesc><bibl/></sourceDesc>
                 </fileDesc></teiHeader>
                 <text><body><div/></body></text>
               </TEI>"#,
        );
        let assembler = Assembler::new(template, &Targets::default()).unwrap();
        assert!(assembler.assemble(&edition("Bd05_1845_02", "Titel.")).is_ok());
    }

    #[test]
    fn invalid_target_paths_fail_early() {
        let targets = Targets {
            body: "body/div".to_string(),
            ..Targets::default()
        };
        assert!(matches!(
            Assembler::new(Template::embedded(), &targets),
            Err(TeiError::InvalidPath(_))
        ));
    }

    #[test]
    fn keeps_the_bound_template() {
        let assembler = Assembler::new(Template::embedded(), &Targets::default()).unwrap();
        assert_eq!(assembler.template().origin(), "<embedded>");
    }
}

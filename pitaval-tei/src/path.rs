//! Node paths
//!
//! Population targets are written as a small subset of XPath location paths:
//!
//! | Path                          | Meaning                                             |
//! |-------------------------------|-----------------------------------------------------|
//! | `//titleStmt`                 | any `titleStmt` element                             |
//! | `//publicationStmt/date`      | `date` that is a child of a `publicationStmt`       |
//! | `//title[@type="main"]`       | any `title` whose `type` attribute is `main`        |
//! | `/TEI/text//div[@type='case']`| `div` below `text`, which is a child of root `TEI`  |
//!
//! Steps are element local names in the TEI namespace, optionally with one attribute-equality
//! predicate. `/` selects children, `//` descendants. Matches are returned in document order.

use crate::dom::{attribute, element_children, is_tei_element};
use crate::error::TeiError;
use markup5ever_rcdom::Handle;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::rc::Rc;

static STEP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([A-Za-z_][A-Za-z0-9_.-]*)(?:\[@([A-Za-z_][A-Za-z0-9_.-]*)=(?:"([^"]*)"|'([^']*)')\])?$"#)
        .expect("valid path step regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    name: String,
    predicate: Option<(String, String)>,
}

impl Step {
    fn matches(&self, node: &Handle) -> bool {
        if !is_tei_element(node, &self.name) {
            return false;
        }
        match &self.predicate {
            Some((key, value)) => attribute(node, key).as_deref() == Some(value.as_str()),
            None => true,
        }
    }
}

/// A parsed location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    source: String,
    steps: Vec<Step>,
}

impl NodePath {
    pub fn parse(path: &str) -> Result<Self, TeiError> {
        let invalid = |why: &str| TeiError::InvalidPath(format!("'{}': {}", path, why));
        let mut steps = Vec::new();
        let mut rest = path.trim();

        if rest.is_empty() {
            return Err(invalid("empty path"));
        }

        while !rest.is_empty() {
            let axis = if let Some(after) = rest.strip_prefix("//") {
                rest = after;
                Axis::Descendant
            } else if let Some(after) = rest.strip_prefix('/') {
                rest = after;
                Axis::Child
            } else {
                return Err(invalid("steps must be separated by '/' or '//'"));
            };

            let end = step_end(rest);
            let text = &rest[..end];
            rest = &rest[end..];

            let caps = STEP_PATTERN
                .captures(text)
                .ok_or_else(|| invalid(&format!("malformed step '{}'", text)))?;
            let predicate = caps.get(2).map(|key| {
                let value = caps.get(3).or_else(|| caps.get(4)).map_or("", |m| m.as_str());
                (key.as_str().to_string(), value.to_string())
            });
            steps.push(Step {
                axis,
                name: caps[1].to_string(),
                predicate,
            });
        }

        Ok(NodePath {
            source: path.trim().to_string(),
            steps,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// All matching elements below `root`, in document order.
    pub fn select_all(&self, root: &Handle) -> Vec<Handle> {
        let mut context = vec![root.clone()];
        for step in &self.steps {
            let mut next: Vec<Handle> = Vec::new();
            for node in &context {
                let candidates = match step.axis {
                    Axis::Child => element_children(node),
                    Axis::Descendant => descendants(node),
                };
                for candidate in candidates {
                    if step.matches(&candidate) && !next.iter().any(|n| Rc::ptr_eq(n, &candidate))
                    {
                        next.push(candidate);
                    }
                }
            }
            context = next;
        }
        context
    }

    /// The first matching element in document order
    pub fn select_first(&self, root: &Handle) -> Option<Handle> {
        self.select_all(root).into_iter().next()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Byte offset of the next `/` outside a predicate, or the end of `rest`.
fn step_end(rest: &str) -> usize {
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, '/') if depth == 0 => return i,
            _ => {}
        }
    }
    rest.len()
}

/// Element descendants of `node` in document order, excluding `node` itself
fn descendants(node: &Handle) -> Vec<Handle> {
    let mut out = Vec::new();
    for child in element_children(node) {
        out.push(child.clone());
        out.extend(descendants(&child));
    }
    out
}

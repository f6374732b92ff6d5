//! RcDom node helpers
//!
//! markup5ever_rcdom exposes the tree as plain `Rc<Node>` with interior mutability. These
//! helpers create TEI elements and text, append them with the parent link set, and read text
//! back for diagnostics and tests.

use crate::TEI_NS;
use markup5ever::{ns, Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Create an element in the TEI namespace with unprefixed attributes
pub fn tei_element(local: &str, attrs: &[(&str, &str)]) -> Handle {
    let name = QualName::new(None, Namespace::from(TEI_NS), LocalName::from(local));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn text_node(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Create a TEI element holding a single text node
pub fn text_element(local: &str, attrs: &[(&str, &str)], text: &str) -> Handle {
    let element = tei_element(local, attrs);
    append(&element, text_node(text));
    element
}

/// Append `child` as the last child of `parent`
pub fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Replace all children of `node` with one text node
pub fn replace_text(node: &Handle, text: &str) {
    for child in node.children.borrow_mut().drain(..) {
        child.parent.set(None);
    }
    append(node, text_node(text));
}

/// Set an unprefixed attribute, overwriting an existing value. No-op on non-elements.
pub fn set_attribute(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        match attrs
            .iter_mut()
            .find(|a| a.name.prefix.is_none() && &*a.name.local == name)
        {
            Some(existing) => existing.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            }),
        }
    }
}

/// Value of an unprefixed attribute
pub fn attribute(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.prefix.is_none() && &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Local name of an element node
pub fn local_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Whether `node` is a TEI element with the given local name
pub fn is_tei_element(node: &Handle, local: &str) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => &*name.ns == TEI_NS && &*name.local == local,
        _ => false,
    }
}

/// Element children of `node`, in order
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated text of all descendant text nodes
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

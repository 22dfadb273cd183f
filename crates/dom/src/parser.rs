//! HTML parsing built on html5ever.
//!
//! The html5ever tree builder produces an [`RcDom`]; this module walks that
//! tree once and converts it into our arena-backed [`Document`]. Doctype and
//! processing instruction nodes are dropped, whitespace-only text is skipped
//! and element attributes are routed through [`Document::set_attribute`] so
//! the id and class caches are populated during the parse.

use crate::tree::Document;
use html5ever::tendril::TendrilSink as _;
use html5ever::{ParseOpts, parse_document};
use indextree::NodeId;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse an HTML string into a [`Document`].
///
/// html5ever follows the HTML parsing algorithm, so fragments are wrapped in
/// the usual `html`/`head`/`body` scaffold and malformed markup is recovered
/// rather than rejected.
#[must_use]
pub fn parse_html(html: &str) -> Document {
    let rc_dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let mut document = Document::new();
    let root = document.root();
    convert_children(&mut document, root, &rc_dom.document);
    debug!("parsed HTML into {} elements", document.elements().len());
    document
}

fn convert_children(document: &mut Document, parent: NodeId, handle: &Handle) {
    for child in handle.children.borrow().iter() {
        convert_node(document, parent, child);
    }
}

fn convert_node(document: &mut Document, parent: NodeId, handle: &Handle) {
    match &handle.data {
        RcNodeData::Document => convert_children(document, parent, handle),
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let node = document.create_text(text);
                document.append_child(parent, node);
            }
        }
        RcNodeData::Comment { contents } => {
            let node = document.create_comment(contents.to_string());
            document.append_child(parent, node);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let node = document.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                document.set_attribute(node, &attr.name.local, attr.value.to_string());
            }
            document.append_child(parent, node);
            convert_children(document, node, handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeData;

    /// Test that fragments gain the standard document scaffold.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_scaffold() {
        let document = parse_html("<div>hello</div>");
        let tags: Vec<&str> = document
            .elements()
            .into_iter()
            .filter_map(|node| document.tag_name(node))
            .collect();
        assert_eq!(tags, vec!["html", "head", "body", "div"]);
    }

    /// Test that attributes parsed from markup populate the caches.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_attributes_from_markup() {
        let document = parse_html(r#"<div id="main" class="alert alert-error"></div>"#);
        let div = document.get_element_by_id("main").unwrap();
        let element = document.element(div).unwrap();
        assert!(element.classes().contains("alert"));
        assert!(element.classes().contains("alert-error"));
        assert_eq!(element.attr("class"), Some("alert alert-error"));
    }

    /// Test that whitespace-only text is dropped and comments survive.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_text_and_comments() {
        let document = parse_html("<div>  \n  <!-- note -->hi</div>");
        let div = document.get_elements_by_tag_name("div")[0];
        let children = document.children(div);
        assert_eq!(children.len(), 2);
        assert!(matches!(
            document.node(children[0]),
            Some(NodeData::Comment(text)) if text.trim() == "note"
        ));
        assert!(matches!(
            document.node(children[1]),
            Some(NodeData::Text(text)) if text == "hi"
        ));
    }

    /// Test that doctype declarations are dropped from the tree.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_doctype_skipped() {
        let document = parse_html("<!DOCTYPE html><p>x</p>");
        let root_children = document.children(document.root());
        assert_eq!(root_children.len(), 1);
        assert_eq!(document.tag_name(root_children[0]), Some("html"));
    }
}

use std::fmt;

use crate::tree::{Document, NodeData};
use indextree::NodeId;

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn push_non_null(children: &mut Vec<Value>, value: Value) {
    if !value.is_null() {
        children.push(value);
    }
}

fn coalesce_children(document: &Document, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in id.children(&document.nodes) {
        if let Some(NodeData::Text(text)) = document.node(child) {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        let value = node_to_json(document, child);
        push_non_null(&mut children, value);
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn sorted_attrs(attrs: &[(String, String)]) -> Map<String, Value> {
    let mut pairs: Vec<(String, String)> = attrs.to_vec();
    pairs.sort();
    let mut attrs_obj = Map::new();
    for (name, value) in pairs {
        attrs_obj.insert(name, Value::String(value));
    }
    attrs_obj
}

fn node_to_json(document: &Document, id: NodeId) -> Value {
    let Some(data) = document.node(id) else {
        return Value::Null;
    };
    match data {
        NodeData::Document => {
            json!({ "type": "document", "children": coalesce_children(document, id) })
        }
        NodeData::Element(element) => {
            let attrs_obj = sorted_attrs(element.attrs());
            let children = coalesce_children(document, id);
            json!({
                "type": "element",
                "tag": element.tag_name.clone(),
                "attrs": Value::Object(attrs_obj),
                "children": children,
            })
        }
        NodeData::Text(text) => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text.clone() })
            }
        }
        NodeData::Comment(text) => json!({ "type": "comment", "text": text.clone() }),
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn escape_text(text: &str) -> String {
            let mut escaped = String::with_capacity(text.len());
            for ch in text.chars() {
                match ch {
                    '\\' => escaped.push_str("\\\\"),
                    '"' => escaped.push_str("\\\""),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    _ => escaped.push(ch),
                }
            }
            escaped
        }

        fn fmt_children(
            document: &Document,
            id: NodeId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            for child in id.children(&document.nodes) {
                fmt_node(document, child, f, depth.saturating_add(1))?;
            }
            Ok(())
        }

        fn fmt_node(
            document: &Document,
            id: NodeId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            fn write_attrs(f: &mut fmt::Formatter<'_>, attrs: &[(String, String)]) -> fmt::Result {
                if attrs.is_empty() {
                    return Ok(());
                }
                let mut pairs: Vec<(String, String)> = attrs.to_vec();
                pairs.sort();
                for (name, value) in pairs {
                    write!(f, " {name}=\"{}\"", escape_text(&value))?;
                }
                Ok(())
            }

            let Some(data) = document.node(id) else {
                return Ok(());
            };
            match data {
                NodeData::Document => {
                    write_indent(f, depth)?;
                    writeln!(f, "#document")?;
                    fmt_children(document, id, f, depth)?;
                }
                NodeData::Element(element) => {
                    write_indent(f, depth)?;
                    write!(f, "<{}", element.tag_name)?;
                    write_attrs(f, element.attrs())?;
                    writeln!(f, ">")?;
                    fmt_children(document, id, f, depth)?;
                    write_indent(f, depth)?;
                    writeln!(f, "</{}>", element.tag_name)?;
                }
                NodeData::Text(text) => {
                    // Skip pure-whitespace text nodes in the printer for cleaner output
                    if text.chars().all(char::is_whitespace) {
                        return Ok(());
                    }
                    write_indent(f, depth)?;
                    writeln!(f, "\"{}\"", escape_text(text))?;
                }
                NodeData::Comment(text) => {
                    write_indent(f, depth)?;
                    writeln!(f, "<!--{}-->", escape_text(text))?;
                }
            }
            Ok(())
        }

        writeln!(f, "Document")?;
        fmt_node(self, self.root, f, 0)
    }
}

impl Document {
    /// Build a deterministic JSON representation of the document.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag": "div", "attrs": {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    /// - Comment: { "type":"comment", "text":"..." }
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        node_to_json(self, self.root)
    }

    /// Pretty JSON string for snapshots and test comparisons.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_json_value())
            .unwrap_or_else(|_| String::from("{}"))
    }
}

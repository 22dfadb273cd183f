//! Document tree structure and node data.

use crate::classlist::ClassList;
use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

/// Data stored for each node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Data for an element node.
///
/// The id and class caches always reflect the attribute pairs; both are
/// refreshed by [`ElementData::set_attr`] and [`ElementData::add_classes`].
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name in ASCII lowercase.
    pub tag_name: String,
    /// Attribute pairs in insertion order, names lowercased.
    attrs: SmallVec<(String, String), 4>,
    /// Cached id attribute value, absent when the attribute is empty.
    id: Option<String>,
    /// Cached class tokens.
    classes: ClassList,
}

impl ElementData {
    #[must_use]
    pub fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attrs: SmallVec::new(),
            id: None,
            classes: ClassList::default(),
        }
    }

    /// Attribute value by name (names compare case-insensitively).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All attribute pairs in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Cached id attribute, absent when empty.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Cached class tokens.
    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Set an attribute, refreshing the id and class caches when those
    /// attributes are written. An empty id value clears the cached id.
    pub fn set_attr(&mut self, name: &str, value: String) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "id" => self.id = (!value.is_empty()).then(|| value.clone()),
            "class" => self.classes = ClassList::from_attr(&value),
            _ => {}
        }
        if let Some(slot) = self
            .attrs
            .iter_mut()
            .find(|(attr_name, _)| attr_name.as_str() == name.as_str())
        {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Append class tokens, splitting whitespace inside each provided name.
    /// Returns how many tokens were newly added; the class attribute pair is
    /// rewritten only when that count is non-zero, so present tokens keep
    /// their position and repeated calls settle to a fixed value.
    pub fn add_classes(&mut self, class_names: &[&str]) -> usize {
        let mut added = 0usize;
        for name in class_names {
            for token in name.split_whitespace() {
                if self.classes.insert(token) {
                    added = added.saturating_add(1);
                }
            }
        }
        if added > 0 {
            let value = self.classes.to_attr_value();
            if let Some(slot) = self
                .attrs
                .iter_mut()
                .find(|(attr_name, _)| attr_name.as_str() == "class")
            {
                slot.1 = value;
            } else {
                self.attrs.push((String::from("class"), value));
            }
        }
        added
    }
}

/// Arena-backed document tree.
///
/// Node handles stay valid for the lifetime of the document; nothing here
/// removes nodes.
pub struct Document {
    pub(crate) nodes: Arena<NodeData>,
    pub(crate) root: NodeId,
}

impl Document {
    /// Create an empty document holding only the document node.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.new_node(NodeData::Document);
        Self { nodes, root }
    }

    /// The document node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element node; the tag name is lowercased.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.nodes.new_node(NodeData::Element(ElementData::new(
            tag_name.to_ascii_lowercase(),
        )))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: String) -> NodeId {
        self.nodes.new_node(NodeData::Text(text))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, comment: String) -> NodeId {
        self.nodes.new_node(NodeData::Comment(comment))
    }

    /// Append a child as the last child of a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.nodes);
    }

    /// Node payload, if the handle is valid for this document.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node).map(Node::get)
    }

    /// Element payload, if the node is an element.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.node(node) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Mutable element payload, if the node is an element.
    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(node).map(Node::get_mut) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.tag_name.as_str())
    }

    /// Attribute value of an element node.
    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|element| element.attr(name))
    }

    /// Set an attribute on an element node; non-element nodes are ignored.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: String) {
        if let Some(element) = self.element_mut(node) {
            element.set_attr(name, value);
        }
    }

    /// Append class tokens to an element node, rewriting its class
    /// attribute. Returns the number of tokens newly added; zero for
    /// non-element nodes and for tokens already present.
    pub fn add_classes(&mut self, node: NodeId, class_names: &[&str]) -> usize {
        self.element_mut(node)
            .map_or(0, |element| element.add_classes(class_names))
    }

    /// Parent node when it is an element. The document node is not an
    /// element, so top-level elements report no parent element.
    #[must_use]
    pub fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(node).and_then(Node::parent)?;
        match self.node(parent) {
            Some(NodeData::Element(_)) => Some(parent),
            _ => None,
        }
    }

    /// Closest preceding sibling that is an element, skipping text and
    /// comment nodes.
    #[must_use]
    pub fn previous_sibling_element(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.nodes.get(node).and_then(Node::previous_sibling);
        while let Some(sibling) = current {
            if matches!(self.node(sibling), Some(NodeData::Element(_))) {
                return Some(sibling);
            }
            current = self.nodes.get(sibling).and_then(Node::previous_sibling);
        }
        None
    }

    /// Child nodes in order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        node.children(&self.nodes).collect()
    }

    /// Every element in document order.
    #[must_use]
    pub fn elements(&self) -> Vec<NodeId> {
        self.root
            .descendants(&self.nodes)
            .filter(|&node| matches!(self.node(node), Some(NodeData::Element(_))))
            .collect()
    }

    /// First element in document order carrying the given id.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements().into_iter().find(|&node| {
            self.element(node)
                .is_some_and(|element| element.id() == Some(id))
        })
    }

    /// Elements with the given tag name, matched case-insensitively, in
    /// document order.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        let needle = tag.to_ascii_lowercase();
        self.elements()
            .into_iter()
            .filter(|&node| {
                self.element(node)
                    .is_some_and(|element| element.tag_name == needle)
            })
            .collect()
    }

    /// Elements carrying the given class token (case-sensitive), in
    /// document order.
    #[must_use]
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&node| {
                self.element(node)
                    .is_some_and(|element| element.classes().contains(class))
            })
            .collect()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

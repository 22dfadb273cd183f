//! Bridges the arena document into the selector engine.

use dom::{Document, ElementData, NodeId};
use selectors::ElementAdapter;

/// Stable cache key for a node. Arena ids are never reused here because
/// nothing removes nodes from a parsed document.
#[inline]
pub(crate) fn node_key(node: NodeId) -> u64 {
    usize::from(node) as u64
}

/// Read-only view of a [`Document`] for selector matching.
pub(crate) struct DocumentAdapter<'doc> {
    pub(crate) document: &'doc Document,
}

impl ElementAdapter for DocumentAdapter<'_> {
    type Handle = NodeId;

    fn unique_key(&self, element: NodeId) -> u64 {
        node_key(element)
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.document.parent_element(element)
    }

    fn previous_sibling_element(&self, element: NodeId) -> Option<NodeId> {
        self.document.previous_sibling_element(element)
    }

    fn tag_name(&self, element: NodeId) -> &str {
        self.document
            .element(element)
            .map_or("", |data| data.tag_name.as_str())
    }

    fn element_id(&self, element: NodeId) -> Option<&str> {
        self.document.element(element).and_then(ElementData::id)
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.document
            .element(element)
            .is_some_and(|data| data.classes().contains(class))
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        self.document.attribute(element, name)
    }
}

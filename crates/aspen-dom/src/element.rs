//! Element surface: attributes and subtree queries
//!
//! Attribute accessors pass through to the element's `NamedNodeMap`;
//! `getElementsBy*` queries walk the subtree in pre-order and return an
//! [`HtmlCollection`] addressable by index or by id/name.

use crate::{DomTree, NamedNodeMap, NodeId};

impl DomTree {
    /// Attribute map of an element node
    pub fn attributes(&self, id: NodeId) -> Option<&NamedNodeMap> {
        self.node(id).as_element().map(|e| &e.attributes)
    }

    /// Mutable attribute map of an element node
    pub fn attributes_mut(&mut self, id: NodeId) -> Option<&mut NamedNodeMap> {
        self.node_mut(id).as_element_mut().map(|e| &mut e.attributes)
    }

    /// Value of an attribute on an element; `None` for other node kinds
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)?.get_attribute(name)
    }

    /// Set an attribute on an element; silent no-op for other node kinds
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(attrs) = self.attributes_mut(id) {
            attrs.set_attribute(name, value);
        }
    }

    /// Remove an attribute from an element; no-op if absent or not an element
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(attrs) = self.attributes_mut(id) {
            attrs.remove_named_item(name);
        }
    }

    /// Whether an element carries the attribute; `false` for other kinds
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attributes(id)
            .is_some_and(|attrs| attrs.has_attribute(name))
    }

    // --- Subtree queries ---

    /// Elements in the subtree rooted at `root`, pre-order, root included
    fn subtree_elements(&self, root: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(root)
            .chain(self.descendants(root))
            .filter(|&id| self.node(id).is_element())
    }

    /// First element in the subtree whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.subtree_elements(root)
            .find(|&el| self.get_attribute(el, "id") == Some(id))
    }

    /// All elements in the subtree whose class list contains `class`
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> HtmlCollection {
        let elements = self
            .subtree_elements(root)
            .filter(|&el| {
                self.get_attribute(el, "class")
                    .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
            })
            .collect();
        HtmlCollection::from_vec(elements)
    }

    /// All elements in the subtree whose `name` attribute equals `name`
    pub fn get_elements_by_name(&self, root: NodeId, name: &str) -> HtmlCollection {
        let elements = self
            .subtree_elements(root)
            .filter(|&el| self.get_attribute(el, "name") == Some(name))
            .collect();
        HtmlCollection::from_vec(elements)
    }

    /// All elements in the subtree with the given tag name
    ///
    /// Tag comparison is ASCII-case-insensitive; `"*"` matches every element.
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> HtmlCollection {
        tracing::debug!(?root, tag, "tag name query");
        let elements = self
            .subtree_elements(root)
            .filter(|&el| tag == "*" || self.node(el).name().eq_ignore_ascii_case(tag))
            .collect();
        HtmlCollection::from_vec(elements)
    }
}

/// Ordered element result set with secondary id/name lookup
///
/// A materialized snapshot of a query, not a live view: later tree
/// mutations do not update it.
#[derive(Debug, Clone, Default)]
pub struct HtmlCollection {
    elements: Vec<NodeId>,
}

impl HtmlCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(elements: Vec<NodeId>) -> Self {
        Self { elements }
    }

    /// Number of elements
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at the given index, `None` when out of bounds
    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.elements.get(index).copied()
    }

    /// First element whose `id` attribute matches, then first whose `name`
    /// attribute matches
    pub fn named_item(&self, tree: &DomTree, name: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .copied()
            .find(|&el| tree.get_attribute(el, "id") == Some(name))
            .or_else(|| {
                self.elements
                    .iter()
                    .copied()
                    .find(|&el| tree.get_attribute(el, "name") == Some(name))
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.iter().copied()
    }
}

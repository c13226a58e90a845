//! DOM Node - common record plus per-kind payload
//!
//! A node is a fixed-kind record: navigation links shared by every kind,
//! and a closed payload union carrying the kind-specific data. Text values
//! exist only on text and comment nodes, attributes only on elements, so
//! those constraints are checked by the type system rather than at runtime.

use crate::{NamedNodeMap, NodeId};

/// Node kind, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element with a tag name and attributes
    Element,
    /// Text content
    Text,
    /// Comment
    Comment,
}

/// A single node in the arena
///
/// Links are arena indices, never owning pointers. `first_child`,
/// `last_child` and `child_count` form the intrusive child list owned by
/// this node; `prev_sibling`/`next_sibling` are owned by the parent's list.
#[derive(Debug)]
pub struct Node {
    /// Parent node (`None` for the document root and detached nodes)
    pub parent: Option<NodeId>,
    /// First child
    pub first_child: Option<NodeId>,
    /// Last child (for O(1) append)
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Number of children (kept in step with the sibling chain)
    pub child_count: usize,
    /// Kind-specific payload
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            child_count: 0,
            data,
        }
    }

    /// Create a new element node
    pub fn element(name: impl Into<String>) -> Self {
        Self::detached(NodeData::Element(ElementData::new(name)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Text(TextData {
            content: content.into(),
        }))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::detached(NodeData::Comment(TextData {
            content: content.into(),
        }))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Kind of this node
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Document => NodeKind::Document,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
            NodeData::Comment(_) => NodeKind::Comment,
        }
    }

    /// Node name: the tag name for elements, `#text`/`#comment`/`#document`
    /// for the other kinds
    pub fn name(&self) -> &str {
        match &self.data {
            NodeData::Document => "#document",
            NodeData::Element(e) => &e.name,
            NodeData::Text(_) => "#text",
            NodeData::Comment(_) => "#comment",
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Check if this is a comment
    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self.data, NodeData::Comment(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Stored text for text and comment nodes, `None` otherwise
    #[inline]
    pub fn node_value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) | NodeData::Comment(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
    /// Comment
    Comment(TextData),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (as given at creation, not case-folded)
    pub name: String,
    /// Attribute map
    pub attributes: NamedNodeMap,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: NamedNodeMap::new(),
        }
    }
}

/// Text or comment payload
#[derive(Debug)]
pub struct TextData {
    pub content: String,
}

//! Aspen DOM - browser-independent document tree
//!
//! An in-memory tree of typed nodes (document, element, text, comment) used
//! as a template store and as a shadow buffer for change detection before
//! rendering. Nodes live in an arena owned by the [`Document`] and are
//! addressed by [`NodeId`], so parent/sibling back-references are plain
//! indices rather than owning pointers.
//!
//! The tree is single-threaded by design: every operation completes
//! synchronously and the caller is responsible for any cross-thread
//! synchronization.

mod attributes;
mod document;
mod element;
mod node;
mod operations;
mod tree;

pub use attributes::{Attr, NamedNodeMap};
pub use document::Document;
pub use element::HtmlCollection;
pub use node::{ElementData, Node, NodeData, NodeKind, TextData};
pub use operations::{DomError, DomResult};
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into the document's arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw arena index
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

//! DOM node operations
//!
//! Node-level mutation and read façade over the tree's child-list surgery:
//! appendChild, insertBefore, replaceChild, removeChild, plus the derived
//! read views (text aggregation, containment, parent element).
//!
//! All structural failures are precondition violations surfaced
//! synchronously; nothing is retried or silently corrected.

use crate::{DomTree, NodeData, NodeId, NodeKind};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Reference node is not a member of the child list
    #[error("node is not a child of this list")]
    NotAChild,
    /// `insert_before` reference node is not a child of the target node
    #[error("before-node is not a child of this node")]
    BeforeNodeNotChild,
    /// `remove_child`/`replace_child` argument is not a child of the target node
    #[error("node is not a child of this node")]
    NodeNotChild,
    /// Operation is not defined for this node kind
    #[error("operation is not valid for this node kind")]
    InvalidNodeType,
}

impl DomTree {
    /// Append `child` as the last child of `parent`
    ///
    /// Moves the node: if it currently sits in another child list it is
    /// detached from there first. Returns the appended node's id.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        self.append_node(parent, child);
        child
    }

    /// Insert `new` immediately before `reference` under `parent`
    ///
    /// # Errors
    ///
    /// `DomError::BeforeNodeNotChild` if `reference` is not a child of
    /// `parent`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new: NodeId,
        reference: NodeId,
    ) -> DomResult<NodeId> {
        self.insert_node_before(parent, new, reference)
            .map_err(|_| DomError::BeforeNodeNotChild)?;
        Ok(new)
    }

    /// Replace `old` with `new` in `parent`'s child list
    ///
    /// # Errors
    ///
    /// `DomError::NodeNotChild` if `old` is not a child of `parent`.
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> DomResult<NodeId> {
        self.replace_node(parent, new, old)
            .map_err(|_| DomError::NodeNotChild)?;
        Ok(new)
    }

    /// Remove `child` from `parent`'s child list
    ///
    /// The removed node remains a valid, independently rooted fragment and
    /// can be re-inserted elsewhere.
    ///
    /// # Errors
    ///
    /// `DomError::NodeNotChild` if `child` is not a child of `parent`; the
    /// list is left unmodified.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.remove_node(parent, child)
            .map_err(|_| DomError::NodeNotChild)?;
        Ok(child)
    }

    /// Whether the node has any children
    pub fn has_child_nodes(&self, id: NodeId) -> bool {
        self.node(id).child_count > 0
    }

    /// Whether `id` is a direct child of `parent`
    ///
    /// Direct children only; grandchildren are not considered.
    pub fn contains(&self, parent: NodeId, id: NodeId) -> bool {
        self.node(id).parent == Some(parent)
    }

    /// Parent of `id` when that parent is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id).parent?;
        self.node(parent).is_element().then_some(parent)
    }

    /// Node kind
    pub fn node_kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    /// Node name (tag name, or `#text`/`#comment`/`#document`)
    pub fn node_name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    /// Stored value of a text or comment node; `None` for other kinds
    pub fn node_value(&self, id: NodeId) -> Option<&str> {
        self.node(id).node_value()
    }

    /// Set the stored value of a text or comment node
    ///
    /// Silent no-op for other kinds; use
    /// [`try_set_node_value`](Self::try_set_node_value) to surface the
    /// mismatch instead.
    pub fn set_node_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let NodeData::Text(t) | NodeData::Comment(t) = &mut self.node_mut(id).data {
            t.content = value.into();
        }
    }

    /// Set the stored value, failing on kind mismatch
    ///
    /// # Errors
    ///
    /// `DomError::InvalidNodeType` for element and document nodes.
    pub fn try_set_node_value(&mut self, id: NodeId, value: impl Into<String>) -> DomResult<()> {
        match &mut self.node_mut(id).data {
            NodeData::Text(t) | NodeData::Comment(t) => {
                t.content = value.into();
                Ok(())
            }
            _ => Err(DomError::InvalidNodeType),
        }
    }

    /// Concatenated text of the subtree, depth-first, left-to-right
    ///
    /// Comment values contribute nothing when aggregating an element's
    /// subtree, but calling this on a comment node directly returns its
    /// stored text. Document nodes have no text content.
    pub fn text_content(&self, id: NodeId) -> Option<String> {
        match &self.node(id).data {
            NodeData::Document => None,
            NodeData::Text(t) | NodeData::Comment(t) => Some(t.content.clone()),
            NodeData::Element(_) => {
                let mut buf = String::new();
                self.collect_text(id, &mut buf);
                Some(buf)
            }
        }
    }

    /// Like [`text_content`](Self::text_content), but a comment node has no
    /// inner text at all
    pub fn inner_text(&self, id: NodeId) -> Option<String> {
        match &self.node(id).data {
            NodeData::Document | NodeData::Comment(_) => None,
            NodeData::Text(t) => Some(t.content.clone()),
            NodeData::Element(_) => {
                let mut buf = String::new();
                self.collect_text(id, &mut buf);
                Some(buf)
            }
        }
    }

    fn collect_text(&self, id: NodeId, buf: &mut String) {
        for child in self.children(id) {
            match &self.node(child).data {
                NodeData::Text(t) => buf.push_str(&t.content),
                NodeData::Comment(_) => {}
                _ => self.collect_text(child, buf),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;

    #[test]
    fn test_remove_child_foreign_node_fails() {
        let mut tree = DomTree::new();
        let parent = tree.create_node(Node::element("div"));
        let other = tree.create_node(Node::element("div"));
        let child = tree.create_node(Node::element("span"));
        tree.append_child(other, child);

        assert_eq!(
            tree.remove_child(parent, child),
            Err(DomError::NodeNotChild)
        );
        assert_eq!(tree.parent(child), Some(other));
        assert_eq!(tree.child_count(other), 1);
    }

    #[test]
    fn test_insert_before_foreign_reference_fails() {
        let mut tree = DomTree::new();
        let parent = tree.create_node(Node::element("div"));
        let stray = tree.create_node(Node::element("span"));
        let new = tree.create_node(Node::element("span"));

        assert_eq!(
            tree.insert_before(parent, new, stray),
            Err(DomError::BeforeNodeNotChild)
        );
    }

    #[test]
    fn test_replace_child_foreign_node_fails() {
        let mut tree = DomTree::new();
        let parent = tree.create_node(Node::element("div"));
        let stray = tree.create_node(Node::element("span"));
        let new = tree.create_node(Node::element("span"));

        assert_eq!(
            tree.replace_child(parent, new, stray),
            Err(DomError::NodeNotChild)
        );
    }

    #[test]
    fn test_contains_direct_children_only() {
        let mut tree = DomTree::new();
        let parent = tree.create_node(Node::element("div"));
        let child = tree.create_node(Node::element("p"));
        let grandchild = tree.create_node(Node::text("deep"));
        tree.append_child(parent, child);
        tree.append_child(child, grandchild);

        assert!(tree.contains(parent, child));
        assert!(!tree.contains(parent, grandchild));
        assert!(!tree.contains(child, parent));
    }

    #[test]
    fn test_has_child_nodes() {
        let mut tree = DomTree::new();
        let parent = tree.create_node(Node::element("div"));
        assert!(!tree.has_child_nodes(parent));

        let child = tree.create_node(Node::text("x"));
        tree.append_child(parent, child);
        assert!(tree.has_child_nodes(parent));

        tree.remove_child(parent, child).unwrap();
        assert!(!tree.has_child_nodes(parent));
    }

    #[test]
    fn test_parent_element() {
        let mut tree = DomTree::new();
        let doc = tree.create_node(Node::document());
        let html = tree.create_node(Node::element("html"));
        let text = tree.create_node(Node::text("x"));
        tree.append_child(doc, html);
        tree.append_child(html, text);

        assert_eq!(tree.parent_element(text), Some(html));
        // Parent is the document node, not an element.
        assert_eq!(tree.parent_element(html), None);
        assert_eq!(tree.parent_element(doc), None);
    }

    #[test]
    fn test_text_content_skips_comment_values() {
        // <p>Hello <!--note--> World</p>
        let mut tree = DomTree::new();
        let p = tree.create_node(Node::element("p"));
        let hello = tree.create_node(Node::text("Hello "));
        let note = tree.create_node(Node::comment("note"));
        let world = tree.create_node(Node::text(" World"));
        tree.append_child(p, hello);
        tree.append_child(p, note);
        tree.append_child(p, world);

        assert_eq!(tree.text_content(p).as_deref(), Some("Hello  World"));
        assert_eq!(tree.inner_text(p).as_deref(), Some("Hello  World"));
    }

    #[test]
    fn test_comment_text_content_vs_inner_text() {
        let mut tree = DomTree::new();
        let note = tree.create_node(Node::comment("note"));

        assert_eq!(tree.text_content(note).as_deref(), Some("note"));
        assert_eq!(tree.inner_text(note), None);
    }

    #[test]
    fn test_text_content_recurses_depth_first() {
        // <div>a<span>b<em>c</em></span>d</div>
        let mut tree = DomTree::new();
        let div = tree.create_node(Node::element("div"));
        let a = tree.create_node(Node::text("a"));
        let span = tree.create_node(Node::element("span"));
        let b = tree.create_node(Node::text("b"));
        let em = tree.create_node(Node::element("em"));
        let c = tree.create_node(Node::text("c"));
        let d = tree.create_node(Node::text("d"));
        tree.append_child(div, a);
        tree.append_child(div, span);
        tree.append_child(span, b);
        tree.append_child(span, em);
        tree.append_child(em, c);
        tree.append_child(div, d);

        assert_eq!(tree.text_content(div).as_deref(), Some("abcd"));
    }

    #[test]
    fn test_text_content_of_document_is_none() {
        let mut tree = DomTree::new();
        let doc = tree.create_node(Node::document());
        assert_eq!(tree.text_content(doc), None);
        assert_eq!(tree.inner_text(doc), None);
    }

    #[test]
    fn test_set_node_value_policies() {
        let mut tree = DomTree::new();
        let text = tree.create_node(Node::text("old"));
        let div = tree.create_node(Node::element("div"));

        tree.set_node_value(text, "new");
        assert_eq!(tree.node_value(text), Some("new"));

        // No-op on an element, and the checked variant reports it.
        tree.set_node_value(div, "ignored");
        assert_eq!(tree.node_value(div), None);
        assert_eq!(
            tree.try_set_node_value(div, "ignored"),
            Err(DomError::InvalidNodeType)
        );
    }

    #[test]
    fn test_removed_fragment_reinsert() {
        let mut tree = DomTree::new();
        let a = tree.create_node(Node::element("div"));
        let b = tree.create_node(Node::element("div"));
        let frag = tree.create_node(Node::element("p"));
        let inner = tree.create_node(Node::text("kept"));
        tree.append_child(frag, inner);
        tree.append_child(a, frag);

        tree.remove_child(a, frag).unwrap();
        assert_eq!(tree.parent(frag), None);
        // Subtree survives detachment.
        assert_eq!(tree.text_content(frag).as_deref(), Some("kept"));

        tree.append_child(b, frag);
        assert_eq!(tree.parent(frag), Some(b));
        assert_eq!(tree.children(b).collect::<Vec<_>>(), vec![frag]);
    }
}

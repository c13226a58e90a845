//! Document - tree root and node factory
//!
//! The document owns the node arena and is the only way to create nodes.
//! Construction always yields the canonical `html > (head, body)` skeleton
//! with the three element ids cached for O(1) access.

use crate::{DomTree, HtmlCollection, Node, NodeId};

/// A document tree
pub struct Document {
    tree: DomTree,
    /// The `#document` root node
    root: NodeId,
    /// Cached reference to the `html` element
    html_element: NodeId,
    /// Cached reference to the `head` element
    head_element: NodeId,
    /// Cached reference to the `body` element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with the canonical skeleton in place
    pub fn new() -> Self {
        let mut tree = DomTree::new();

        let root = tree.create_node(Node::document());
        let html = tree.create_node(Node::element("html"));
        let head = tree.create_node(Node::element("head"));
        let body = tree.create_node(Node::element("body"));

        tree.append_child(root, html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        tracing::debug!(?root, ?html, "document created");
        Self {
            tree,
            root,
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// The `#document` root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `html` element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// The `head` element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// The `body` element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the node tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the node tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    // --- Factories ---
    //
    // Created nodes belong to this document's arena but start detached;
    // inserting them somewhere is the caller's job.

    /// Create a detached element node
    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.tree.create_node(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.tree.create_node(Node::text(text))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.tree.create_node(Node::comment(text))
    }

    // --- Queries (over the document element's subtree) ---

    /// First element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.get_element_by_id(self.html_element, id)
    }

    /// All elements whose class list contains `class`
    pub fn get_elements_by_class_name(&self, class: &str) -> HtmlCollection {
        self.tree
            .get_elements_by_class_name(self.html_element, class)
    }

    /// All elements whose `name` attribute equals `name`
    pub fn get_elements_by_name(&self, name: &str) -> HtmlCollection {
        self.tree.get_elements_by_name(self.html_element, name)
    }

    /// All elements with the given tag name (`"*"` for all)
    pub fn get_elements_by_tag_name(&self, tag: &str) -> HtmlCollection {
        self.tree.get_elements_by_tag_name(self.html_element, tag)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn test_document_bootstrap() {
        let doc = Document::new();
        let tree = doc.tree();

        assert_eq!(tree.node_kind(doc.root()), NodeKind::Document);
        assert_eq!(tree.node_name(doc.document_element()), "html");
        assert_eq!(tree.node_name(doc.head()), "head");
        assert_eq!(tree.node_name(doc.body()), "body");

        // Root has the html element as its sole child; html has exactly
        // [head, body] in that order.
        assert_eq!(
            tree.children(doc.root()).collect::<Vec<_>>(),
            vec![doc.document_element()]
        );
        assert_eq!(
            tree.children(doc.document_element()).collect::<Vec<_>>(),
            vec![doc.head(), doc.body()]
        );
    }

    #[test]
    fn test_factories_produce_detached_nodes() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let text = doc.create_text_node("hi");
        let comment = doc.create_comment("note");

        let tree = doc.tree();
        assert_eq!(tree.parent(div), None);
        assert_eq!(tree.node_kind(div), NodeKind::Element);
        assert_eq!(tree.node_kind(text), NodeKind::Text);
        assert_eq!(tree.node_kind(comment), NodeKind::Comment);
        assert_eq!(tree.node_value(text), Some("hi"));
        assert_eq!(tree.node_value(comment), Some("note"));
    }

    #[test]
    fn test_document_root_has_no_parent() {
        let doc = Document::new();
        assert_eq!(doc.tree().parent(doc.root()), None);
    }

    #[test]
    fn test_end_to_end_build_and_query() {
        let mut doc = Document::new();

        let div = doc.create_element("div");
        let body = doc.body();
        doc.tree_mut().set_attribute(div, "id", "x");
        doc.tree_mut().append_child(body, div);

        let text = doc.create_text_node("hi");
        doc.tree_mut().append_child(div, text);

        assert_eq!(doc.tree().child_count(doc.body()), 1);
        assert_eq!(doc.tree().text_content(div).as_deref(), Some("hi"));
        assert_eq!(doc.get_element_by_id("x"), Some(div));
    }

    #[test]
    fn test_document_queries_delegate_to_subtree() {
        let mut doc = Document::new();
        let body = doc.body();
        let form = doc.create_element("form");
        let input = doc.create_element("input");
        doc.tree_mut().append_child(body, form);
        doc.tree_mut().append_child(form, input);
        doc.tree_mut().set_attribute(input, "name", "q");
        doc.tree_mut().set_attribute(input, "class", "field");

        assert_eq!(doc.get_elements_by_tag_name("input").item(0), Some(input));
        assert_eq!(doc.get_elements_by_name("q").item(0), Some(input));
        assert_eq!(doc.get_elements_by_class_name("field").item(0), Some(input));
        // head and body are reachable through the document element.
        assert_eq!(doc.get_elements_by_tag_name("head").item(0), Some(doc.head()));
    }

    #[test]
    fn test_move_node_between_parents() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let body = doc.body();
        let head = doc.head();
        doc.tree_mut().append_child(body, div);

        doc.tree_mut().append_child(head, div);

        assert_eq!(doc.tree().child_count(body), 0);
        assert_eq!(doc.tree().parent(div), Some(head));
    }
}

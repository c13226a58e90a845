//! DOM tree (arena-based allocation)
//!
//! All nodes live in a contiguous `Vec<Node>` and are addressed by `NodeId`,
//! so navigation links are indices rather than pointers and dropping the
//! tree frees every node at once. This module is the only place where the
//! doubly-linked child-list surgery happens: append, insert-before, remove
//! and replace all relink siblings here and nowhere else.

use crate::operations::{DomError, DomResult};
use crate::{Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a node in the arena and return its id
    ///
    /// The node starts detached; insertion is a separate step.
    pub fn create_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by id
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes allocated in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // Ids are only handed out by `create_node`, so indexing with one is
    // always in bounds.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    // --- Navigation ---

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    /// Last child of a node
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    /// Next sibling of a node
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Previous sibling of a node
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    /// Number of children of a node
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).child_count
    }

    /// Iterator over the children of a node, in sibling order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// Iterator over all descendants of a node, pre-order, excluding the
    /// node itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root: id,
            next: self.node(id).first_child,
        }
    }

    /// Child at the given position, walking from the head
    ///
    /// O(n); returns `None` when `index` is outside `[0, child_count)`.
    pub fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.children(parent).nth(index)
    }

    /// Position of a node within a parent's child list
    ///
    /// O(n); returns `None` if the node is not a child of `parent`.
    pub fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).position(|id| id == child)
    }

    // --- Child-list surgery ---

    /// Move `child` to the end of `parent`'s child list
    ///
    /// The child is detached from its current list first, so appending a
    /// node that already sits in another list (or elsewhere in this one)
    /// re-parents it rather than corrupting the old list.
    pub fn append_node(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        tracing::trace!(?parent, ?child, "append node");

        self.node_mut(child).parent = Some(parent);
        if let Some(last) = self.node(parent).last_child {
            self.node_mut(last).next_sibling = Some(child);
            self.node_mut(child).prev_sibling = Some(last);
        } else {
            self.node_mut(parent).first_child = Some(child);
        }
        self.node_mut(parent).last_child = Some(child);
        self.node_mut(parent).child_count += 1;
    }

    /// Splice `new` immediately before `reference` in `parent`'s child list
    ///
    /// # Errors
    ///
    /// `DomError::NotAChild` if `reference` is not a child of `parent`; the
    /// list is left untouched.
    pub fn insert_node_before(
        &mut self,
        parent: NodeId,
        new: NodeId,
        reference: NodeId,
    ) -> DomResult<()> {
        if self.node(reference).parent != Some(parent) {
            return Err(DomError::NotAChild);
        }
        // Inserting a node before itself leaves the list as it is.
        if new == reference {
            return Ok(());
        }
        self.detach(new);
        tracing::trace!(?parent, ?new, ?reference, "insert node before");

        self.node_mut(new).parent = Some(parent);
        match self.node(reference).prev_sibling {
            Some(prev) => {
                self.node_mut(prev).next_sibling = Some(new);
                self.node_mut(new).prev_sibling = Some(prev);
            }
            None => self.node_mut(parent).first_child = Some(new),
        }
        self.node_mut(new).next_sibling = Some(reference);
        self.node_mut(reference).prev_sibling = Some(new);
        self.node_mut(parent).child_count += 1;
        Ok(())
    }

    /// Unlink `child` from `parent`'s child list
    ///
    /// The removed node keeps its own subtree and can be re-inserted
    /// anywhere as an independently rooted fragment.
    ///
    /// # Errors
    ///
    /// `DomError::NotAChild` if `child` is not a child of `parent`; the
    /// list is left untouched.
    pub fn remove_node(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.node(child).parent != Some(parent) {
            return Err(DomError::NotAChild);
        }
        tracing::trace!(?parent, ?child, "remove node");
        self.detach(child);
        Ok(())
    }

    /// Splice `new` into `old`'s position in `parent`'s child list
    ///
    /// `old` comes out fully detached (parent and sibling links cleared).
    ///
    /// # Errors
    ///
    /// `DomError::NotAChild` if `old` is not a child of `parent`; the list
    /// is left untouched.
    pub fn replace_node(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> DomResult<()> {
        if self.node(old).parent != Some(parent) {
            return Err(DomError::NotAChild);
        }
        if new == old {
            return Ok(());
        }
        self.detach(new);
        tracing::trace!(?parent, ?new, ?old, "replace node");

        let prev = self.node(old).prev_sibling;
        let next = self.node(old).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = Some(new),
            None => self.node_mut(parent).first_child = Some(new),
        }
        match next {
            Some(n) => self.node_mut(n).prev_sibling = Some(new),
            None => self.node_mut(parent).last_child = Some(new),
        }

        {
            let node = self.node_mut(new);
            node.parent = Some(parent);
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        {
            let node = self.node_mut(old);
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
        Ok(())
    }

    /// Detach a node from its parent, repairing the surrounding links
    ///
    /// No-op for nodes that are already detached. The node stays allocated
    /// in the arena.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };

        let prev = self.node(id).prev_sibling;
        let next = self.node(id).next_sibling;

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => self.node_mut(parent).first_child = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => self.node_mut(parent).last_child = prev,
        }

        self.node_mut(parent).child_count -= 1;

        let node = self.node_mut(id);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }
}

// --- Iterators ---

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).next_sibling;
        Some(current)
    }
}

/// Pre-order iterator over the descendants of a node
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: Option<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if let Some(child) = self.tree.node(current).first_child {
            Some(child)
        } else {
            // Climb until a next sibling exists, stopping at the subtree root.
            let mut at = current;
            loop {
                if at == self.root {
                    break None;
                }
                if let Some(sibling) = self.tree.node(at).next_sibling {
                    break Some(sibling);
                }
                match self.tree.node(at).parent {
                    Some(parent) => at = parent,
                    None => break None,
                }
            }
        };
        Some(current)
    }
}

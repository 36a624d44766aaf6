use std::fmt;

use crate::tree::Node;

/// A read-only view of a node inside a [`BalancedTree`].
///
/// Borrowing the tree for the lifetime of the view keeps it from being
/// mutated, so the structure observed is always a completed one.
///
/// [`BalancedTree`]: struct.BalancedTree.html
pub struct NodeRef<'a, K> {
    node: &'a Node<K>,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(node: &'a Node<K>) -> Self {
        Self { node }
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Returns the root of the left subtree.
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.node.left.as_deref().map(NodeRef::new)
    }

    /// Returns the root of the right subtree.
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.node.right.as_deref().map(NodeRef::new)
    }

    /// Returns the cached height of the subtree rooted here; a leaf has height 1.
    pub fn height(&self) -> usize {
        self.node.height
    }

    /// Returns left subtree height minus right subtree height.
    /// Positive means left-heavy, negative means right-heavy.
    pub fn balance_factor(&self) -> isize {
        self.node.balance()
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.node.key)
            .field("height", &self.node.height)
            .finish()
    }
}

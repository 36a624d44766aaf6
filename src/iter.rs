use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// An in-order iterator over the keys of a tree.
///
/// This `struct` is created by the [`iter`] method on [`BalancedTree`].
///
/// [`BalancedTree`]: struct.BalancedTree.html
/// [`iter`]: struct.BalancedTree.html#method.iter
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

/// An owning in-order iterator over the keys of a tree.
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: &'a Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(Node::height(root)),
            remaining: len,
        };
        iter.push_left_edge(root.as_deref());
        iter
    }

    // Descends along left children, remembering every node passed.
    fn push_left_edge(&mut self, mut current: Option<&'a Node<K>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_edge(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(Node::height(&root)),
            remaining: len,
        };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { key, right, .. } = *node;
        self.push_left_edge(right);
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

use std::cmp::{self, Ordering};
use std::fmt;

use log::{debug, trace};

use crate::iter::{IntoIter, Iter};
use crate::node_ref::NodeRef;

/// An ordered set of keys stored in a height-balanced (AVL) binary search tree.
///
/// Every insertion restores the AVL condition: for each node the heights of the
/// left and right subtrees differ by at most one.
///
/// ```
/// use balanced_tree::BalancedTree;
/// let mut tree = BalancedTree::new();
/// tree.insert(3);
/// tree.insert(2);
/// tree.insert(1);
/// assert_eq!(tree.root().map(|root| *root.key()), Some(2));
/// assert_eq!(tree.height(), 2);
/// assert!(tree.is_balanced());
/// ```
#[derive(Clone)]
pub struct BalancedTree<K> {
    root: Link<K>,
    num_nodes: usize,
}

pub(crate) type Link<K> = Option<Box<Node<K>>>;

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: usize,
}

#[derive(Debug, Clone, Copy)]
enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl<K: Ord> BalancedTree<K> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single leaf.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Returns the balance factor of the root node, 0 when empty.
    pub fn balance_factor(&self) -> isize {
        Node::balance_factor(&self.root)
    }

    /// Returns true if every node satisfies the AVL condition.
    pub fn is_balanced(&self) -> bool {
        Node::is_balanced(&self.root)
    }

    /// Returns a read-only view of the root node.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.as_deref().map(NodeRef::new)
    }

    /// Clears the tree, deallocating all nodes.
    pub fn clear(&mut self) {
        debug!("Clearing tree with {} nodes", self.num_nodes);
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns a reference to the stored key that compares equal to the given key.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|node| &node.key)
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a key into the tree and rebalances it.
    /// Returns false, leaving the tree unchanged, if an equal key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        let num_nodes = self.num_nodes;
        let root = self.root.take();
        self.root = Some(Node::insert(root, key, &mut self.num_nodes));
        self.num_nodes > num_nodes
    }

    /// Returns an in-order iterator over the keys of the tree.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root, self.num_nodes)
    }

    /// Checks ordering, cached heights, balance and node count of the whole tree.
    /// Panics on the first violation found.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        Self::check_subtree(&self.root, None, None, &mut num_nodes);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(self.is_empty(), self.num_nodes == 0);
    }

    // Returns the recomputed height of the subtree.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree<'a>(
        link: &'a Link<K>,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
        num_nodes: &mut usize,
    ) -> usize {
        let node = match link {
            None => return 0,
            Some(node) => node,
        };

        // Check search order against all ancestors
        if let Some(lower) = lower {
            assert!(node.key > *lower);
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper);
        }

        let left_height = Self::check_subtree(&node.left, lower, Some(&node.key), num_nodes);
        let right_height = Self::check_subtree(&node.right, Some(&node.key), upper, num_nodes);

        // Check height
        assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

        // Check AVL condition (nearly balance)
        assert!(left_height <= right_height + 1);
        assert!(right_height <= left_height + 1);

        *num_nodes += 1;
        node.height
    }

    fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

impl<K> Node<K> {
    fn create(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Cached height of the node behind the link, 0 for an empty link.
    pub(crate) fn height(link: &Link<K>) -> usize {
        link.as_ref().map_or(0, |node| node.height)
    }

    /// Balance factor of the node behind the link, 0 for an empty link.
    pub(crate) fn balance_factor(link: &Link<K>) -> isize {
        link.as_ref().map_or(0, |node| node.balance())
    }

    /// Left subtree height minus right subtree height.
    pub(crate) fn balance(&self) -> isize {
        Self::height(&self.left) as isize - Self::height(&self.right) as isize
    }

    fn is_balanced(link: &Link<K>) -> bool {
        match link {
            None => true,
            Some(node) => {
                node.balance().abs() <= 1
                    && Self::is_balanced(&node.left)
                    && Self::is_balanced(&node.right)
            }
        }
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(Self::height(&self.left), Self::height(&self.right));
    }

    //     y          x
    //    / \        / \
    //   x   c  ->  a   y
    //  / \            / \
    // a   b          b   c
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        match node.left.take() {
            None => node,
            Some(mut left) => {
                node.left = left.right.take();
                node.adjust_height();
                left.right = Some(node);
                left.adjust_height();
                left
            }
        }
    }

    //   y              x
    //  / \            / \
    // a   x    ->    y   c
    //    / \        / \
    //   b   c      a   b
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        match node.right.take() {
            None => node,
            Some(mut right) => {
                node.right = right.left.take();
                node.adjust_height();
                right.left = Some(node);
                right.adjust_height();
                right
            }
        }
    }

    /// Restores the AVL condition at the given node, whose height must be up to date.
    /// Initial balance must not exceed +2 or -2, which always holds after a single insert.
    /// Returns the new root of the subtree.
    fn rebalance(mut node: Box<Self>) -> Box<Self> {
        let balance = node.balance();
        debug_assert!((-2..=2).contains(&balance));

        let imbalance = if balance > 1 {
            if Self::balance_factor(&node.left) >= 0 {
                Imbalance::LeftLeft
            } else {
                Imbalance::LeftRight
            }
        } else if balance < -1 {
            if Self::balance_factor(&node.right) <= 0 {
                Imbalance::RightRight
            } else {
                Imbalance::RightLeft
            }
        } else {
            return node;
        };

        trace!("Rebalancing {imbalance:?} at subtree of height {}", node.height);
        match imbalance {
            Imbalance::LeftLeft => Self::rotate_right(node),
            Imbalance::LeftRight => {
                node.left = node.left.take().map(Self::rotate_left);
                Self::rotate_right(node)
            }
            Imbalance::RightRight => Self::rotate_left(node),
            Imbalance::RightLeft => {
                node.right = node.right.take().map(Self::rotate_right);
                Self::rotate_left(node)
            }
        }
    }
}

impl<K: Ord> Node<K> {
    // Inserts below the given link and returns the rebalanced subtree root.
    // A new leaf is the only place where the node count grows.
    fn insert(link: Link<K>, key: K, num_nodes: &mut usize) -> Box<Self> {
        let mut node = match link {
            None => {
                *num_nodes += 1;
                return Self::create(key);
            }
            Some(node) => node,
        };

        match key.cmp(&node.key) {
            Ordering::Greater => node.right = Some(Self::insert(node.right.take(), key, num_nodes)),
            Ordering::Less => node.left = Some(Self::insert(node.left.take(), key, num_nodes)),
            Ordering::Equal => {}
        }

        node.adjust_height();
        Self::rebalance(node)
    }
}

impl<K: Ord> Default for BalancedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for BalancedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord> FromIterator<K> for BalancedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BalancedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord> IntoIterator for &'a BalancedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> IntoIterator for BalancedTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.num_nodes)
    }
}

//! An ordered set implemented with a height-balanced (AVL) binary search tree.
//!
//! Keys are kept unique and in order. After each insertion the tree unwinds the
//! insertion path, refreshing cached subtree heights and applying at most one
//! single or double rotation, so that sibling subtrees never differ in height by
//! more than one.
//!
//! ```
//! use balanced_tree::BalancedTree;
//!
//! let mut tree: BalancedTree<i32> = (1..=7).collect();
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 3);
//! assert!(!tree.insert(4));
//! assert!(tree.is_balanced());
//! assert!(tree.iter().copied().eq(1..=7));
//! ```
//!
//! Structure can be inspected through [`BalancedTree::root`], which hands out
//! read-only [`NodeRef`] views.

mod iter;
mod node_ref;
mod tree;

pub use iter::{IntoIter, Iter};
pub use node_ref::NodeRef;
pub use tree::BalancedTree;

//! Binary search tree module for Concord.
//!
//! This module provides the ordered-container ADT that backs the word
//! concordance: an unbalanced binary search tree with duplicate-rejecting
//! insertion, min/max removal, and materialized traversal iterators in the
//! three standard visiting orders.
//!
//! The tree never rebalances; its shape is purely a function of insertion
//! order. Already-sorted input therefore degenerates into a linear chain,
//! an accepted limitation of the design, not a bug.

pub mod bst;
pub mod node;
pub mod traversal;

// Re-export commonly used types
pub use bst::BinarySearchTree;
pub use node::TreeNode;
pub use traversal::{TraversalOrder, TreeIterator};

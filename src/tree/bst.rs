//! Unbalanced binary search tree implementation.
//!
//! This module provides [`BinarySearchTree`], the ordered-container ADT at
//! the heart of Concord. The tree stores each distinct key exactly once:
//! inserting an equal key is rejected and it is the caller's job to merge
//! data into the element already present (see
//! [`search_mut`](BinarySearchTree::search_mut)).
//!
//! # Examples
//!
//! ```
//! use concord::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! assert!(tree.insert("dog"));
//! assert!(tree.insert("cat"));
//! assert!(tree.insert("bird"));
//! assert!(!tree.insert("cat")); // duplicate rejected
//!
//! assert_eq!(tree.len(), 3);
//! let sorted: Vec<_> = tree.inorder_iter().collect();
//! assert_eq!(sorted, vec!["bird", "cat", "dog"]);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{ConcordError, Result};
use crate::tree::node::TreeNode;
use crate::tree::traversal::{TraversalOrder, TreeIterator};

/// An unbalanced binary search tree over totally ordered elements.
///
/// Invariants:
///
/// - `len` equals the number of nodes reachable from `root`, and
///   `len == 0` exactly when `root` is absent.
/// - For every node, the left subtree holds strictly smaller elements and
///   the right subtree strictly greater ones; no duplicates coexist.
///
/// The tree never rebalances, is not thread-safe, and makes no attempt to
/// defend against sorted insertion order producing a linear chain. Callers
/// needing concurrent access must wrap the whole tree in one exclusive lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinarySearchTree<E> {
    root: Option<Box<TreeNode<E>>>,
    len: usize,
}

impl<E> Default for BinarySearchTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BinarySearchTree<E> {
    /// Create an empty tree.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// The number of elements stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node and reset the length to zero.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The height of the tree in node-count terms: 0 for the empty tree,
    /// otherwise `1 + max(left_height, right_height)`.
    pub fn height(&self) -> usize {
        Self::node_height(self.root.as_deref())
    }

    fn node_height(node: Option<&TreeNode<E>>) -> usize {
        match node {
            None => 0,
            Some(node) => {
                1 + Self::node_height(node.left.as_deref())
                    .max(Self::node_height(node.right.as_deref()))
            }
        }
    }

    /// The root node of the tree.
    ///
    /// Fails with [`ConcordError::EmptyTree`] when the tree is empty;
    /// callers that only need presence should use
    /// [`is_empty`](Self::is_empty) instead.
    pub fn root(&self) -> Result<&TreeNode<E>> {
        self.root.as_deref().ok_or(ConcordError::EmptyTree)
    }
}

impl<E: Ord> BinarySearchTree<E> {
    /// Insert `entry` at its ordered position.
    ///
    /// Returns `true` and increments the length when a new leaf was
    /// attached. Returns `false` without mutating the tree when an equal
    /// element is already present; merging data into the existing element
    /// is the caller's responsibility, not the tree's.
    pub fn insert(&mut self, entry: E) -> bool {
        let mut current = &mut self.root;
        while let Some(node) = current {
            match entry.cmp(&node.element) {
                Ordering::Less => current = &mut node.left,
                Ordering::Greater => current = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *current = Some(Box::new(TreeNode::new(entry)));
        self.len += 1;
        true
    }

    /// Find the node holding an element equal to `entry`.
    pub fn search(&self, entry: &E) -> Option<&TreeNode<E>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match entry.cmp(&node.element) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Find the element equal to `entry` and return mutable access to it.
    ///
    /// This is the merge hook used when an insert is rejected as a
    /// duplicate. Callers must not alter the part of the element that
    /// defines its ordering, or the search invariant is silently broken.
    pub fn search_mut(&mut self, entry: &E) -> Option<&mut E> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match entry.cmp(&node.element) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.element),
            }
        }
        None
    }

    /// Whether an element equal to `entry` is present.
    pub fn contains(&self, entry: &E) -> bool {
        self.search(entry).is_some()
    }

    /// Remove and return the smallest element, or `None` on an empty tree.
    ///
    /// The minimum has no left child by construction, so its right child
    /// (if any) is spliced into the parent's link.
    pub fn remove_min(&mut self) -> Option<E> {
        let root = self.root.take()?;
        let (rest, min) = Self::detach_min(root);
        self.root = rest;
        self.len -= 1;
        Some(min)
    }

    fn detach_min(mut node: Box<TreeNode<E>>) -> (Option<Box<TreeNode<E>>>, E) {
        match node.left.take() {
            Some(left) => {
                let (rest, min) = Self::detach_min(left);
                node.left = rest;
                (Some(node), min)
            }
            None => {
                let TreeNode { element, right, .. } = *node;
                (right, element)
            }
        }
    }

    /// Remove and return the largest element, or `None` on an empty tree.
    ///
    /// Mirror image of [`remove_min`](Self::remove_min): the maximum has no
    /// right child, so its left child (if any) takes its place.
    pub fn remove_max(&mut self) -> Option<E> {
        let root = self.root.take()?;
        let (rest, max) = Self::detach_max(root);
        self.root = rest;
        self.len -= 1;
        Some(max)
    }

    fn detach_max(mut node: Box<TreeNode<E>>) -> (Option<Box<TreeNode<E>>>, E) {
        match node.right.take() {
            Some(right) => {
                let (rest, max) = Self::detach_max(right);
                node.right = rest;
                (Some(node), max)
            }
            None => {
                let TreeNode { element, left, .. } = *node;
                (left, element)
            }
        }
    }
}

impl<E: Clone> BinarySearchTree<E> {
    /// An in-order iterator: left subtree, node, right subtree. Yields
    /// elements in ascending key order, the canonical alphabetical output
    /// order of the concordance.
    pub fn inorder_iter(&self) -> TreeIterator<E> {
        TreeIterator::new(self.root.as_deref(), TraversalOrder::Inorder)
    }

    /// A pre-order iterator: node, left subtree, right subtree.
    pub fn preorder_iter(&self) -> TreeIterator<E> {
        TreeIterator::new(self.root.as_deref(), TraversalOrder::Preorder)
    }

    /// A post-order iterator: left subtree, right subtree, node.
    pub fn postorder_iter(&self) -> TreeIterator<E> {
        TreeIterator::new(self.root.as_deref(), TraversalOrder::Postorder)
    }
}

//! This crate exposes an unbalanced Binary Search Tree (BST) over ordered keys
//! mostly for educational purposes: inserting, searching, walking the tree in
//! several orders and diagnosing its shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert
//! and find stored keys. BSTs are typically defined recursively using the
//! notion of a `Node`. A `Node` stores the key that was inserted and will
//! sometimes have child `Node`s. The most important invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than _or equal to_ its own key.
//!
//! > Duplicate keys are kept as distinct `Node`s and always go to the right.
//!
//! Searching takes `O(height)` where `height` is the number of `Node`s on the
//! longest path from the root `Node` to a leaf `Node`. This tree never
//! rebalances itself so inserting keys in sorted order produces a tree whose
//! height equals its size. Rather than correcting that, the tree can
//! _diagnose_ it: see [`OrderedTree::height`], [`OrderedTree::diameter`],
//! [`OrderedTree::is_bst`] and [`OrderedTree::is_balanced`].
//!
//! None of the walks recurse, so arbitrarily deep trees can be traversed,
//! measured, cloned and dropped without overflowing the stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for key in [5, 3, 8, 3] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert!(tree.find(&8));
//! assert_eq!(tree.count(&3), 2);
//!
//! let mut sorted = Vec::new();
//! tree.for_each(Order::SortOrder, |key| sorted.push(*key));
//! assert_eq!(sorted, [3, 3, 5, 8]);
//!
//! assert_eq!(tree.height(), 3);
//! assert!(tree.is_bst());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod diagnostics;
pub mod traversal;
pub mod tree;

pub use diagnostics::TreeStats;
pub use traversal::{LevelOrder, Order, Traverse};
pub use tree::OrderedTree;

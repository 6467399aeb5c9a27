//! Read-only measurements of an [`OrderedTree`]'s shape. The tree never rebalances itself, so these
//! are how callers find out what a given insertion order did to it.
//!
//! Every diagnostic is a single `O(N)` bottom-up pass driven by an explicit stack, so they work on
//! trees of any depth.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! // Sorted insertion order degrades the tree into a list.
//! let list: OrderedTree<_> = (0..5).collect();
//! assert_eq!(list.height(), 5);
//! assert!(!list.is_balanced());
//!
//! // Inserting the middle key first keeps it balanced.
//! let balanced: OrderedTree<_> = [2, 1, 3, 0, 4].into_iter().collect();
//! assert_eq!(balanced.height(), 3);
//! assert!(balanced.is_balanced());
//! assert_eq!(balanced.diameter(), 4);
//! ```

use std::ops::ControlFlow;

use crate::traversal;
use crate::tree::{Node, OrderedTree};

/// A snapshot of several diagnostics of one tree, gathered in a single pass by
/// [`OrderedTree::stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys (duplicates included).
    pub size: usize,
    /// Number of nodes without children.
    pub leaves: usize,
    /// See [`OrderedTree::height`].
    pub height: usize,
    /// See [`OrderedTree::diameter`].
    pub diameter: usize,
    /// See [`OrderedTree::is_balanced`].
    pub balanced: bool,
}

impl TreeStats {
    /// Number of nodes with at least one child.
    pub fn inner_nodes(&self) -> usize {
        self.size - self.leaves
    }

    /// How full the tree is compared to a perfect tree of the same height, in `[0, 1]`. An empty
    /// tree counts as perfectly packed.
    pub fn fill_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        let levels = i32::try_from(self.height).unwrap_or(i32::MAX);
        self.size as f64 / (2f64.powi(levels) - 1.0)
    }
}

impl<K> OrderedTree<K> {
    /// Returns the number of nodes on the longest path from the root down to a leaf. An empty tree
    /// has a height of 0 and a tree with only a root has a height of 1.
    ///
    /// The deepest level reported by [`OrderedTree::for_each_level_order`] is always
    /// `height() - 1`.
    pub fn height(&self) -> usize {
        traversal::fold_post_order(&self.root, || 0, |_, left: usize, right: usize| {
            1 + left.max(right)
        })
    }

    /// Returns the length, in edges, of the longest path between any two nodes. The path doesn't
    /// have to go through the root. Empty and single-node trees have a diameter of 0.
    ///
    /// The longest path bending at a node joins its deepest left leaf to its deepest right leaf,
    /// so it is `height(left) + height(right)` edges long. One pass computes every subtree's
    /// height while keeping the longest such path seen so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// //       5
    /// //      /
    /// //     3
    /// //    / \
    /// //   1   4
    /// //  /     \
    /// // 0       4
    /// let tree: OrderedTree<_> = [5, 3, 1, 4, 0, 4].into_iter().collect();
    ///
    /// // 0 -> 1 -> 3 -> 4 -> 4 doesn't touch the root.
    /// assert_eq!(tree.diameter(), 4);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn diameter(&self) -> usize {
        let mut longest = 0;
        traversal::fold_post_order(&self.root, || 0, |_, left: usize, right: usize| {
            longest = longest.max(left + right);
            1 + left.max(right)
        });
        longest
    }

    /// Checks that every key sits where [`OrderedTree::insert`] would have put it: keys in a
    /// node's left subtree are less than its key and keys in its right subtree are greater than or
    /// equal to it. An empty tree is a valid BST.
    ///
    /// Each subtree is checked against the half-open range `[lower, upper)` its ancestors allow.
    /// Going left caps the range at the node's key and going right starts it there, since equal
    /// keys go right.
    pub fn is_bst(&self) -> bool
    where
        K: Ord,
    {
        type Bounded<'a, K> = (&'a Node<K>, Option<&'a K>, Option<&'a K>);

        let mut pending: Vec<Bounded<'_, K>> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        while let Some((node, lower, upper)) = pending.pop() {
            let key = &node.key;
            if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key >= upper) {
                log::debug!("OrderedTree::is_bst found a key outside its subtree's range");
                return false;
            }

            pending.extend(node.left.as_deref().map(|left| (left, lower, Some(key))));
            pending.extend(node.right.as_deref().map(|right| (right, Some(key), upper)));
        }
        true
    }

    /// Returns `true` if, at every node, the heights of the left and right subtrees differ by at
    /// most one. Stops at the first node that isn't.
    pub fn is_balanced(&self) -> bool {
        traversal::try_fold_post_order(&self.root, || 0, |_, left: usize, right: usize| {
            if left.abs_diff(right) > 1 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(1 + left.max(right))
            }
        })
        .is_continue()
    }

    /// Gathers the size, leaf count, height, diameter and balance of the tree in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// let stats = tree.stats();
    ///
    /// assert_eq!(stats.size, 3);
    /// assert_eq!(stats.leaves, 2);
    /// assert_eq!(stats.height, tree.height());
    /// assert_eq!(stats.diameter, tree.diameter());
    /// assert!(stats.balanced);
    /// assert_eq!(stats.fill_ratio(), 1.0);
    /// ```
    pub fn stats(&self) -> TreeStats {
        let mut leaves = 0;
        let mut diameter = 0;
        let mut balanced = true;
        let height = traversal::fold_post_order(&self.root, || 0, |_, left: usize, right: usize| {
            if left == 0 && right == 0 {
                leaves += 1;
            }
            diameter = diameter.max(left + right);
            balanced &= left.abs_diff(right) <= 1;
            1 + left.max(right)
        });

        let stats = TreeStats {
            size: self.size,
            leaves,
            height,
            diameter,
            balanced,
        };
        log::debug!("OrderedTree::stats {:?}", stats);
        stats
    }
}

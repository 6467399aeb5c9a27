//! Walking an [`OrderedTree`]. Depth-first walks are parameterized by an [`Order`] chosen once per
//! walk and share a single explicit-stack engine ([`Traverse`]). Breadth-first walks go through
//! [`LevelOrder`] which also reports how far each key is from the root.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! //     2
//! //    / \
//! //   1   3
//! let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut pre = Vec::new();
//! tree.for_each(Order::PreOrder, |key| pre.push(*key));
//! assert_eq!(pre, [2, 1, 3]);
//!
//! let post: Vec<_> = tree.traverse(Order::PostOrder).copied().collect();
//! assert_eq!(post, [1, 3, 2]);
//!
//! let mut levels = Vec::new();
//! tree.for_each_level_order(|key, level| levels.push((*key, level)));
//! assert_eq!(levels, [(2, 0), (1, 1), (3, 1)]);
//! ```

use std::collections::VecDeque;
use std::convert::Infallible;
use std::iter::FusedIterator;
use std::ops::ControlFlow;

use crate::tree::{Link, Node, OrderedTree};

/// The order in which a depth-first walk visits a node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. Keys come out in non-decreasing
    /// order.
    SortOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

enum Step<'a, K> {
    /// Still has to be split into its key and children.
    Expand(&'a Node<K>),
    Visit(&'a K),
}

/// A depth-first iterator over the keys of an [`OrderedTree`]. Created by
/// [`OrderedTree::traverse`] and [`OrderedTree::iter`].
pub struct Traverse<'a, K> {
    order: Order,
    pending: Vec<Step<'a, K>>,
    remaining: usize,
}

impl<'a, K> Traverse<'a, K> {
    fn new(tree: &'a OrderedTree<K>, order: Order) -> Self {
        Self {
            order,
            pending: tree.root.as_deref().map(Step::Expand).into_iter().collect(),
            remaining: tree.size,
        }
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.pending.pop() {
            let node = match step {
                Step::Visit(key) => {
                    self.remaining -= 1;
                    return Some(key);
                }
                Step::Expand(node) => node,
            };

            // Everything is pushed in reverse so it pops off in visiting order.
            let left = node.left.as_deref().map(Step::Expand);
            let right = node.right.as_deref().map(Step::Expand);
            match self.order {
                Order::PreOrder => {
                    self.pending.extend(right);
                    self.pending.extend(left);
                    self.remaining -= 1;
                    return Some(&node.key);
                }
                Order::SortOrder => {
                    self.pending.extend(right);
                    self.pending.push(Step::Visit(&node.key));
                    self.pending.extend(left);
                }
                Order::PostOrder => {
                    self.pending.push(Step::Visit(&node.key));
                    self.pending.extend(right);
                    self.pending.extend(left);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Traverse<'_, K> {}
impl<K> FusedIterator for Traverse<'_, K> {}

/// A breadth-first iterator over the keys of an [`OrderedTree`] paired with their level (the
/// root is at level 0). Created by [`OrderedTree::level_order`].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<(&'a Node<K>, usize)>,
    remaining: usize,
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = (&'a K, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, level) = self.queue.pop_front()?;
        self.queue
            .extend(node.left.as_deref().map(|left| (left, level + 1)));
        self.queue
            .extend(node.right.as_deref().map(|right| (right, level + 1)));
        self.remaining -= 1;
        Some((&node.key, level))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for LevelOrder<'_, K> {}
impl<K> FusedIterator for LevelOrder<'_, K> {}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> OrderedTree<K> {
    /// Returns an iterator over the keys in the given depth-first `order`.
    pub fn traverse(&self, order: Order) -> Traverse<'_, K> {
        Traverse::new(self, order)
    }

    /// Returns an iterator over the keys in sorted (non-decreasing) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Traverse<'_, K> {
        self.traverse(Order::SortOrder)
    }

    /// Returns a breadth-first iterator over the keys and their levels. Within a level keys come
    /// out left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder {
            queue: self.root.as_deref().map(|root| (root, 0)).into_iter().collect(),
            remaining: self.size,
        }
    }

    /// Calls `visitor` with every key in the given depth-first `order`.
    ///
    /// The walk always runs to completion and the tree can't be modified during it.
    pub fn for_each(&self, order: Order, visitor: impl FnMut(&K)) {
        self.traverse(order).for_each(visitor);
    }

    /// Calls `visitor` with every key and its level, breadth first. The root is at level 0 and
    /// every child is one level below its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// let mut deepest = 0;
    /// tree.for_each_level_order(|_, level| deepest = deepest.max(level));
    ///
    /// assert_eq!(deepest, 2);
    /// assert_eq!(deepest, tree.height() - 1);
    /// ```
    pub fn for_each_level_order(&self, mut visitor: impl FnMut(&K, usize)) {
        for (key, level) in self.level_order() {
            visitor(key, level);
        }
    }
}

/// Folds a subtree bottom-up without recursing. Absent subtrees fold to `empty()` and every node
/// combines its left and right results (in that order) into its own. `combine` can stop the walk
/// early by breaking.
pub(crate) fn try_fold_post_order<'a, K, T, B>(
    root: &'a Link<K>,
    mut empty: impl FnMut() -> T,
    mut combine: impl FnMut(&'a Node<K>, T, T) -> ControlFlow<B, T>,
) -> ControlFlow<B, T> {
    enum Frame<'a, K> {
        Enter(&'a Link<K>),
        Exit(&'a Node<K>),
    }

    let mut pending = vec![Frame::Enter(root)];
    let mut folded = Vec::new();
    while let Some(frame) = pending.pop() {
        match frame {
            Frame::Enter(link) => match link.as_deref() {
                None => folded.push(empty()),
                Some(node) => {
                    pending.push(Frame::Exit(node));
                    pending.push(Frame::Enter(&node.right));
                    pending.push(Frame::Enter(&node.left));
                }
            },
            Frame::Exit(node) => {
                let right = folded.pop().expect("right subtree folds before its parent");
                let left = folded.pop().expect("left subtree folds before its parent");
                folded.push(combine(node, left, right)?);
            }
        }
    }

    ControlFlow::Continue(folded.pop().expect("the root folds last"))
}

/// [`try_fold_post_order`] for folds that never stop early.
pub(crate) fn fold_post_order<'a, K, T>(
    root: &'a Link<K>,
    empty: impl FnMut() -> T,
    mut combine: impl FnMut(&'a Node<K>, T, T) -> T,
) -> T {
    let flow = try_fold_post_order(root, empty, |node, left, right| {
        ControlFlow::<Infallible, T>::Continue(combine(node, left, right))
    });
    match flow {
        ControlFlow::Continue(folded) => folded,
        ControlFlow::Break(never) => match never {},
    }
}

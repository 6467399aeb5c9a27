//! The owning [`OrderedTree`] and its node model. Every node owns its two optional children so
//! dropping a node releases its whole subtree. Nothing in here recurses: insertion and search
//! are loops down a single path and tear-down/cloning use explicit stacks.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.find(&1));
//!
//! tree.insert(1);
//! assert!(tree.find(&1));
//!
//! // Inserting an equal key stores another copy.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.count(&1), 2);
//!
//! // Clearing releases every copy.
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(tree.len(), 0);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traversal;

/// An optional, exclusively owned subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// One stored key and the two subtrees hanging off of it.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced Binary Search Tree of keys. Keys less than a node's key are stored to its left
/// and keys greater than _or equal to_ it are stored to its right, so duplicates are kept as
/// distinct nodes.
///
/// The tree never rebalances. Use [`OrderedTree::is_balanced`] and friends to inspect how
/// lopsided the insertion order made it.
pub struct OrderedTree<K> {
    pub(crate) root: Link<K>,
    /// How many keys (duplicates included) are in the tree.
    pub(crate) size: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedTree<K> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<K> Clone for OrderedTree<K>
where
    K: Clone,
{
    /// Copies the tree node for node so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        let root = traversal::fold_post_order(
            &self.root,
            || None,
            |node, left, right| {
                Some(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                }))
            },
        );

        Self {
            root,
            size: self.size,
        }
    }
}

impl<K> fmt::Debug for OrderedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K> FromIterator<K> for OrderedTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for OrderedTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns how many keys are stored in the tree. Every copy of a duplicated key counts.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` as a new leaf. The new leaf goes to the left of every node whose key is
    /// greater than `key` and to the right of every other node on its path, so inserting a key
    /// that is already present adds another copy instead of replacing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }
        *link = Some(Node::new_boxed(key));
        self.size += 1;

        log::trace!(
            "OrderedTree::insert placed a leaf at depth {} (size {})",
            depth,
            self.size
        );

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
    }

    /// Asserts that every key is on the correct side of its ancestors and that `size` matches the
    /// number of nodes actually reachable from the root. This walks the whole tree.
    fn assert_invariants(&self)
    where
        K: Ord,
    {
        let reachable = traversal::fold_post_order(&self.root, || 0, |_, left: usize, right: usize| {
            left + right + 1
        });
        assert_eq!(self.size, reachable, "size drifted from the number of reachable nodes");
        assert!(self.is_bst(), "a key is outside the range its ancestors allow");
    }

    /// Returns `true` if some node in the tree holds a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [3, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.find(&4));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Returns how many copies of `key` are stored.
    ///
    /// Every copy of a key was routed right at each earlier copy, so all of them sit on the one
    /// search path that keeps going right past a match.
    pub fn count(&self, key: &K) -> usize
    where
        K: Ord,
    {
        let mut copies = 0;
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => {
                    copies += 1;
                    &node.right
                }
                Ordering::Greater => &node.right,
            };
        }
        copies
    }

    /// Returns the smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, if any. With duplicates this is the most recently inserted copy.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Removes every key from the tree. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        log::debug!("OrderedTree::clear on tree of size {}", self.size);

        release(self.root.take());
        self.size = 0;
    }
}

/// Drops a subtree one node at a time. Each node's children are detached before the node itself
/// is dropped so `Box`'s own drop never has to recurse.
fn release<K>(root: Link<K>) {
    let mut pending: Vec<Box<Node<K>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

//! A plain (unbalanced) Binary Search Tree over unique keys. The shape of the tree depends
//! entirely on the order keys are inserted in.
//!
//! # Examples
//!
//! ```
//! use dstruct::tree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [10, 5, 15, 3, 7, 12, 20] {
//!     tree.insert(key);
//! }
//!
//! // Keys come out of an in-order traversal sorted.
//! assert!(tree.in_order_traversal().copied().eq([3, 5, 7, 10, 12, 15, 20]));
//! assert_eq!(tree.find_minimum_key(), Ok(&3));
//! assert_eq!(tree.find_maximum_key(), Ok(&20));
//!
//! // Inserting a key twice is rejected.
//! assert!(!tree.insert(7));
//!
//! tree.delete(&5);
//! assert!(!tree.search(&5));
//! assert!(tree.in_order_traversal().copied().eq([3, 7, 10, 12, 15, 20]));
//! ```

use std::cmp::{self, Ordering};
use std::fmt;

use crate::error::{Error, Operation, Result};

/// A Binary Search Tree. Every key in a node's left subtree is smaller than the node's key and
/// every key in its right subtree is larger. Duplicate keys are never stored.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

type Link<K> = Option<Box<Node<K>>>;

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// The order in which [`Tree::traverse`] visits keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.len = 0;
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if the key was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dstruct::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = Node::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        } else {
            tracing::info!("duplicate key, not inserted");
        }
        inserted
    }

    /// Whether `key` is stored in the tree.
    pub fn search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes `key` from the tree. Returns `false` if the key wasn't there.
    ///
    /// A node with two children takes the key of its in-order successor (the smallest key in its
    /// right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use dstruct::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [10, 5, 15, 12, 20].into_iter().collect();
    /// assert!(tree.delete(&10));
    /// assert!(!tree.delete(&10));
    ///
    /// // 12 was promoted to the root.
    /// assert_eq!(tree.pre_order_traversal().next(), Some(&12));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = Node::delete(&mut self.root, key);
        if deleted {
            self.len -= 1;
        } else {
            tracing::trace!("key not found, nothing deleted");
        }
        deleted
    }

    /// Removes the node holding `key` together with everything below it. Returns how many keys
    /// were removed, which is zero if `key` wasn't there.
    pub fn delete_subtree(&mut self, key: &K) -> usize
    where
        K: Ord,
    {
        let removed = dismantle(Node::take_subtree(&mut self.root, key));
        if removed == 0 {
            tracing::trace!("key not found, no subtree deleted");
        } else {
            self.len -= removed;
            tracing::debug!(removed, "subtree deleted");
        }
        removed
    }

    /// The smallest key in the tree. Fails with [`Error::EmptyTree`] when there are no keys.
    pub fn find_minimum_key(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree {
            operation: Operation::FindMinimum,
        })?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The largest key in the tree. Fails with [`Error::EmptyTree`] when there are no keys.
    pub fn find_maximum_key(&self) -> Result<&K> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyTree {
            operation: Operation::FindMaximum,
        })?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// Depth of the shallowest path from the root.
    ///
    /// A node missing exactly one child counts through to the other child (`1 + left + right`)
    /// rather than stopping, so only nodes without children end a path. An empty tree has depth
    /// zero.
    pub fn minimum_depth(&self) -> usize {
        Node::depth(&self.root, cmp::min)
    }

    /// Depth of the deepest path from the root. Uses the same one-child rule as
    /// [`minimum_depth`](Tree::minimum_depth).
    pub fn maximum_depth(&self) -> usize {
        Node::depth(&self.root, cmp::max)
    }

    /// Visits every key in the given order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, K> {
        Traverse {
            order,
            pending: self.root.as_deref().map(Visit::Expand).into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Visits keys in ascending order.
    pub fn in_order_traversal(&self) -> Traverse<'_, K> {
        self.traverse(Order::InOrder)
    }

    /// Visits each node before its subtrees.
    pub fn pre_order_traversal(&self) -> Traverse<'_, K> {
        self.traverse(Order::PreOrder)
    }

    /// Visits each node after its subtrees.
    pub fn post_order_traversal(&self) -> Traverse<'_, K> {
        self.traverse(Order::PostOrder)
    }

    /// Same as [`in_order_traversal`](Tree::in_order_traversal).
    pub fn iter(&self) -> Traverse<'_, K> {
        self.in_order_traversal()
    }

    /// Keys of the nodes without children, from left to right.
    pub fn leaves(&self) -> Vec<&K> {
        let mut leaves = Vec::new();
        let mut pending: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            match (node.left.as_deref(), node.right.as_deref()) {
                (None, None) => leaves.push(&node.key),
                (left, right) => pending.extend(right.into_iter().chain(left)),
            }
        }
        leaves
    }

    /// Keys `level` steps below the root, from left to right. The root is level zero.
    pub fn keys_at_level(&self, level: usize) -> Vec<&K> {
        let mut row: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        for _ in 0..level {
            row = row
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        row.into_iter().map(|node| &node.key).collect()
    }

    /// Renders the tree on its side: right subtree above, left subtree below, four spaces of
    /// indentation per level.
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.to_string()
    }

    /// Prints [`render`](Tree::render) to standard output.
    pub fn display(&self)
    where
        K: fmt::Display,
    {
        print!("{}", self);
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Walks down from `link` to the link holding `key`, or to the empty link where `key` would
    /// be attached.
    fn seek<'a>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
    where
        K: Ord,
    {
        loop {
            let ordering = match link.as_deref().map(|node| key.cmp(&node.key)) {
                None | Some(Ordering::Equal) => return link,
                Some(ordering) => ordering,
            };
            link = match link {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return link,
            };
        }
    }

    fn insert(root: &mut Link<K>, key: K) -> bool
    where
        K: Ord,
    {
        let link = Node::seek(root, &key);
        if link.is_some() {
            return false;
        }
        *link = Some(Box::new(Node::new(key)));
        true
    }

    fn delete(root: &mut Link<K>, key: &K) -> bool
    where
        K: Ord,
    {
        let link = Node::seek(root, key);
        let node = match link.as_mut() {
            Some(node) => node,
            None => return false,
        };

        if node.left.is_some() && node.right.is_some() {
            if let Some(successor) = Node::delete_min(&mut node.right) {
                node.key = successor;
            }
        } else {
            // Zero or one child: the child (if any) takes this node's place.
            let replacement = node.left.take().or_else(|| node.right.take());
            *link = replacement;
        }

        if cfg!(debug_assertions) {
            if let Some(node) = link.as_deref() {
                if let Some(left) = node.left.as_deref() {
                    assert!(node.key > left.key);
                }
                if let Some(right) = node.right.as_deref() {
                    assert!(node.key < right.key);
                }
            }
        }
        true
    }

    /// Detaches the subtree rooted at the node holding `key`.
    fn take_subtree(root: &mut Link<K>, key: &K) -> Link<K>
    where
        K: Ord,
    {
        Node::seek(root, key).take()
    }

    /// Removes the smallest node of the subtree at `link` and returns its key.
    fn delete_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref()?.left.is_some() {
            link = match link {
                Some(node) => &mut node.left,
                None => return None,
            };
        }
        let node = link.take()?;
        let Node { key, right, .. } = *node;
        *link = right;
        Some(key)
    }

    /// Computes the depth bottom-up with an explicit stack. Each node is pushed once to queue its
    /// children and once more to combine their depths.
    fn depth(root: &Link<K>, pick: fn(usize, usize) -> usize) -> usize {
        let mut pending = vec![(root.as_deref(), false)];
        let mut depths: Vec<usize> = Vec::new();
        while let Some((link, children_done)) = pending.pop() {
            let Some(node) = link else {
                depths.push(0);
                continue;
            };
            if !children_done {
                pending.push((Some(node), true));
                pending.push((node.right.as_deref(), false));
                pending.push((node.left.as_deref(), false));
                continue;
            }

            // The left child was pushed last so it finished first.
            let right = depths.pop().unwrap_or_default();
            let left = depths.pop().unwrap_or_default();
            depths.push(if left == 0 || right == 0 {
                1 + left + right
            } else {
                1 + pick(left, right)
            });
        }
        depths.pop().unwrap_or_default()
    }
}

/// Drops a subtree one node at a time so degenerate trees don't blow the call stack. Returns how
/// many nodes were dropped.
fn dismantle<K>(link: Link<K>) -> usize {
    let mut count = 0;
    let mut pending: Vec<Box<Node<K>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
        count += 1;
    }
    count
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Right subtree first, so it's pushed last.
        let mut pending: Vec<(&Node<K>, usize, bool)> =
            self.root.as_deref().map(|root| (root, 0, false)).into_iter().collect();
        while let Some((node, level, expanded)) = pending.pop() {
            if expanded {
                writeln!(f, "{:indent$}{}", "", node.key, indent = level * 4)?;
                continue;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, level + 1, false));
            }
            pending.push((node, level, true));
            if let Some(right) = node.right.as_deref() {
                pending.push((right, level + 1, false));
            }
        }
        Ok(())
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Rebuilding from the pre-order sequence reproduces the same shape.
impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.pre_order_traversal().cloned().collect()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

enum Visit<'a, K> {
    /// A subtree still to be broken down.
    Expand(&'a Node<K>),
    /// A key ready to be yielded.
    Yield(&'a K),
}

/// A depth-first walk over a [`Tree`] driven by an explicit stack rather than recursion. Created
/// by [`Tree::traverse`] and friends.
pub struct Traverse<'a, K> {
    order: Order,
    pending: Vec<Visit<'a, K>>,
    remaining: usize,
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.pending.pop() {
            let node = match visit {
                Visit::Yield(key) => {
                    self.remaining -= 1;
                    return Some(key);
                }
                Visit::Expand(node) => node,
            };

            let left = node.left.as_deref().map(Visit::Expand);
            let right = node.right.as_deref().map(Visit::Expand);
            let key = Some(Visit::Yield(&node.key));
            // Pushed in reverse since the last one pushed is visited first.
            let frames = match self.order {
                Order::InOrder => [right, key, left],
                Order::PreOrder => [right, left, key],
                Order::PostOrder => [key, right, left],
            };
            self.pending.extend(frames.into_iter().flatten());
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Traverse<'_, K> {}

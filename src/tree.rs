//! A plain (unbalanced) Binary Search Tree storing each value once, ordered by a comparator.
//!
//! # Examples
//!
//! ```
//! use cursor_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal value leaves the tree alone.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Erasing reports whether anything was removed.
//! assert!(tree.erase(&1));
//! assert!(!tree.erase(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::mem;

use slab::Slab;
use tracing::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::cursor::Cursor;
use crate::error::TreeError;
use crate::iter::{IntoIter, Iter};
use crate::node::{Node, Nodes, PlaceResult};

/// An ordered set of values kept in a Binary Search Tree.
///
/// Values are ordered by the comparator `C` (their natural [`Ord`] ordering by default). The tree
/// never rebalances itself, so inserting already sorted values builds a chain and operations take
/// `O(len)` time in the worst case.
pub struct BinarySearchTree<T, C = Natural> {
    pub(crate) nodes: Nodes<T>,
    pub(crate) root: Option<usize>,
    cmp: C,
}

impl<T> BinarySearchTree<T, Natural> {
    /// Generates a new, empty `BinarySearchTree` using the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Generates a new, empty `BinarySearchTree` with room for `capacity` values before it needs
    /// to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C> Default for BinarySearchTree<T, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> BinarySearchTree<T, C> {
    /// Generates a new, empty `BinarySearchTree` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::with_comparator(|a: &(i32, i32), b: &(i32, i32)| a.1 < b.1);
    /// tree.extend([(1, 2), (7, 3), (2, 1)]);
    ///
    /// let points: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(points, [(2, 1), (1, 2), (7, 3)]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Generates a new, empty `BinarySearchTree` ordered by `cmp` with room for `capacity` values.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root to a leaf. `0` for an empty tree.
    pub fn height(&self) -> usize {
        Node::height(&self.nodes, self.root)
    }

    /// Inserts `value`, returning `true` if it was added. If an equal value (according to the
    /// comparator) is already stored, the tree is left unchanged, `value` is dropped and `false`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(3));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(3));
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        C: Compare<T>,
    {
        self.place(value).is_ok()
    }

    /// Inserts `value`, reporting an equal value already being stored as an error.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateValue`] if an equal value is already stored. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::{BinarySearchTree, TreeError};
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert_eq!(tree.try_insert("Luke"), Ok(()));
    /// assert_eq!(tree.try_insert("Luke"), Err(TreeError::DuplicateValue));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<(), TreeError>
    where
        C: Compare<T>,
    {
        self.place(value)
            .map(|_| ())
            .map_err(|_| TreeError::DuplicateValue)
    }

    /// Places `value`, handing it back if an equal one is already stored.
    fn place(&mut self, value: T) -> Result<usize, T>
    where
        C: Compare<T>,
    {
        match Node::place(&mut self.nodes, self.root, value, &self.cmp) {
            PlaceResult::Attached(id) => {
                if self.root.is_none() {
                    trace!(slot = id, "planted root");
                    self.root = Some(id);
                } else {
                    trace!(slot = id, parent = ?self.nodes[id].parent, "attached node");
                }
                Ok(id)
            }
            PlaceResult::Duplicate(value) => {
                trace!("equal value already stored");
                Err(value)
            }
        }
    }

    /// Returns `true` if a value equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        C: Compare<T>,
    {
        Node::find(&self.nodes, self.root, value, &self.cmp).is_some()
    }

    /// Potentially finds the stored value equal to `value`. If no stored value is equal, `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::BinarySearchTree;
    ///
    /// // Order by length only, so "abc" and "xyz" are equal.
    /// let mut tree = BinarySearchTree::with_comparator(|a: &&str, b: &&str| a.len() < b.len());
    /// tree.insert("abc");
    ///
    /// assert_eq!(tree.find(&"xyz"), Some(&"abc"));
    /// assert_eq!(tree.find(&"ab"), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        C: Compare<T>,
    {
        Node::find(&self.nodes, self.root, value, &self.cmp).map(|id| &self.nodes[id].value)
    }

    /// Removes the value equal to `value`, returning `true` if one was stored.
    pub fn erase(&mut self, value: &T) -> bool
    where
        C: Compare<T>,
    {
        self.take(value).is_some()
    }

    /// Removes the value equal to `value` and returns it. If no stored value is equal, nothing
    /// happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&5), Some(5));
    /// assert_eq!(tree.take(&5), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 8]);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        C: Compare<T>,
    {
        let id = Node::find(&self.nodes, self.root, value, &self.cmp)?;

        let node = &self.nodes[id];
        match (node.left, node.right) {
            (Some(left), Some(_)) => {
                // Promote the predecessor: its value moves into this slot and its own slot, which
                // never has a right child, is spliced out instead.
                let predecessor = Node::rightmost(&self.nodes, left);
                self.splice_out(predecessor);
                let promoted = self.nodes.remove(predecessor).value;
                trace!(slot = id, released = predecessor, "promoted predecessor");
                Some(mem::replace(&mut self.nodes[id].value, promoted))
            }
            _ => {
                self.splice_out(id);
                trace!(slot = id, "released node");
                Some(self.nodes.remove(id).value)
            }
        }
    }

    /// Unlinks a node with at most one child by linking that child (or nothing) into the node's
    /// place under its parent. The node's own slot is left for the caller to release.
    fn splice_out(&mut self, id: usize) {
        let node = &self.nodes[id];
        debug_assert!(node.left.is_none() || node.right.is_none());

        let parent = node.parent;
        let child = node.left.or(node.right);

        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
    }

    /// The smallest stored value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree is empty.
    pub fn smallest(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.nodes[Node::leftmost(&self.nodes, root)].value)
            .ok_or(TreeError::EmptyCollection {
                operation: "smallest",
            })
    }

    /// The largest stored value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree is empty.
    pub fn largest(&self) -> Result<&T, TreeError> {
        self.root
            .map(|root| &self.nodes[Node::rightmost(&self.nodes, root)].value)
            .ok_or(TreeError::EmptyCollection {
                operation: "largest",
            })
    }

    /// A cursor at the smallest value. For an empty tree this is the same as [`Self::end`].
    pub fn begin(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, self.root.map(|root| Node::leftmost(&self.nodes, root)))
    }

    /// A cursor at the smallest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree is empty.
    pub fn try_begin(&self) -> Result<Cursor<'_, T, C>, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyCollection {
                operation: "try_begin",
            });
        }
        Ok(self.begin())
    }

    /// A cursor at the end position, one past the largest value.
    pub fn end(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, None)
    }

    /// Iterates over the stored values in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.root)
    }

    /// Calls `visit` on every stored value in sorted order.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        Node::traverse_inorder(&self.nodes, self.root, visit);
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        debug!(len = self.len(), "clearing tree");
        self.nodes.clear();
        self.root = None;
    }

    /// Moves every value out into a new tree with a copy of this tree's comparator, leaving this
    /// tree empty. No node is copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_bst::BinarySearchTree;
    ///
    /// let mut source: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// let moved = source.take_all();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(moved.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn take_all(&mut self) -> Self
    where
        C: Clone,
    {
        debug!(len = self.len(), "moving tree");
        Self {
            nodes: mem::take(&mut self.nodes),
            root: self.root.take(),
            cmp: self.cmp.clone(),
        }
    }
}

/// A deep copy: every value is cloned and reinserted in pre-order, which rebuilds the exact same
/// shape without sharing a single node with the original.
impl<T, C> Clone for BinarySearchTree<T, C>
where
    T: Clone,
    C: Compare<T> + Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_and_comparator(self.len(), self.cmp.clone());
        for id in Node::preorder(&self.nodes, self.root) {
            copy.insert(self.nodes[id].value.clone());
        }
        debug!(len = copy.len(), "deep copied tree");
        copy
    }

    /// Builds the full copy first and only then swaps it in. If cloning a value panics, `self`
    /// is untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

impl<T, C> PartialEq for BinarySearchTree<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for BinarySearchTree<T, C> where T: Eq {}

impl<T, C> fmt::Debug for BinarySearchTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Lists the values in sorted order, e.g. `{2, 3, 5}`.
impl<T, C> fmt::Display for BinarySearchTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for BinarySearchTree<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for BinarySearchTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.root)
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for BinarySearchTree<T, C>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct BinarySearchTreeVisitor<T, C> {
    marker: std::marker::PhantomData<(T, C)>,
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for BinarySearchTreeVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Compare<T> + Default,
{
    type Value = BinarySearchTree<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0);
        let mut tree = BinarySearchTree::with_capacity_and_comparator(capacity, C::default());
        while let Some(value) = access.next_element()? {
            tree.insert(value);
        }
        Ok(tree)
    }
}

/// Values are reinserted one by one with the default comparator, so equal values collapse.
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for BinarySearchTree<T, C>
where
    T: serde::Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BinarySearchTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

//! A bidirectional position inside a [`BinarySearchTree`].
//!
//! # Examples
//!
//! ```
//! use cursor_bst::BinarySearchTree;
//!
//! let tree: BinarySearchTree<_> = [3, 2, 11, 13, 5, 17].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! let mut seen = Vec::new();
//! while cursor != tree.end() {
//!     seen.push(*cursor.get().unwrap());
//!     cursor.move_next().unwrap();
//! }
//! assert_eq!(seen, [2, 3, 5, 11, 13, 17]);
//!
//! // Stepping back from the end lands on the largest value.
//! cursor.move_prev().unwrap();
//! assert_eq!(cursor.get(), Ok(&17));
//! ```

use std::fmt;
use std::ptr;

use crate::error::TreeError;
use crate::node::Node;
use crate::tree::BinarySearchTree;

/// A position in a tree: either a stored value or the end position just past the largest value.
///
/// A cursor borrows its tree, so the tree cannot be changed while any cursor into it is alive.
/// Stepping uses only the tree's parent and child links, so a cursor is two words wide and never
/// allocates.
pub struct Cursor<'a, T, C> {
    tree: &'a BinarySearchTree<T, C>,
    // `None` is the end position.
    node: Option<usize>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T, C>, node: Option<usize>) -> Self {
        Self { tree, node }
    }

    /// Returns `true` if this cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The value at this position.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRangeCursor`] if the cursor is at the end position.
    pub fn get(&self) -> Result<&'a T, TreeError> {
        let tree = self.tree;
        self.node
            .map(|id| &tree.nodes[id].value)
            .ok_or(TreeError::OutOfRangeCursor { operation: "get" })
    }

    /// Moves to the next larger value, or to the end position from the largest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRangeCursor`] if the cursor is already at the end position. The cursor
    /// doesn't move.
    pub fn move_next(&mut self) -> Result<(), TreeError> {
        let id = self.node.ok_or(TreeError::OutOfRangeCursor {
            operation: "move_next",
        })?;
        self.node = Node::successor(&self.tree.nodes, id);
        Ok(())
    }

    /// Moves to the next smaller value. From the end position this is the largest value.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRangeCursor`] if there is no smaller value (the cursor is at the smallest
    /// value, or at the end of an empty tree). The cursor doesn't move.
    pub fn move_prev(&mut self) -> Result<(), TreeError> {
        let previous = self.prev_node().ok_or(TreeError::OutOfRangeCursor {
            operation: "move_prev",
        })?;
        self.node = Some(previous);
        Ok(())
    }

    /// The value [`Cursor::move_next`] would land on, or `None` if that's the end position or the
    /// cursor is already there.
    pub fn peek_next(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.node
            .and_then(|id| Node::successor(&tree.nodes, id))
            .map(|id| &tree.nodes[id].value)
    }

    /// The value [`Cursor::move_prev`] would land on, if any.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.prev_node().map(|id| &tree.nodes[id].value)
    }

    fn prev_node(&self) -> Option<usize> {
        let nodes = &self.tree.nodes;
        match self.node {
            Some(id) => Node::predecessor(nodes, id),
            None => self.tree.root.map(|root| Node::rightmost(nodes, root)),
        }
    }
}

impl<T, C> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Cursor<'_, T, C> {}

/// Two cursors are equal when they point at the same position of the same tree.
impl<T, C> PartialEq for Cursor<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl<T, C> Eq for Cursor<'_, T, C> {}

impl<T, C> fmt::Debug for Cursor<'_, T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => f.debug_tuple("Cursor").field(value).finish(),
            Err(_) => f.write_str("Cursor(end)"),
        }
    }
}

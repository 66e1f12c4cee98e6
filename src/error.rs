//! Errors reported by the tree and its cursors.

use std::fmt;

/// Conditions a caller can run into when asking the tree for something it can't give.
///
/// None of these are fatal: the tree is left exactly as it was before the failing call.
///
/// # Examples
///
/// ```
/// use cursor_bst::{BinarySearchTree, TreeError};
///
/// let tree: BinarySearchTree<i32> = BinarySearchTree::new();
///
/// assert_eq!(
///     tree.smallest(),
///     Err(TreeError::EmptyCollection { operation: "smallest" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The operation needs at least one element but the tree is empty.
    EmptyCollection {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },
    /// A cursor was dereferenced at the end position or stepped outside the tree.
    OutOfRangeCursor {
        /// The name of the cursor operation that was attempted.
        operation: &'static str,
    },
    /// An equal value (according to the tree's comparator) is already stored.
    DuplicateValue,
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection { operation } => {
                write!(formatter, "{operation}: the tree is empty")
            }
            Self::OutOfRangeCursor { operation } => {
                write!(formatter, "{operation}: cursor is out of range")
            }
            Self::DuplicateValue => formatter.write_str("an equal value is already in the tree"),
        }
    }
}

impl std::error::Error for TreeError {}

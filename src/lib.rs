//! This crate exposes a generic, ordered Binary Search Tree with a bidirectional cursor.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value ordered before its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value ordered after its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. This tree does not rebalance itself, so the height depends entirely on
//! the insertion order and can reach the number of stored values.
//!
//! ## Ordering
//!
//! "Before" and "after" are decided by a comparator (see [`Compare`]). By default values use
//! their [`Ord`] implementation. Values the comparator considers equal are only stored once.
//!
//! ## Cursors
//!
//! BSTs naturally support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree. Every node also links to its parent, so a [`Cursor`] can step to the
//! next or previous value from anywhere without any extra storage. Cursors borrow the tree, so it
//! can't be modified while a cursor into it exists.
//!
//! # Examples
//!
//! ```
//! use cursor_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for value in [3, 2, 11, 13, 5, 17] {
//!     tree.insert(value);
//! }
//!
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [2, 3, 5, 11, 13, 17]);
//!
//! tree.erase(&3);
//! assert_eq!(tree.smallest(), Ok(&2));
//! assert_eq!(tree.to_string(), "{2, 5, 11, 13, 17}");
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod cursor;
pub mod error;
pub mod iter;
mod node;
pub mod tree;

pub use compare::{Compare, Descending, Natural};
pub use cursor::Cursor;
pub use error::TreeError;
pub use tree::BinarySearchTree;

//! Orderings used to place values in a [`BinarySearchTree`][crate::BinarySearchTree].
//!
//! A comparator answers a single question: does `a` belong strictly before `b`? It must be a
//! strict weak ordering (irreflexive and transitive). Two values where neither orders before the
//! other are considered equal by the tree, and only one of them is ever stored.
//!
//! # Examples
//!
//! ```
//! use cursor_bst::{BinarySearchTree, Descending};
//!
//! let mut tree = BinarySearchTree::with_comparator(Descending);
//! tree.extend(["Luke", "Kanye", "Pentatonix"]);
//!
//! let names: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(names, ["Pentatonix", "Luke", "Kanye"]);
//! ```

use std::cmp::Ordering;

/// A strict weak ordering over `T`.
///
/// Any `Fn(&T, &T) -> bool` is a comparator, so a closure can be handed straight to
/// [`BinarySearchTree::with_comparator`][crate::BinarySearchTree::with_comparator].
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Where `a` sits relative to `b`. Neither ordering before the other means `Equal`.
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// The natural ordering of `T` given by its [`Ord`] implementation. This is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of [`Natural`]: larger values come first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Compare<T> for Descending {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

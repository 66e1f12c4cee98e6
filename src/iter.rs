//! Sorted iteration over a [`BinarySearchTree`][crate::BinarySearchTree].

use std::iter::FusedIterator;

use crate::node::{Node, Nodes};

/// Borrowing iterator over a tree's values in sorted order. Created by
/// [`BinarySearchTree::iter`][crate::BinarySearchTree::iter].
///
/// It steps along parent and child links the same way a [`Cursor`][crate::Cursor] does, from both
/// ends at once. Counting down the remaining values keeps the two ends from crossing.
pub struct Iter<'a, T> {
    nodes: &'a Nodes<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<usize>) -> Self {
        Self {
            nodes,
            front: root.map(|root| Node::leftmost(nodes, root)),
            back: root.map(|root| Node::rightmost(nodes, root)),
            remaining: nodes.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.front = Node::successor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.back = Node::predecessor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a tree's values in sorted order. Created by `into_iter` on a tree.
pub struct IntoIter<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(mut nodes: Nodes<T>, root: Option<usize>) -> Self {
        // Releasing slots while stepping would break the parent links stepping relies on, so the
        // order is worked out before anything is moved out.
        let mut order = Vec::with_capacity(nodes.len());
        let mut current = root.map(|root| Node::leftmost(&nodes, root));
        while let Some(id) = current {
            order.push(id);
            current = Node::successor(&nodes, id);
        }
        let values = order
            .into_iter()
            .map(|id| nodes.remove(id).value)
            .collect::<Vec<_>>()
            .into_iter();
        Self { values }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.values.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

//! The storage unit of the tree.
//!
//! Nodes live in a [`Slab`] owned by the tree and refer to each other by slot index. A node's
//! `left` and `right` links describe the tree's shape; its `parent` link is only ever used to walk
//! back up during in-order stepping and never implies ownership. Releasing a node is removing its
//! slot, so there is no way to free one twice or to forget one when the slab drops.

use std::cmp::Ordering;

use slab::Slab;

use crate::compare::Compare;

/// Every node of a single tree.
pub(crate) type Nodes<T> = Slab<Node<T>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
    pub(crate) parent: Option<usize>,
}

/// The outcome of [`Node::place`].
pub(crate) enum PlaceResult<T> {
    /// A new node was attached at this slot.
    Attached(usize),
    /// An equal value was already in the subtree. Nothing changed and the offered value is handed
    /// back.
    Duplicate(T),
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<usize>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    /// Places `value` into the subtree rooted at `root`. Values ordering strictly before a node go
    /// to its left, values ordering strictly after go to its right, and the first empty link found
    /// that way receives the new node. With no root the new node becomes a parentless root.
    pub(crate) fn place<C>(
        nodes: &mut Nodes<T>,
        root: Option<usize>,
        value: T,
        cmp: &C,
    ) -> PlaceResult<T>
    where
        C: Compare<T>,
    {
        let Some(mut current) = root else {
            let id = nodes.insert(Node::new(value, None));
            if cfg!(debug_assertions) {
                assert_eq!(nodes.len(), 1);
            }
            return PlaceResult::Attached(id);
        };
        loop {
            let node = &nodes[current];
            let next = match cmp.compare(&value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return PlaceResult::Duplicate(value),
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        let goes_left = cmp.less(&value, &nodes[current].value);
        let id = nodes.insert(Node::new(value, Some(current)));
        if goes_left {
            nodes[current].left = Some(id);
        } else {
            nodes[current].right = Some(id);
        }

        if cfg!(debug_assertions) {
            let parent = &nodes[current];
            let child = &nodes[id];
            if goes_left {
                assert!(cmp.less(&child.value, &parent.value));
            } else {
                assert!(cmp.less(&parent.value, &child.value));
            }
        }

        PlaceResult::Attached(id)
    }

    /// Finds the slot holding a value equal to `value` in the subtree rooted at `root`.
    pub(crate) fn find<C>(nodes: &Nodes<T>, root: Option<usize>, value: &T, cmp: &C) -> Option<usize>
    where
        C: Compare<T>,
    {
        let mut current = root;
        while let Some(id) = current {
            let node = &nodes[id];
            current = match cmp.compare(value, &node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The smallest node of the subtree rooted at `id`.
    pub(crate) fn leftmost(nodes: &Nodes<T>, mut id: usize) -> usize {
        while let Some(left) = nodes[id].left {
            id = left;
        }
        id
    }

    /// The largest node of the subtree rooted at `id`.
    pub(crate) fn rightmost(nodes: &Nodes<T>, mut id: usize) -> usize {
        while let Some(right) = nodes[id].right {
            id = right;
        }
        id
    }

    /// The next node in sorted order, or `None` if `id` holds the largest value.
    ///
    /// With a right subtree, that's the subtree's smallest node. Otherwise it's the first ancestor
    /// we reach by climbing up out of a left child.
    pub(crate) fn successor(nodes: &Nodes<T>, id: usize) -> Option<usize> {
        if let Some(right) = nodes[id].right {
            return Some(Self::leftmost(nodes, right));
        }

        let mut current = id;
        while let Some(parent) = nodes[current].parent {
            if nodes[parent].left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The previous node in sorted order, or `None` if `id` holds the smallest value. Mirror image
    /// of [`Node::successor`].
    pub(crate) fn predecessor(nodes: &Nodes<T>, id: usize) -> Option<usize> {
        if let Some(left) = nodes[id].left {
            return Some(Self::rightmost(nodes, left));
        }

        let mut current = id;
        while let Some(parent) = nodes[current].parent {
            if nodes[parent].right == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Visits every value of the subtree rooted at `root` in sorted order (left subtree, the node,
    /// then the right subtree).
    pub(crate) fn traverse_inorder<F>(nodes: &Nodes<T>, root: Option<usize>, mut visit: F)
    where
        F: FnMut(&T),
    {
        let Some(root) = root else {
            return;
        };
        // Stepping with `successor` would climb above `root` when `root` isn't the tree's root, so
        // walk with an explicit stack instead.
        let mut stack = Vec::new();
        let mut current = Some(root);
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            visit(&nodes[id].value);
            current = nodes[id].right;
        }
    }

    /// Slots of the subtree rooted at `root` in pre-order: a node, then its left subtree, then its
    /// right subtree. Reinserting values in this order rebuilds the same shape.
    pub(crate) fn preorder(nodes: &Nodes<T>, root: Option<usize>) -> Vec<usize> {
        let mut order = Vec::with_capacity(nodes.len());
        let mut stack: Vec<usize> = root.into_iter().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = &nodes[id];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        order
    }

    /// Number of nodes on the longest path from `root` down to a leaf.
    pub(crate) fn height(nodes: &Nodes<T>, root: Option<usize>) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(usize, usize)> = root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = &nodes[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        tallest
    }
}

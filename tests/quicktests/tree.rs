use cursor_bst::{BinarySearchTree, Descending};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                bst.insert(value.clone());
                set.insert(value.clone());
            }
            Op::Remove(value) => {
                bst.erase(value);
                set.remove(value);
            }
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
                assert!(bst.iter().rev().eq(set.iter().rev()));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter())
}

#[quickcheck]
fn sorted_without_duplicates(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    let values: Vec<_> = tree.iter().collect();
    values.windows(2).all(|pair| pair[0] < pair[1]) && values.len() == tree.len()
}

#[quickcheck]
fn descending_is_reversed_natural(xs: Vec<i16>) -> bool {
    let natural: BinarySearchTree<_> = xs.iter().copied().collect();
    let mut descending = BinarySearchTree::with_comparator(Descending);
    descending.extend(xs);

    natural.iter().rev().eq(descending.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.erase(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_then_erase_is_inverse(xs: Vec<i8>, extra: i8) -> bool {
    let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
    if tree.contains(&extra) {
        return true;
    }
    let before: Vec<_> = tree.iter().copied().collect();

    tree.insert(extra);
    tree.erase(&extra);

    tree.iter().copied().eq(before)
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: BinarySearchTree<_> = xs.into_iter().collect();
    let before: Vec<_> = original.iter().copied().collect();

    let mut copy = original.clone();
    let same_shape = copy.height() == original.height() && copy == original;
    let mut set: BTreeSet<_> = before.iter().copied().collect();
    do_ops(&ops, &mut copy, &mut set);

    same_shape && original.iter().copied().eq(before)
}

#[quickcheck]
fn take_all_empties_source(xs: Vec<i8>) -> bool {
    let mut source: BinarySearchTree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.into_iter().collect();

    let moved = source.take_all();

    source.is_empty() && source.iter().next().is_none() && moved.iter().eq(expected.iter())
}

#[quickcheck]
fn smallest_and_largest(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    tree.smallest().ok() == xs.iter().min() && tree.largest().ok() == xs.iter().max()
}

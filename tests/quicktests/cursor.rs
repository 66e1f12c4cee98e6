use cursor_bst::BinarySearchTree;
use quickcheck_macros::quickcheck;

/// Walks from `begin` to `end` collecting values.
fn walk_forward(tree: &BinarySearchTree<i8>) -> Vec<i8> {
    let mut cursor = tree.begin();
    let mut seen = Vec::new();
    while cursor != tree.end() {
        seen.push(*cursor.get().unwrap());
        cursor.move_next().unwrap();
    }
    seen
}

/// Walks from `end` back to `begin` collecting values.
fn walk_backward(tree: &BinarySearchTree<i8>) -> Vec<i8> {
    let mut cursor = tree.end();
    let mut seen = Vec::new();
    while cursor != tree.begin() {
        cursor.move_prev().unwrap();
        seen.push(*cursor.get().unwrap());
    }
    seen
}

#[quickcheck]
fn forward_matches_iter(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.erase(delete);
    }

    walk_forward(&tree).iter().eq(tree.iter())
}

#[quickcheck]
fn backward_matches_reversed_iter(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.erase(delete);
    }

    walk_backward(&tree).iter().eq(tree.iter().rev())
}

#[quickcheck]
fn end_never_advances(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let mut end = tree.end();

    end.get().is_err() && end.move_next().is_err() && end == tree.end()
}

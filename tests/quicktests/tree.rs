use dstruct::tree::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                if bst.insert(k.clone()) != set.insert(k.clone()) {
                    return false;
                }
            }
            Op::Remove(k) => {
                if bst.delete(k) != set.remove(k) {
                    return false;
                }
            }
            Op::Iter => {
                if !bst.iter().eq(set.iter()) {
                    return false;
                }
            }
        }
        if bst.len() != set.len() || bst.is_empty() != set.is_empty() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && set.iter().all(|key| tree.search(key))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let keys: Vec<_> = tree.in_order_traversal().collect();

    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
        && tree
            .in_order_traversal()
            .zip(tree.in_order_traversal().skip(1))
            .all(|(a, b)| a < b)
}

#[quickcheck]
fn min_max_match_keys(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.find_minimum_key().ok() == xs.iter().min()
        && tree.find_maximum_key().ok() == xs.iter().max()
}

#[quickcheck]
fn duplicate_insert_keeps_shape(xs: Vec<i8>, dup: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.pre_order_traversal().copied().collect();
    let len = tree.len();

    !tree.insert(xs[dup % xs.len()])
        && tree.len() == len
        && tree.pre_order_traversal().copied().eq(before)
}

#[quickcheck]
fn traversals_visit_every_key(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let in_order: Vec<_> = tree.in_order_traversal().collect();
    let mut pre_order: Vec<_> = tree.pre_order_traversal().collect();
    let mut post_order: Vec<_> = tree.post_order_traversal().collect();
    let root_first = pre_order.first() == post_order.last();
    pre_order.sort();
    post_order.sort();

    root_first && pre_order == in_order && post_order == in_order
}

#[quickcheck]
fn depths_bound_each_other(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.minimum_depth() <= tree.maximum_depth()
        && tree.maximum_depth() <= tree.len()
        && (tree.minimum_depth() == 0) == tree.is_empty()
}

#[quickcheck]
fn subtree_deletion_counts(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let len = tree.len();
    let present = tree.search(&key);
    let removed = tree.delete_subtree(&key);

    (removed > 0) == present && tree.len() == len - removed && !tree.search(&key)
}

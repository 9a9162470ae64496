use avl::balance::{is_balanced, is_ordered};
use avl::{traversal, BalancedTree, SearchTree};

use std::collections::{BTreeSet, HashSet};

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a `BTreeSet`, checking the tree's invariants after
/// every step. This way we can ensure that after a random smattering of inserts and deletes we
/// have the same set of values in both.
fn do_ops(ops: &[Op<i8>], bst: &mut BalancedTree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agreed = match op {
            Op::Insert(v) => bst.insert(*v) == set.insert(*v),
            Op::Remove(v) => bst.remove(v) == set.remove(v),
        };
        if !agreed
            || !is_balanced(bst.root())
            || !is_ordered(bst.root())
            || bst.size() != set.len()
        {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = BalancedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && traversal::in_order(&tree) == set.iter().copied().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: BalancedTree<_> = xs.into_iter().collect();

    traversal::in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BalancedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BalancedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
        && is_balanced(tree.root())
}

#[quickcheck]
fn size_counts_distinct_values(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = SearchTree::new();
    let mut inserted = 0;
    for x in &xs {
        if tree.insert(*x) {
            inserted += 1;
        }
    }
    let mut removed = 0;
    for delete in &deletes {
        if tree.remove(delete) {
            removed += 1;
        }
    }

    let distinct: HashSet<_> = xs.iter().collect();
    inserted == distinct.len() && tree.size() == inserted - removed
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree: BalancedTree<_> = xs.into_iter().collect();
    let n = tree.size() as f64;

    // An AVL tree with n nodes is never taller than 1.44 * lg(n + 2).
    (tree.height() as f64) <= 1.45 * (n + 2.0).log2()
}

#[quickcheck]
fn clear_then_rebuild(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree: BalancedTree<_> = xs.into_iter().collect();
    tree.clear();
    if !tree.is_empty() || tree.size() != 0 || tree.to_list().is_some() {
        return false;
    }

    tree.extend(ys.iter().copied());
    let expected: BTreeSet<_> = ys.into_iter().collect();
    tree.to_list().unwrap_or_default() == expected.into_iter().collect::<Vec<_>>()
        && is_balanced(tree.root())
}

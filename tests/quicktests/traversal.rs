use avl::{traversal, BalancedTree, Order, SearchTree};

/// Sorts a copy of `values` so traversals can be compared as multisets.
fn sorted(mut values: Vec<i16>) -> Vec<i16> {
    values.sort_unstable();
    values
}

#[quickcheck]
fn orders_agree_on_contents(xs: Vec<i16>) -> bool {
    let tree: BalancedTree<_> = xs.into_iter().collect();
    let in_order = traversal::in_order(&tree);

    Order::ALL
        .iter()
        .all(|order| sorted(order.traverse(&tree)) == in_order)
}

#[quickcheck]
fn orders_agree_on_contents_unbalanced(xs: Vec<i16>) -> bool {
    let tree: SearchTree<_> = xs.into_iter().collect();
    let in_order = traversal::in_order(&tree);

    sorted(traversal::pre_order(&tree)) == in_order
        && sorted(traversal::post_order(&tree)) == in_order
}

#[quickcheck]
fn root_is_first_pre_order_and_last_post_order(xs: Vec<i16>) -> bool {
    let tree: BalancedTree<_> = xs.into_iter().collect();
    let root = tree.root().map(|n| *n.value());

    traversal::pre_order(&tree).first().copied() == root
        && traversal::post_order(&tree).last().copied() == root
}

#[test]
fn ascending_insert_is_not_a_chain() {
    let tree: BalancedTree<_> = (1..=7).collect();

    assert_eq!(tree.height(), 3);
    assert_eq!(traversal::pre_order(&tree), vec![4, 2, 1, 3, 6, 5, 7]);
}

#[test]
fn two_child_removal_promotes_successor() {
    let mut tree: BalancedTree<_> = [20, 10, 30, 5, 15, 25, 35].into_iter().collect();
    tree.remove(&20);

    assert_eq!(tree.root().map(|n| *n.value()), Some(25));
    assert_eq!(traversal::in_order(&tree), vec![5, 10, 15, 25, 30, 35]);
}

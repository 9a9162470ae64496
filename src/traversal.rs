//! Depth-first walks over a tree that copy its values out in one of the three canonical orders.
//!
//! The walks only read the tree through [`Tree::root`], so they work the same for every balancing
//! policy.
//!
//! # Examples
//!
//! ```
//! use avl::{traversal, BalancedTree, Order};
//!
//! //     2
//! //    / \
//! //   1   3
//! let tree: BalancedTree<_> = [1, 2, 3].into_iter().collect();
//!
//! assert_eq!(traversal::pre_order(&tree), vec![2, 1, 3]);
//! assert_eq!(traversal::in_order(&tree), vec![1, 2, 3]);
//! assert_eq!(Order::PostOrder.traverse(&tree), vec![1, 3, 2]);
//! ```

use crate::node::Node;
use crate::tree::Tree;

/// When a node's own value is emitted relative to its subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. For a BST this yields values in
    /// ascending order.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

impl Order {
    /// All three orders.
    pub const ALL: [Order; 3] = [Order::PreOrder, Order::InOrder, Order::PostOrder];

    /// Collects every value of `tree` in this order. An empty tree gives an empty `Vec`.
    pub fn traverse<T: Clone, B>(self, tree: &Tree<T, B>) -> Vec<T> {
        let mut values = Vec::with_capacity(tree.size());
        self.walk(tree.root(), &mut values);
        values
    }

    fn walk<T: Clone>(self, node: Option<&Node<T>>, values: &mut Vec<T>) {
        let Some(node) = node else {
            return;
        };

        if self == Order::PreOrder {
            values.push(node.value().clone());
        }
        self.walk(node.left(), values);
        if self == Order::InOrder {
            values.push(node.value().clone());
        }
        self.walk(node.right(), values);
        if self == Order::PostOrder {
            values.push(node.value().clone());
        }
    }
}

/// Shorthand for [`Order::PreOrder.traverse`][Order::traverse].
pub fn pre_order<T: Clone, B>(tree: &Tree<T, B>) -> Vec<T> {
    Order::PreOrder.traverse(tree)
}

/// Shorthand for [`Order::InOrder.traverse`][Order::traverse].
pub fn in_order<T: Clone, B>(tree: &Tree<T, B>) -> Vec<T> {
    Order::InOrder.traverse(tree)
}

/// Shorthand for [`Order::PostOrder.traverse`][Order::traverse].
pub fn post_order<T: Clone, B>(tree: &Tree<T, B>) -> Vec<T> {
    Order::PostOrder.traverse(tree)
}

//! Height bookkeeping, rotations, and the balancing policies a [`Tree`][crate::Tree] can apply after
//! each structural change.
//!
//! Heights are not cached on the nodes. [`height`] walks the whole subtree on every call, which
//! keeps `Node` down to a value and two children at the cost of an `O(n)` rebalancing step.
//!
//! See [the Wikipedia page][wiki] for the terminology used here.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing

use log::trace;

use crate::node::Node;

/// A rebalancing strategy applied to every subtree root on the way back up from an insertion or
/// deletion.
pub trait Balance {
    /// Restores this policy's shape invariant at `node`, assuming it already holds for both of
    /// `node`'s children, and returns the new subtree root.
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>>;
}

/// The plain Binary Search Tree policy: subtrees are never restructured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {}

impl Balance for Unbalanced {
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
        node
    }
}

/// The AVL policy: after rebalancing, the heights of the two subtrees of every node differ by at
/// most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avl {}

impl Balance for Avl {
    fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
        let node = rebalance(node);

        if cfg!(debug_assertions) {
            let factor = balance_factor(&node);
            assert!(
                (-1..=1).contains(&factor),
                "balance factor {} after rebalancing",
                factor
            );
        }
        node
    }
}

/// How many levels are in the subtree rooted at `node`. An empty subtree has height 0 and a leaf
/// has height 1.
pub fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
}

/// The height of the left subtree minus the height of the right subtree. Positive values mean the
/// node is left-heavy.
pub fn balance_factor<T>(node: &Node<T>) -> isize {
    height(node.left()) as isize - height(node.right()) as isize
}

/// Whether every node in the subtree has a balance factor in `[-1, 1]`.
pub fn is_balanced<T>(node: Option<&Node<T>>) -> bool {
    /// Returns the height of the subtree if it is balanced.
    fn checked_height<T>(node: Option<&Node<T>>) -> Option<usize> {
        match node {
            None => Some(0),
            Some(n) => {
                let left = checked_height(n.left())?;
                let right = checked_height(n.right())?;
                (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
            }
        }
    }

    checked_height(node).is_some()
}

/// Whether the subtree satisfies the BST ordering: every value in a node's left subtree is strictly
/// less than the node's value and every value in its right subtree is strictly greater.
pub fn is_ordered<T: Ord>(node: Option<&Node<T>>) -> bool {
    fn within<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
        match node {
            None => true,
            Some(n) => {
                lower.map_or(true, |lower| lower < &n.value)
                    && upper.map_or(true, |upper| &n.value < upper)
                    && within(n.left(), lower, Some(&n.value))
                    && within(n.right(), Some(&n.value), upper)
            }
        }
    }

    within(node, None, None)
}

/// Applies the single or double rotation that fixes an imbalance of two at `node`. A node whose
/// balance factor is already in `[-1, 1]` is returned untouched.
pub(crate) fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let factor = balance_factor(&node);
    if factor > 1 {
        let left = node.left.as_deref().expect("Left-heavy => left child");
        if height(left.left()) >= height(left.right()) {
            trace!("left-heavy subtree: rotating right");
            rotate_right(node)
        } else {
            trace!("left-heavy subtree: rotating left-right");
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
    } else if factor < -1 {
        let right = node.right.as_deref().expect("Right-heavy => right child");
        if height(right.right()) >= height(right.left()) {
            trace!("right-heavy subtree: rotating left");
            rotate_left(node)
        } else {
            trace!("right-heavy subtree: rotating right-left");
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    } else {
        node
    }
}

/// Rotates `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///    old_root                  new_root
///    /     \                   /     \
/// new_root  z     rotate ->   x    old_root
///  / \                               /  \
/// x   y                             y    z
/// ```
pub(crate) fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    old_root.left = new_root.right.take();
    new_root.right = Some(old_root);
    new_root
}

/// The mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child, adopting the right child's old left subtree.
///
/// ## Panics
///
/// When called on a node without a right child.
pub(crate) fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    old_root.right = new_root.left.take();
    new_root.left = Some(old_root);
    new_root
}

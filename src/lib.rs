//! This crate exposes an ordered set built on a Binary Search Tree (BST), with or without AVL
//! self-balancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)`. Without any care, inserting sorted values
//! produces a chain whose height is the number of values. An AVL tree keeps the heights of the two
//! subtrees of every `Node` within one of each other by rotating subtrees after each insertion and
//! deletion, which bounds the height to `O(lg N)`.
//!
//! ## Choosing a tree
//!
//! [`Tree`] is parameterized by a [`Balance`] policy:
//!
//! * [`BalancedTree`] (`Tree<T, Avl>`, the default) rebalances on every mutation.
//! * [`SearchTree`] (`Tree<T, Unbalanced>`) is the plain BST.
//!
//! ```
//! use avl::{traversal, BalancedTree, SearchTree};
//!
//! let mut balanced: BalancedTree<i32> = (1..=7).collect();
//! let mut plain: SearchTree<i32> = (1..=7).collect();
//!
//! assert_eq!(balanced.height(), 3);
//! assert_eq!(plain.height(), 7);
//!
//! assert!(balanced.remove(&4));
//! assert!(!plain.remove(&42));
//!
//! assert_eq!(traversal::in_order(&balanced), vec![1, 2, 3, 5, 6, 7]);
//! assert_eq!(plain.to_list(), Some(vec![1, 2, 3, 4, 5, 6, 7]));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balance;
pub mod node;
pub mod traversal;
pub mod tree;
mod util;

#[cfg(test)]
mod test;

pub use balance::{Avl, Balance, Unbalanced};
pub use node::Node;
pub use traversal::Order;
pub use tree::{BalancedTree, SearchTree, Tree};

//! An owned, mutable BST whose shape is maintained by a [`Balance`] policy.
//!
//! # Examples
//!
//! ```
//! use avl::BalancedTree;
//!
//! let mut tree = BalancedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert_eq!(tree.to_list(), None);
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal value changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing reports whether the value was there.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::balance::{self, Avl, Balance, Unbalanced};
use crate::node::{Link, Node};
use crate::util::InsertResult;

/// A Binary Search Tree that never restructures itself. Inserting sorted values produces a chain.
pub type SearchTree<T> = Tree<T, Unbalanced>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree).
pub type BalancedTree<T> = Tree<T, Avl>;

/// An ordered set of unique values stored in a Binary Search Tree. After every insertion or
/// deletion, each node on the path back up to the root is handed to the policy `B`.
///
/// Mutation takes `&mut self` so a `Tree` shared between threads needs to be wrapped in a lock by
/// the caller.
pub struct Tree<T, B = Avl> {
    root: Link<T>,
    /// Always the number of nodes reachable from `root`.
    size: usize,
    policy: PhantomData<B>,
}

impl<T, B> Default for Tree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, B> Clone for Tree<T, B> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
            policy: PhantomData,
        }
    }
}

impl<T: fmt::Debug, B> fmt::Debug for Tree<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("size", &self.size)
            .field("root", &self.root())
            .finish()
    }
}

impl<T, B> Tree<T, B> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            policy: PhantomData,
        }
    }

    /// The root node, if the tree is not empty. This is the entry point for walking the tree, e.g.
    /// with the functions in [`traversal`][crate::traversal].
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`][Self::size].
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        balance::height(self.root())
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        self.root = None;
        self.size = 0;
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// All values in ascending order, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// assert_eq!(tree.to_list(), None);
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.to_list(), Some(vec![1, 2, 3]));
    /// ```
    pub fn to_list(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        fn collect<T: Clone>(node: Option<&Node<T>>, list: &mut Vec<T>) {
            if let Some(node) = node {
                collect(node.left(), list);
                list.push(node.value.clone());
                collect(node.right(), list);
            }
        }

        let root = self.root()?;
        let mut list = Vec::with_capacity(self.size);
        collect(Some(root), &mut list);
        Some(list)
    }
}

impl<T, B> Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Inserts `value` unless an equal value is already stored. Returns whether the value was
    /// inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, result) = Self::insert_node(self.root.take(), value);
        self.root = Some(root);
        if result.created() {
            self.size += 1;
        }
        result.created()
    }

    /// Removes the value equal to `value` from the tree. Returns whether such a value was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::BalancedTree;
    ///
    /// let mut tree: BalancedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// assert_eq!(tree.to_list(), Some(vec![1, 3]));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.contains(value) {
            return false;
        }

        self.root = self
            .root
            .take()
            .and_then(|root| Self::remove_node(root, value));
        self.size -= 1;
        true
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    /// Whether `value` is stored in a node without children. Returns `false` if `value` isn't
    /// stored at all.
    pub fn is_leaf(&self, value: &T) -> bool {
        self.find_node(value).map_or(false, Node::is_leaf)
    }

    fn find_node(&self, value: &T) -> Option<&Node<T>> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(n),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Inserts `value` into the subtree rooted at `link` and returns the new subtree root.
    fn insert_node(link: Link<T>, value: T) -> (Box<Node<T>>, InsertResult) {
        let mut node = match link {
            Some(node) => node,
            None => {
                trace!("inserting new leaf");
                return (Node::new_boxed(value), InsertResult::Created);
            }
        };

        let result = match value.cmp(&node.value) {
            Ordering::Less => {
                let (left, result) = Self::insert_node(node.left.take(), value);
                node.left = Some(left);
                result
            }
            Ordering::Equal => InsertResult::AlreadyPresent,
            Ordering::Greater => {
                let (right, result) = Self::insert_node(node.right.take(), value);
                node.right = Some(right);
                result
            }
        };

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(node.value > left.value);
            }
            if let Some(right) = node.right() {
                assert!(node.value < right.value);
            }
        }

        (B::rebalance(node), result)
    }

    /// Removes `value` from the subtree rooted at `node` and returns the new subtree root. If the
    /// node holding `value` has two children, its in-order successor's value takes its place.
    fn remove_node(mut node: Box<Node<T>>, value: &T) -> Link<T> {
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = node
                    .left
                    .take()
                    .and_then(|left| Self::remove_node(left, value));
            }
            Ordering::Greater => {
                node.right = node
                    .right
                    .take()
                    .and_then(|right| Self::remove_node(right, value));
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => {
                    trace!("removing leaf");
                    return None;
                }
                (Some(child), None) | (None, Some(child)) => {
                    trace!("removing node with one child");
                    return Some(child);
                }
                (Some(left), Some(right)) => {
                    trace!("replacing node with its in-order successor");
                    let (successor, right) = Self::take_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = right;
                }
            },
        }

        Some(B::rebalance(node))
    }

    /// Removes the smallest node of the subtree rooted at `node`. Returns its value and the new
    /// subtree root.
    fn take_min(mut node: Box<Node<T>>) -> (T, Link<T>) {
        match node.left.take() {
            None => {
                let Node { value, right, .. } = *node;
                (value, right)
            }
            Some(left) => {
                let (min, left) = Self::take_min(left);
                node.left = left;
                (min, Some(B::rebalance(node)))
            }
        }
    }
}

impl<T, B> FromIterator<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, B> Extend<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

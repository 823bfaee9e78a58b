//! This crate exposes three Binary Search Trees (BSTs) that differ only in how hard they work
//! to stay short, mostly for comparing how their heights grow.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s. Every `Node` has at most two children and the
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its
//!    own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than
//!    (or, for trees that keep duplicates, equal to) its own key.
//!
//! Searching and inserting take `O(height)` (where `height` is the number of `Node`s on the
//! longest path from the root down to a leaf). Nothing about these invariants limits the height
//! though. Inserting keys in ascending order makes every new `Node` the right child of the
//! previous one, so the "tree" is really a list.
//!
//! ## The trees
//!
//! - [`UnbalancedTree`] does no rebalancing at all. Its height depends entirely on the order of
//!   insertion and is `N` in the worst case.
//! - [`BalancedTree`] is an AVL tree. It keeps the heights of every `Node`'s subtrees within one
//!   of each other by rotating `Node`s after each insertion, which limits its height to roughly
//!   `1.44 * lg(N)`.
//! - [`ColoredTree`] is a red-black tree. It colors every `Node` red or black and recolors and
//!   rotates after each insertion so that no red `Node` has a red child and every path down from
//!   a `Node` meets the same number of black `Node`s. That limits its height to `2 * lg(N + 1)`.
//!
//! All three share the [`Traversal`] trait for walking their keys in order, pre-order,
//! post-order, and breadth first, and for measuring their height.
//!
//! ```
//! use search_trees::{BalancedTree, ColoredTree, Traversal, UnbalancedTree};
//!
//! let mut unbalanced = UnbalancedTree::new();
//! let mut balanced = BalancedTree::new();
//! let mut colored = ColoredTree::new();
//!
//! for key in 0..1000 {
//!     unbalanced.insert(key);
//!     balanced.insert(key);
//!     colored.insert(key);
//! }
//!
//! assert_eq!(unbalanced.height(), 1000);
//! assert_eq!(balanced.height(), 10);
//! assert!(colored.height() <= 2 * 10);
//! assert_eq!(balanced.in_order(), colored.in_order());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod colored;
mod error;
mod traversal;
pub mod unbalanced;

pub use balanced::BalancedTree;
pub use colored::ColoredTree;
pub use error::{Error, Violation};
pub use traversal::Traversal;
pub use unbalanced::UnbalancedTree;

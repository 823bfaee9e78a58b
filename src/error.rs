//! Errors returned by the trees in this crate.

use thiserror::Error;

/// Insertion errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key can't be ordered against itself (e.g. `f64::NAN`) or against a key already in
    /// the tree on the way down to its position, so it has no valid position.
    #[error("key can't be ordered against the tree")]
    InvalidKey,
}

/// A broken structural invariant reported by `validate`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A key sits on the wrong side of one of its ancestors.
    #[error("keys are out of order")]
    Unordered,
    /// A node's subtrees differ in height by more than one.
    #[error("subtree heights differ by {difference}")]
    Unbalanced {
        /// The absolute difference between the left and right subtree heights.
        difference: usize,
    },
    /// A node's cached height disagrees with its children.
    #[error("cached height {cached} does not match computed height {computed}")]
    StaleHeight {
        /// The height stored on the node.
        cached: usize,
        /// `1 + max(left, right)` computed from the children.
        computed: usize,
    },
    /// The root of a red-black tree is red.
    #[error("root is red")]
    RedRoot,
    /// The sentinel of a red-black tree is red.
    #[error("sentinel is red")]
    RedSentinel,
    /// A red node has a red child.
    #[error("red node has a red child")]
    RedChild,
    /// Two paths from the same node reach the sentinel through different numbers of black nodes.
    #[error("black heights differ: {left} on the left, {right} on the right")]
    BlackHeightMismatch {
        /// Black nodes between the left child and the sentinel.
        left: usize,
        /// Black nodes between the right child and the sentinel.
        right: usize,
    },
    /// A node's parent reference doesn't point back at the node holding it as a child.
    #[error("parent reference does not match child link")]
    BrokenParentLink,
}

//! Traversals shared by every tree in this crate.
//!
//! Each tree only describes how to step from a node to its children (and what an empty child
//! looks like for it). The orderings themselves live here, once. They are all iterative so a
//! degenerate [`UnbalancedTree`][crate::UnbalancedTree] with a very long spine can't exhaust the
//! call stack.
//!
//! # Examples
//!
//! ```
//! use search_trees::{Traversal, UnbalancedTree};
//!
//! let mut tree = UnbalancedTree::new();
//! for key in [2, 1, 3] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order(), vec![1, 2, 3]);
//! assert_eq!(tree.pre_order(), vec![2, 1, 3]);
//! assert_eq!(tree.post_order(), vec![1, 3, 2]);
//! assert_eq!(tree.bfs(), vec![2, 1, 3]);
//! assert_eq!(tree.height(), 2);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Read-only walks over a binary tree of keys.
pub trait Traversal {
    /// The type of key stored in the tree.
    type Key;

    /// A cheap reference to a node which is only ever produced for non-empty positions.
    type Handle<'a>: Copy
    where
        Self: 'a;

    /// The root of the tree, or `None` if the tree is empty.
    fn root(&self) -> Option<Self::Handle<'_>>;

    /// The left child of `node`, or `None` if that position is empty.
    fn left<'a>(&'a self, node: Self::Handle<'a>) -> Option<Self::Handle<'a>>;

    /// The right child of `node`, or `None` if that position is empty.
    fn right<'a>(&'a self, node: Self::Handle<'a>) -> Option<Self::Handle<'a>>;

    /// The key stored at `node`.
    fn key<'a>(&'a self, node: Self::Handle<'a>) -> &'a Self::Key;

    /// Nodes in sorted order: left subtree, node, right subtree.
    fn in_order_nodes(&self) -> Vec<Self::Handle<'_>> {
        let mut nodes = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = self.left(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            nodes.push(node);
            current = self.right(node);
        }

        nodes
    }

    /// Keys in sorted order: left subtree, node, right subtree.
    fn in_order(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        self.in_order_nodes()
            .into_iter()
            .map(|node| self.key(node).clone())
            .collect()
    }

    /// Keys with every node before its subtrees: node, left subtree, right subtree.
    fn pre_order(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        let mut keys = Vec::new();
        let mut stack: Vec<_> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            keys.push(self.key(node).clone());
            // Right goes on first so left comes off first.
            stack.extend(self.right(node));
            stack.extend(self.left(node));
        }

        keys
    }

    /// Nodes with every node after its subtrees: left subtree, right subtree, node.
    fn post_order_nodes(&self) -> Vec<Self::Handle<'_>> {
        // Walk node, right, left and reverse the result.
        let mut nodes = Vec::new();
        let mut stack: Vec<_> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(self.left(node));
            stack.extend(self.right(node));
        }

        nodes.reverse();
        nodes
    }

    /// Keys with every node after its subtrees: left subtree, right subtree, node.
    fn post_order(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        self.post_order_nodes()
            .into_iter()
            .map(|node| self.key(node).clone())
            .collect()
    }

    /// Keys level by level from the root down, left before right within a level.
    fn bfs(&self) -> Vec<Self::Key>
    where
        Self::Key: Clone,
    {
        let mut keys = Vec::new();
        let mut queue: VecDeque<_> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            keys.push(self.key(node).clone());
            queue.extend(self.left(node));
            queue.extend(self.right(node));
        }

        keys
    }

    /// How many levels are in the tree. A tree with just a root has a height of 1 and an empty
    /// tree has a height of 0.
    fn height(&self) -> usize {
        let mut level: Vec<_> = self.root().into_iter().collect();
        let mut height = 0;

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| self.left(node).into_iter().chain(self.right(node)))
                .collect();
        }

        height
    }
}

/// Follows the path an insertion of `key` would take and reports whether `key` could be ordered
/// against itself and every node along the way. Equal keys are followed right.
pub(crate) fn comparable_on_path<T>(tree: &T, key: &T::Key) -> bool
where
    T: Traversal + ?Sized,
    T::Key: PartialOrd,
{
    if key.partial_cmp(key).is_none() {
        return false;
    }

    let mut current = tree.root();
    while let Some(node) = current {
        current = match key.partial_cmp(tree.key(node)) {
            Some(Ordering::Less) => tree.left(node),
            Some(_) => tree.right(node),
            None => return false,
        };
    }

    true
}

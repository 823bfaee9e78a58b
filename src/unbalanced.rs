//! A plain BST that never rebalances. Keys are attached wherever the search for them ends, so
//! the shape of the tree depends entirely on insertion order. Inserting sorted keys builds a
//! chain as tall as the number of keys.
//!
//! Equal keys are kept, not merged. A duplicate is routed right of the existing key.
//!
//! # Examples
//!
//! ```
//! use search_trees::{Traversal, UnbalancedTree};
//!
//! let mut tree = UnbalancedTree::new();
//! assert_eq!(tree.height(), 0);
//!
//! for key in [1, 2, 3, 4] {
//!     tree.insert(key);
//! }
//!
//! // Ascending keys only ever go right.
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4]);
//!
//! // Duplicates accumulate.
//! tree.insert(2);
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.in_order(), vec![1, 2, 2, 3, 4]);
//! ```

use log::debug;

use crate::error::{Error, Violation};
use crate::traversal::{comparable_on_path, Traversal};

type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree.
pub struct UnbalancedTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for UnbalancedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for UnbalancedTree<K> {
    // The default recursive drop would overflow the stack on a long chain.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for UnbalancedTree<K>
where
    K: Clone,
{
    // Rebuilds bottom up from a post-order walk so a long chain can't overflow the stack. Each
    // node's copied subtrees are on top of `built` by the time the node itself comes up.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        for node in self.post_order_nodes() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K> UnbalancedTree<K> {
    /// Generates a new, empty `UnbalancedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the key below the node where a search for it runs out. Keys smaller than a node go
    /// left and everything else, including an equal key, goes right.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.attach(key);
    }

    /// Like [`insert`][Self::insert] but for keys that are only partially ordered. A key that
    /// can't be compared with itself, or with a key on the path down to where it would go, is
    /// rejected and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{Error, Traversal, UnbalancedTree};
    ///
    /// let mut tree = UnbalancedTree::new();
    /// assert_eq!(tree.try_insert(1.5), Ok(()));
    /// assert_eq!(tree.try_insert(f64::NAN), Err(Error::InvalidKey));
    /// assert_eq!(tree.in_order(), vec![1.5]);
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<(), Error>
    where
        K: PartialOrd,
    {
        if !comparable_on_path(&*self, &key) {
            debug!("rejecting key that can't be ordered against the tree");
            return Err(Error::InvalidKey);
        }
        self.attach(key);
        Ok(())
    }

    /// Whether some node holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialOrd,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *key == node.key {
                return true;
            }
            current = if *key < node.key {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        false
    }

    /// Checks that every key in a left subtree is less than its ancestor and every key in a
    /// right subtree is greater than or equal to it.
    pub fn validate(&self) -> Result<(), Violation>
    where
        K: PartialOrd,
    {
        // Each entry carries the exclusive upper and inclusive lower bound from its ancestors.
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, None, None));
        }

        while let Some((node, lower, upper)) = stack.pop() {
            let above_lower = lower.map_or(true, |lower: &K| node.key >= *lower);
            let below_upper = upper.map_or(true, |upper: &K| node.key < *upper);
            if !above_lower || !below_upper {
                return Err(Violation::Unordered);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some(&node.key), upper));
            }
        }

        Ok(())
    }

    fn attach(&mut self, key: K)
    where
        K: PartialOrd,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
    }
}

impl<K> Traversal for UnbalancedTree<K> {
    type Key = K;
    type Handle<'a> = &'a Node<K> where Self: 'a;

    fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    fn left<'a>(&'a self, node: &'a Node<K>) -> Option<&'a Node<K>> {
        node.left.as_deref()
    }

    fn right<'a>(&'a self, node: &'a Node<K>) -> Option<&'a Node<K>> {
        node.right.as_deref()
    }

    fn key<'a>(&'a self, node: &'a Node<K>) -> &'a K {
        &node.key
    }
}

/// A `Node` of an [`UnbalancedTree`]. It owns both of its children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

//! A self-balancing Binary Search Tree (specifically, an AVL tree). Every node caches the height
//! of its subtree and, on the way back up from an insertion, any node whose subtrees differ in
//! height by more than one is fixed with one or two rotations.
//!
//! Inserting a key that's already present does nothing.
//!
//! # Examples
//!
//! ```
//! use search_trees::{BalancedTree, Traversal};
//!
//! let mut tree = BalancedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.height(), 0);
//!
//! // Ascending keys would make a chain in a plain BST.
//! for key in [10, 20, 30, 40, 50] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.pre_order(), vec![20, 10, 40, 30, 50]);
//!
//! // Equal keys are ignored.
//! tree.insert(30);
//! assert_eq!(tree.len(), 5);
//! ```

use log::{debug, trace};

use crate::error::{Error, Violation};
use crate::traversal::{comparable_on_path, Traversal};

type Link<K> = Option<Box<Node<K>>>;

/// Which child a search descended into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// The result of inserting into a subtree.
struct Inserted<K> {
    /// The new root of the subtree.
    node: Box<Node<K>>,
    /// Which way the key went at the subtree root. `None` if the key became the subtree root or
    /// was already present.
    went: Option<Side>,
}

/// An AVL tree.
#[derive(Clone)]
pub struct BalancedTree<K> {
    root: Link<K>,
    len: usize,
    rotations: usize,
}

impl<K> Default for BalancedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> BalancedTree<K> {
    /// Generates a new, empty `BalancedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            rotations: 0,
        }
    }

    /// How many distinct keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many single rotations have been performed since the tree was created. A double
    /// rotation counts as two.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BalancedTree;
    ///
    /// let mut tree = BalancedTree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.rotations(), 0);
    ///
    /// let mut tree = BalancedTree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.rotations(), 1);
    /// ```
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Inserts the key, rebalancing every subtree on the path back to the root. Inserting a key
    /// that's already in the tree leaves the tree unchanged.
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.attach(key);
    }

    /// Like [`insert`][Self::insert] but for keys that are only partially ordered. A key that
    /// can't be compared with itself, or with a key on the path down to where it would go, is
    /// rejected and the tree is left untouched.
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

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialOrd,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = if *key < node.key {
                node.left.as_deref()
            } else if *key > node.key {
                node.right.as_deref()
            } else {
                return true;
            };
        }
        false
    }

    /// Checks that the keys are strictly ordered, that every cached height is accurate, and that
    /// no node's subtrees differ in height by more than one.
    pub fn validate(&self) -> Result<(), Violation>
    where
        K: PartialOrd,
    {
        let nodes = self.in_order_nodes();
        if nodes.windows(2).any(|pair| pair[0].key >= pair[1].key) {
            return Err(Violation::Unordered);
        }
        match self.root.as_deref() {
            Some(root) => root.validate().map(|_| ()),
            None => Ok(()),
        }
    }

    fn attach(&mut self, key: K)
    where
        K: PartialOrd,
    {
        let mut inserted = false;
        let Inserted { node, .. } =
            Node::insert(self.root.take(), key, &mut inserted, &mut self.rotations);
        self.root = Some(node);
        if inserted {
            self.len += 1;
        }
    }
}

impl<K> Traversal for BalancedTree<K> {
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

    /// Reads the height cached on the root.
    fn height(&self) -> usize {
        height(&self.root)
    }
}

/// Gets the height of a possibly empty subtree.
fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// A `Node` of a [`BalancedTree`]. It owns both of its children.
#[derive(Clone)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Inserts `key` into the subtree rooted at `link` and returns the new (balanced) root of the
    /// subtree. `inserted` is set when a node was actually added.
    fn insert(link: Link<K>, key: K, inserted: &mut bool, rotations: &mut usize) -> Inserted<K>
    where
        K: PartialOrd,
    {
        let Some(mut node) = link else {
            *inserted = true;
            return Inserted {
                node: Box::new(Self::new(key)),
                went: None,
            };
        };

        // `child_went` is where the key went one level further down. It's what tells the
        // single-rotation cases apart from the double-rotation cases.
        let (went, child_went) = if key < node.key {
            let child = Self::insert(node.left.take(), key, inserted, rotations);
            node.left = Some(child.node);
            (Side::Left, child.went)
        } else if key > node.key {
            let child = Self::insert(node.right.take(), key, inserted, rotations);
            node.right = Some(child.node);
            (Side::Right, child.went)
        } else {
            return Inserted { node, went: None };
        };

        if !*inserted {
            return Inserted {
                node,
                went: Some(went),
            };
        }

        node.fix_height();
        Inserted {
            node: node.balance(child_went, rotations),
            went: Some(went),
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree. See [the Wikipedia
    /// page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Restores the AVL invariant at this node after an insertion into one of its subtrees.
    ///
    /// `child_went` is the direction the inserted key took at the root of the taller subtree. If
    /// it points the same way as the imbalance (left-left or right-right) one rotation fixes it.
    /// Otherwise the child is rotated first to straighten the path.
    fn balance(self: Box<Self>, child_went: Option<Side>, rotations: &mut usize) -> Box<Self> {
        let balance_factor = self.balance_factor();
        let return_node = match child_went {
            Some(Side::Left) if balance_factor > 1 => self.rotate_right(rotations),
            Some(Side::Right) if balance_factor < -1 => self.rotate_left(rotations),
            Some(Side::Right) if balance_factor > 1 => {
                let mut node = self;
                node.left = node.left.take().map(|left| left.rotate_left(rotations));
                node.rotate_right(rotations)
            }
            Some(Side::Left) if balance_factor < -1 => {
                let mut node = self;
                node.right = node.right.take().map(|right| right.rotate_right(rotations));
                node.rotate_left(rotations)
            }
            _ => self,
        };

        // After balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(debug_assertions) {
            assert!(return_node.balance_factor().abs() <= 1);
            assert_eq!(
                return_node.height,
                height(&return_node.left).max(height(&return_node.right)) + 1
            );
        }
        return_node
    }

    /// Rotates the right child up to become the root of this subtree. The right child's left
    /// subtree becomes the old root's right subtree.
    ///
    /// ```text
    ///   old_root                 new_root
    ///    /    \                   /     \
    ///   x   new_root  rotate -> old_root  z
    ///        /  \                /  \
    ///       y    z              x    y
    /// ```
    ///
    /// Without a right child there's nothing to rotate and the subtree is returned as is.
    fn rotate_left(mut self: Box<Self>, rotations: &mut usize) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        trace!("rotating left at a subtree of height {}", self.height);
        *rotations += 1;

        self.right = new_root.left.take();
        // The old root is now the child so its height must be fixed first.
        self.fix_height();
        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Rotates the left child up to become the root of this subtree. The left child's right
    /// subtree becomes the old root's left subtree.
    ///
    /// ```text
    ///      old_root            new_root
    ///       /     \             /     \
    ///   new_root   z  rotate -> x    old_root
    ///    /  \                         /  \
    ///   x    y                       y    z
    /// ```
    ///
    /// Without a left child there's nothing to rotate and the subtree is returned as is.
    fn rotate_right(mut self: Box<Self>, rotations: &mut usize) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        trace!("rotating right at a subtree of height {}", self.height);
        *rotations += 1;

        self.left = new_root.right.take();
        self.fix_height();
        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Checks the cached heights and balance of this subtree, returning its height.
    fn validate(&self) -> Result<usize, Violation> {
        let left = self.left.as_deref().map_or(Ok(0), Self::validate)?;
        let right = self.right.as_deref().map_or(Ok(0), Self::validate)?;
        let computed = left.max(right) + 1;

        if self.height != computed {
            return Err(Violation::StaleHeight {
                cached: self.height,
                computed,
            });
        }
        let difference = left.abs_diff(right);
        if difference > 1 {
            return Err(Violation::Unbalanced { difference });
        }
        Ok(computed)
    }
}

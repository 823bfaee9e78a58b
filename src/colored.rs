//! A red-black tree. Nodes live in an arena and refer to each other by index, including the
//! non-owning reference from a node to its parent. Index 0 is a shared black sentinel standing in
//! for every missing child and for the root's parent, so the fix-up after an insertion can always
//! read a color without checking for an empty position first.
//!
//! Like the [`UnbalancedTree`][crate::UnbalancedTree], equal keys are kept and routed right.
//!
//! # Examples
//!
//! ```
//! use search_trees::{ColoredTree, Traversal};
//!
//! let mut tree = ColoredTree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.bfs(), vec![2, 1, 4, 3, 6, 5, 7]);
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.validate(), Ok(()));
//! ```

use log::{debug, trace};

use crate::error::{Error, Violation};
use crate::traversal::{comparable_on_path, Traversal};

/// The position of a node in a [`ColoredTree`]'s arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Stands in for every empty child and for the root's parent.
const SENTINEL: NodeId = NodeId(0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The structural half of a node: its color and its links. The sentinel has links but no key.
#[derive(Copy, Clone, Debug)]
struct Links {
    color: Color,
    parent: NodeId,
    left: NodeId,
    right: NodeId,
}

impl Links {
    fn sentinel() -> Self {
        Self {
            color: Color::Black,
            parent: SENTINEL,
            left: SENTINEL,
            right: SENTINEL,
        }
    }
}

/// A red-black tree.
#[derive(Clone)]
pub struct ColoredTree<K> {
    /// Indexed by `NodeId`. Slot 0 is the sentinel.
    links: Vec<Links>,
    /// The key of `NodeId(i)` is `keys[i - 1]`.
    keys: Vec<K>,
    root: NodeId,
    rotations: usize,
}

impl<K> Default for ColoredTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ColoredTree<K> {
    /// Generates a new, empty `ColoredTree`.
    pub fn new() -> Self {
        Self {
            links: vec![Links::sentinel()],
            keys: Vec::new(),
            root: SENTINEL,
            rotations: 0,
        }
    }

    /// How many keys are in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.root == SENTINEL
    }

    /// How many single rotations the fix-up has performed since the tree was created.
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// Inserts the key as a red leaf and then repairs any red-red violation between it and its
    /// ancestors. Keys smaller than a node go left and everything else, including an equal key,
    /// goes right.
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

    /// Whether some node holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: PartialOrd,
    {
        let mut current = self.root;
        while current != SENTINEL {
            let current_key = self.key_of(current);
            if key == current_key {
                return true;
            }
            current = if key < current_key {
                self.links[current.0].left
            } else {
                self.links[current.0].right
            };
        }
        false
    }

    /// Checks every red-black invariant: the root and the sentinel are black, no red node has a
    /// red child, every path from a node down to the sentinel passes the same number of black
    /// nodes, parent references agree with child links, and keys never decrease from left to
    /// right.
    ///
    /// Equal keys are inserted to the right but a rotation can lift one above its twin, so a left
    /// subtree may hold keys equal to its ancestor.
    pub fn validate(&self) -> Result<(), Violation>
    where
        K: PartialOrd,
    {
        if self.color(SENTINEL) != Color::Black {
            return Err(Violation::RedSentinel);
        }
        if self.color(self.root) != Color::Black {
            return Err(Violation::RedRoot);
        }
        if self.parent(self.root) != SENTINEL {
            return Err(Violation::BrokenParentLink);
        }
        self.validate_order()?;
        self.black_height(self.root).map(|_| ())
    }

    fn attach(&mut self, key: K)
    where
        K: PartialOrd,
    {
        let mut parent = SENTINEL;
        let mut side = Side::Left;
        let mut current = self.root;
        while current != SENTINEL {
            parent = current;
            side = if key < *self.key_of(current) {
                Side::Left
            } else {
                Side::Right
            };
            current = self.child(current, side);
        }

        let node = NodeId(self.links.len());
        self.links.push(Links {
            color: Color::Red,
            parent,
            left: SENTINEL,
            right: SENTINEL,
        });
        self.keys.push(key);

        if parent == SENTINEL {
            self.root = node;
        } else {
            self.set_child(parent, side, node);
        }
        self.fix_insert(node);
    }

    /// Walks up from a freshly inserted red node until no red node has a red parent.
    fn fix_insert(&mut self, mut node: NodeId) {
        while node != self.root && self.color(self.parent(node)) == Color::Red {
            // The parent is red so it isn't the root and the grandparent is a real node.
            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            let parent_side = self.side_of(parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.color(uncle) == Color::Red {
                trace!("fix-up case 1: recoloring around a red uncle");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.side_of(node) != parent_side {
                trace!("fix-up case 2: straightening an inner grandchild");
                node = parent;
                self.rotate(node, parent_side);
            }

            trace!("fix-up case 3: rotating the grandparent");
            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);

        if cfg!(debug_assertions) {
            assert_eq!(self.color(SENTINEL), Color::Black);
        }
    }

    /// Rotates `pivot` towards `direction`: its child on the other side rises to take its place,
    /// `pivot` becomes that child's `direction` child, and the rising child's inner subtree moves
    /// across to `pivot`.
    ///
    /// ```text
    /// rotate(x, Left)                       rotate(x, Right)
    ///
    ///     x                y                      x            y
    ///    / \              / \                    / \          / \
    ///   a   y     ->     x   c                  y   c   ->   a   x
    ///      / \          / \                    / \              / \
    ///     b   c        a   b                  a   b            b   c
    /// ```
    ///
    /// Parent references are updated on every node whose parent changes. If `pivot` was the root
    /// the rising child becomes the root. Rotating towards a missing child does nothing.
    fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let rising = self.child(pivot, direction.opposite());
        if pivot == SENTINEL || rising == SENTINEL {
            return;
        }
        trace!("rotating {:?} at node {}", direction, pivot.0);
        self.rotations += 1;

        let inner = self.child(rising, direction);
        self.set_child(pivot, direction.opposite(), inner);
        if inner != SENTINEL {
            self.links[inner.0].parent = pivot;
        }

        let grandparent = self.parent(pivot);
        self.links[rising.0].parent = grandparent;
        if grandparent == SENTINEL {
            self.root = rising;
        } else {
            let side = self.side_of(pivot);
            self.set_child(grandparent, side, rising);
        }

        self.set_child(rising, direction, pivot);
        self.links[pivot.0].parent = rising;
    }

    fn key_of(&self, node: NodeId) -> &K {
        &self.keys[node.0 - 1]
    }

    fn color(&self, node: NodeId) -> Color {
        self.links[node.0].color
    }

    fn set_color(&mut self, node: NodeId, color: Color) {
        // The sentinel stays black no matter what the fix-up asks for.
        if node != SENTINEL {
            self.links[node.0].color = color;
        }
    }

    fn parent(&self, node: NodeId) -> NodeId {
        self.links[node.0].parent
    }

    fn child(&self, node: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.links[node.0].left,
            Side::Right => self.links[node.0].right,
        }
    }

    fn set_child(&mut self, node: NodeId, side: Side, child: NodeId) {
        match side {
            Side::Left => self.links[node.0].left = child,
            Side::Right => self.links[node.0].right = child,
        }
    }

    /// Which child of its parent `node` is. Only meaningful for non-root nodes.
    fn side_of(&self, node: NodeId) -> Side {
        if self.links[self.parent(node).0].left == node {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn validate_order(&self) -> Result<(), Violation>
    where
        K: PartialOrd,
    {
        // Inclusive bounds inherited from the ancestors.
        let mut stack = Vec::new();
        if self.root != SENTINEL {
            stack.push((self.root, None, None));
        }

        while let Some((node, lower, upper)) = stack.pop() {
            let key = self.key_of(node);
            let above_lower = lower.map_or(true, |lower: &K| key >= lower);
            let below_upper = upper.map_or(true, |upper: &K| key <= upper);
            if !above_lower || !below_upper {
                return Err(Violation::Unordered);
            }

            for (side, lower, upper) in [
                (Side::Left, lower, Some(key)),
                (Side::Right, Some(key), upper),
            ] {
                let child = self.child(node, side);
                if child == SENTINEL {
                    continue;
                }
                if self.parent(child) != node {
                    return Err(Violation::BrokenParentLink);
                }
                stack.push((child, lower, upper));
            }
        }

        Ok(())
    }

    /// Counts the black nodes between `node` and the sentinel below it, not including `node`
    /// itself, after checking the red and black-height rules for its whole subtree.
    fn black_height(&self, node: NodeId) -> Result<usize, Violation> {
        if node == SENTINEL {
            return Ok(0);
        }
        let Links { left, right, .. } = self.links[node.0];

        if self.color(node) == Color::Red
            && (self.color(left) == Color::Red || self.color(right) == Color::Red)
        {
            return Err(Violation::RedChild);
        }

        let through = |child: NodeId| -> Result<usize, Violation> {
            let below = self.black_height(child)?;
            Ok(below + usize::from(self.color(child) == Color::Black && child != SENTINEL))
        };
        let (left, right) = (through(left)?, through(right)?);
        if left != right {
            return Err(Violation::BlackHeightMismatch { left, right });
        }
        Ok(left)
    }
}

impl<K> Traversal for ColoredTree<K> {
    type Key = K;
    type Handle<'a> = NodeId where Self: 'a;

    fn root(&self) -> Option<NodeId> {
        (self.root != SENTINEL).then_some(self.root)
    }

    fn left<'a>(&'a self, node: NodeId) -> Option<NodeId> {
        let left = self.links[node.0].left;
        (left != SENTINEL).then_some(left)
    }

    fn right<'a>(&'a self, node: NodeId) -> Option<NodeId> {
        let right = self.links[node.0].right;
        (right != SENTINEL).then_some(right)
    }

    fn key<'a>(&'a self, node: NodeId) -> &'a K {
        self.key_of(node)
    }
}

//! An unbalanced Binary Search Tree with owned nodes. Every `Node` owns its children through a
//! `Box`, so removing a node is a matter of relinking the slot that owns it and letting the
//! removed `Box` drop.
//!
//! # Examples
//!
//! ```
//! use pathwork::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&5).is_none());
//! assert_eq!(tree.minimum(), None);
//!
//! for key in [5, 7, 4, 6, 8, 2] {
//!     tree.insert(key);
//! }
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(6));
//! assert_eq!(tree.pre_order(), vec![&5, &4, &2, &7, &6, &8]);
//!
//! assert_eq!(tree.minimum(), Some(&2));
//! assert_eq!(tree.maximum(), Some(&8));
//! assert_eq!(tree.successor(&5), Some(&6));
//! assert_eq!(tree.parent(&6), Some(&7));
//!
//! // Deleting a node hands back its key.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.in_order(), vec![&2, &4, &6, &7, &8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::util::DeleteCase;

type Link<K> = Option<Box<Node<K>>>;

/// The order in which [`Tree::traverse`] visits keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A Binary Search Tree without duplicate keys. This can be used for inserting, searching, and
/// deleting keys as well as for ordered queries like [`successor`][Tree::successor]. The tree
/// never rebalances so its shape depends entirely on insertion order.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A `Node` holds a key and up to two children. Handles to nodes are returned by
/// [`Tree::search`] and can be used to inspect the shape of the tree.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unbalanced trees can be as deep as they are long so release nodes from an explicit
        // stack instead of letting each `Box` drop its children recursively.
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Children are copied before their parent, so when a node comes up its copied right
        // subtree sits on top of `built` with its left subtree under it.
        let mut built: Vec<Box<Node<K>>> = Vec::new();
        self.walk(Order::PostOrder, |node| {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        });

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.in_order())
            .finish()
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a lone root a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts the key into the tree. Returns `false`, leaving the tree untouched, if the key
    /// was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    tracing::trace!("ignoring duplicate key");
                    return false;
                }
            }
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Finds the node holding the given key. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.search(&2).unwrap();
    /// assert_eq!(node.left().map(|n| n.key()), Some(&1));
    /// assert_eq!(node.right().map(|n| n.key()), Some(&3));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    /// Whether the key is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// The smallest key, or `None` for an empty tree.
    pub fn minimum(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.leftmost().key)
    }

    /// The largest key, or `None` for an empty tree.
    pub fn maximum(&self) -> Option<&K> {
        self.root.as_deref().map(|root| &root.rightmost().key)
    }

    /// The smallest key greater than `key`. Returns `None` if `key` isn't in the tree or if it
    /// is the largest key.
    pub fn successor(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let node = self.search(key)?;
        if let Some(right) = node.right() {
            return Some(&right.leftmost().key);
        }

        // No right subtree: the successor is the last ancestor we passed on its left side.
        let mut successor = None;
        let mut ancestor = self.root.as_deref();
        while let Some(current) = ancestor {
            match key.cmp(&current.key) {
                Ordering::Less => {
                    successor = Some(&current.key);
                    ancestor = current.left();
                }
                Ordering::Greater => ancestor = current.right(),
                Ordering::Equal => break,
            }
        }

        successor
    }

    /// The largest key smaller than `key`. Returns `None` if `key` isn't in the tree or if it
    /// is the smallest key.
    pub fn predecessor(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let node = self.search(key)?;
        if let Some(left) = node.left() {
            return Some(&left.rightmost().key);
        }

        let mut predecessor = None;
        let mut ancestor = self.root.as_deref();
        while let Some(current) = ancestor {
            match key.cmp(&current.key) {
                Ordering::Less => ancestor = current.left(),
                Ordering::Greater => {
                    predecessor = Some(&current.key);
                    ancestor = current.right();
                }
                Ordering::Equal => break,
            }
        }

        predecessor
    }

    /// The key of the node whose child holds `key`. The root and missing keys have no parent.
    pub fn parent(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref()?;
        loop {
            if current.holds_child(key) {
                return Some(&current.key);
            }

            current = match key.cmp(&current.key) {
                Ordering::Less => current.left()?,
                Ordering::Greater => current.right()?,
                Ordering::Equal => return None,
            };
        }
    }

    /// Deletes the node containing the given key from the tree and returns the key. If the tree
    /// does not contain the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// // 8 has two children so its successor, 9, moves up into its place.
    /// assert_eq!(tree.delete(&8), Some(8));
    /// assert_eq!(tree.parent(&7), Some(&9));
    ///
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let slot = Self::slot_of(&mut self.root, key);
        let (removed, case) = Self::unlink(slot)?;
        tracing::trace!(?case, "deleted node");

        self.len -= 1;
        Some(removed)
    }

    /// Visits every key in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwork::tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut sum = 0;
    /// tree.traverse(Order::PostOrder, |key| sum += key);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn traverse<'a>(&'a self, order: Order, mut visit: impl FnMut(&'a K)) {
        self.walk(order, |node| visit(&node.key));
    }

    /// Collects the keys in the given order.
    pub fn keys(&self, order: Order) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        self.traverse(order, |key| keys.push(key));
        keys
    }

    /// The keys in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        self.keys(Order::InOrder)
    }

    /// The keys with every node before its subtrees.
    pub fn pre_order(&self) -> Vec<&K> {
        self.keys(Order::PreOrder)
    }

    /// The keys with every node after its subtrees.
    pub fn post_order(&self) -> Vec<&K> {
        self.keys(Order::PostOrder)
    }

    /// Visits every node in the given order, using an explicit stack in place of recursion.
    fn walk<'a>(&'a self, order: Order, mut visit: impl FnMut(&'a Node<K>)) {
        let mut pending: Vec<Step<'a, K>> =
            self.root.as_deref().map(Step::Expand).into_iter().collect();
        while let Some(step) = pending.pop() {
            let node = match step {
                Step::Visit(node) => {
                    visit(node);
                    continue;
                }
                Step::Expand(node) => node,
            };

            // Pushed in reverse since the stack hands them back last in, first out.
            let left = node.left().map(Step::Expand);
            let right = node.right().map(Step::Expand);
            let this = Some(Step::Visit(node));
            let reversed = match order {
                Order::PreOrder => [right, left, this],
                Order::InOrder => [right, this, left],
                Order::PostOrder => [this, right, left],
            };
            pending.extend(reversed.into_iter().flatten());
        }
    }

    /// Returns the link that holds `key`, or the empty link where it would be inserted.
    fn slot_of<'a>(mut slot: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
    where
        K: Ord,
    {
        loop {
            let order = match slot.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return slot,
            };
            slot = match (order, slot) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, slot) => return slot,
            };
        }
    }

    /// Returns the link holding the smallest key of the subtree in `slot`.
    fn leftmost_slot(mut slot: &mut Link<K>) -> &mut Link<K> {
        while slot.as_ref().map_or(false, |node| node.left.is_some()) {
            slot = match slot {
                Some(node) => &mut node.left,
                None => return slot,
            };
        }
        slot
    }

    /// Removes the node held by `slot`, relinking its children so the subtree stays ordered.
    fn unlink(slot: &mut Link<K>) -> Option<(K, DeleteCase)> {
        let node = slot.as_deref_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // The successor is the leftmost node of the right subtree. It has no left child so
            // removing it is one of the simple cases.
            let (successor, _) = Self::unlink(Self::leftmost_slot(&mut node.right))?;
            let removed = mem::replace(&mut node.key, successor);
            return Some((removed, DeleteCase::TwoChildren));
        }

        let mut node = slot.take()?;
        *slot = node.left.take().or_else(|| node.right.take());
        let case = if slot.is_some() {
            DeleteCase::OneChild
        } else {
            DeleteCase::Leaf
        };

        Some((node.key, case))
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, whose keys are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose keys are all larger than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    fn holds_child(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        let holds = |child: Option<&Self>| child.map_or(false, |child| child.key == *key);
        holds(self.left()) || holds(self.right())
    }
}

/// One unit of work while walking a tree.
enum Step<'a, K> {
    /// Push the node and its subtrees in the order being walked.
    Expand(&'a Node<K>),
    /// Hand the node to the visitor.
    Visit(&'a Node<K>),
}

//! A plain (not self-balancing) BST that can be rebuilt into a balanced shape on demand.
//!
//! Building a tree from a collection sorts and deduplicates the keys and then picks the
//! middle key of every range as the subtree root, so a freshly built tree is always
//! height-balanced. [`Tree::insert`] does no balancing at all, so a run of ascending inserts
//! degrades into a right-leaning chain until [`Tree::rebalance`] is called.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_keys(vec![1, 2, 3, 4, 5, 6, 7]);
//! assert!(tree.is_balanced());
//!
//! tree.insert(8);
//! tree.insert(9);
//! tree.insert(10);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.in_order(), [&1, &2, &3, &4, &5, &6, &7, &8, &9, &10]);
//! ```

use std::cmp;
use std::fmt;
use std::iter;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of keys. Keys smaller than a node go to its left subtree, everything
/// else (including equal keys) goes to its right subtree.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Unlinks nodes one at a time so a long chain doesn't drop recursively.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for Tree<K> {
    // Copies bottom-up from an explicit stack so a long chain doesn't clone recursively.
    fn clone(&self) -> Self {
        let root = self.root().and_then(|root| {
            root.fold_post_order(|node, left, right| {
                Some(Box::new(Node {
                    key: node.key.clone(),
                    left,
                    right,
                }))
            })
        });
        Self {
            root,
            len: self.len,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    // Pre-order plus the ordering invariant pins down the shape without recursing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &self.pre_order())
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_keys(keys)
    }
}

impl<K: Ord> From<Vec<K>> for Tree<K> {
    fn from(keys: Vec<K>) -> Self {
        Self::from_keys(keys)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a height-balanced tree from the given keys. The keys may come in any order and
    /// may contain duplicates; only one copy of each distinct key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(2));
    /// assert_eq!(tree.pre_order(), [&2, &1, &3]);
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let len = keys.len();
        let root = Node::build(&mut keys.into_iter(), len);
        Self { root, len }
    }

    /// Inserts the key without rebalancing. Equal keys are not rejected: a duplicate is
    /// stored as a second node in the right subtree of the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.in_order(), [&1, &2, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                cmp::Ordering::Less => &mut node.left,
                cmp::Ordering::Equal | cmp::Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Returns whether any node in the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                cmp::Ordering::Less => node.left(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Returns whether every node's subtrees differ in height by at most one. An empty tree
    /// is balanced. Use [`Node::is_balanced`] to check a subtree.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Replaces the tree with a freshly built, balanced tree holding the same keys.
    ///
    /// The rebuild goes through the same path as [`Tree::from_keys`], which keeps only one
    /// copy of each distinct key. Duplicates added with [`Tree::insert`] are therefore
    /// dropped here; this is intended.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(vec![1, 2, 3]);
    /// tree.insert(3);
    /// tree.insert(4);
    /// assert_eq!(tree.len(), 5);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.in_order(), [&1, &2, &3, &4]);
    /// ```
    pub fn rebalance(&mut self)
    where
        K: Ord,
    {
        let mut keys = Vec::with_capacity(self.len);
        Node::drain_in_order(self.root.take(), &mut keys);
        *self = Self::from_keys(keys);
    }

    /// The keys in ascending order: left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<&K> {
        self.root().map_or_else(Vec::new, Node::in_order)
    }

    /// The keys in node, left subtree, right subtree order.
    pub fn pre_order(&self) -> Vec<&K> {
        self.root().map_or_else(Vec::new, Node::pre_order)
    }

    /// The keys in left subtree, right subtree, node order.
    pub fn post_order(&self) -> Vec<&K> {
        self.root().map_or_else(Vec::new, Node::post_order)
    }

    /// Calls `visit` on every node breadth-first: level by level from the root, left to
    /// right within a level. Nothing is called for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_keys(1..=6);
    /// let mut keys = Vec::new();
    /// tree.level_order(|node| keys.push(*node.key()));
    ///
    /// assert_eq!(keys, [4, 2, 6, 1, 3, 5]);
    /// ```
    pub fn level_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        if let Some(root) = self.root() {
            root.level_order(visit);
        }
    }

    /// Number of edges on the longest path from the root to a leaf, or -1 for an empty tree.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    /// The root node, if any. Subtree queries start from here.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of nodes, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

/// A single key and up to two children. Each child is owned by exactly one parent.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Builds a balanced subtree from the next `n` keys, which must be sorted. The middle key
    /// becomes the root so the subtree sizes on either side differ by at most one.
    fn build<I>(keys: &mut I, n: usize) -> Link<K>
    where
        I: Iterator<Item = K>,
    {
        if n == 0 {
            return None;
        }

        let mid = n / 2;
        let left = Self::build(keys, mid);
        let key = keys.next()?;
        let right = Self::build(keys, n - mid - 1);

        Some(Box::new(Self { key, left, right }))
    }

    /// Moves every key of the subtree into `out` in ascending order, consuming the nodes.
    fn drain_in_order(root: Link<K>, out: &mut Vec<K>) {
        let mut stack = Vec::new();
        let mut current = root;
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    current = node.right.take();
                    out.push(node.key);
                }
                None => break,
            }
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child, holding strictly smaller keys.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The right child, holding greater or equal keys.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest path from this node down to a leaf. A leaf has a
    /// height of 0.
    pub fn height(&self) -> isize {
        self.levels().count() as isize - 1
    }

    /// Whether the subtree rooted at this node is height-balanced.
    pub fn is_balanced(&self) -> bool {
        self.fold_post_order(|_, left: Option<isize>, right: Option<isize>| {
            let (left, right) = (left.unwrap_or(-1), right.unwrap_or(-1));
            // An unbalanced subtree ends the fold so nothing later can mask it.
            (left.abs_diff(right) <= 1).then_some(1 + cmp::max(left, right))
        })
        .is_some()
    }

    /// Combines the subtree bottom-up with an explicit stack. `combine` sees each node after
    /// both of its children, with their results (`None` for a missing child). Returning
    /// `None` from `combine` stops the fold and makes the whole result `None`.
    fn fold_post_order<'a, T, F>(&'a self, mut combine: F) -> Option<T>
    where
        F: FnMut(&'a Node<K>, Option<T>, Option<T>) -> Option<T>,
    {
        let mut stack = vec![(self, false)];
        let mut done: Vec<T> = Vec::new();
        while let Some((node, children_done)) = stack.pop() {
            if children_done {
                // The left child finished first, so its result sits below the right one.
                let right = node.right.as_ref().and_then(|_| done.pop());
                let left = node.left.as_ref().and_then(|_| done.pop());
                done.push(combine(node, left, right)?);
            } else {
                stack.push((node, true));
                stack.extend(node.right().map(|right| (right, false)));
                stack.extend(node.left().map(|left| (left, false)));
            }
        }
        done.pop()
    }

    /// Each level of the subtree, left to right, starting with this node alone.
    fn levels(&self) -> impl Iterator<Item = Vec<&Node<K>>> + '_ {
        iter::successors(Some(vec![self]), |level| {
            let next: Vec<&Node<K>> = level
                .iter()
                .copied()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
            (!next.is_empty()).then_some(next)
        })
    }

    /// The keys of this subtree in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(self);
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push(&node.key);
            current = node.right();
        }
        out
    }

    /// The keys of this subtree, each node before its children.
    pub fn pre_order(&self) -> Vec<&K> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.right());
            stack.extend(node.left());
        }
        out
    }

    /// The keys of this subtree, each node after its children.
    pub fn post_order(&self) -> Vec<&K> {
        // Node, right, left reversed is left, right, node.
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(&node.key);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        out.reverse();
        out
    }

    /// Calls `visit` on every node of this subtree breadth-first, one level at a time from
    /// this node down and left to right within a level.
    pub fn level_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K>),
    {
        for level in self.levels() {
            level.into_iter().for_each(&mut visit);
        }
    }
}

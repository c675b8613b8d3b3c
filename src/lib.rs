//! A Binary Search Tree that is built balanced, can be unbalanced by plain inserts, and can be
//! rebuilt into a balanced shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is defined recursively using the notion of a `Node`. A `Node` stores a
//! key and may have a left and a right child. The ordering invariant kept here is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key greater than or equal
//!    to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! ## Balance
//!
//! The height of a subtree is the number of edges on its longest path down to a leaf, with an
//! empty subtree having a height of -1. A tree is balanced when, at every `Node`, the heights
//! of its two subtrees differ by at most one. A balanced tree has `O(lg N)` height, which keeps
//! searching and inserting cheap.
//!
//! [`Tree`] does not rebalance itself on insert. Building from a collection (or calling
//! [`Tree::rebalance`]) sorts the keys, removes duplicates, and picks the middle key of every
//! range as the subtree root, which always gives a balanced tree.
//!
//! ## Traversals
//!
//! In-order, pre-order and post-order traversals return the keys in a `Vec`. Level-order
//! traversal instead hands each `Node` to a caller supplied closure, root level first.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

pub use tree::{Node, Tree};

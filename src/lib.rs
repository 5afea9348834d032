//! This crate exposes an ordered map built on a self-balancing Binary Search Tree (BST),
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## AVL Tree
//!
//! Inserting already sorted keys into a plain BST produces a chain whose height is the number
//! of keys. An AVL tree adds a third invariant:
//!
//! 3. For every `Node`, the heights of its left and right subtrees differ by at most one.
//!
//! The difference (left height minus right height) is called the _balance factor_. Each `Node`
//! caches the height of its subtree and, after every insert or delete, the `Node`s on the path
//! back up to the root recompute their heights and restore the invariant with one or two
//! _rotations_. This limits the height of the tree to `O(lg N)` where `N` is the number of nodes.
//!
//! [`AvlMap`] is such a tree, used as a map from keys to values.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod map;
mod node;


pub use error::{Error, Result};
pub use map::AvlMap;

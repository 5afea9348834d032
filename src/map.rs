//! An ordered map backed by an AVL tree.
//!
//! # Examples
//!
//! ```
//! use avl::AvlMap;
//!
//! let mut map = AvlMap::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.get(&1), None);
//!
//! map.insert(1, 2);
//! assert_eq!(map.get(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! map.insert(1, 3);
//! assert_eq!(map.get(&1), Some(&3));
//! assert_eq!(map.len(), 1);
//!
//! // Removing a key returns its value.
//! assert_eq!(map.remove(&1), Some(3));
//! assert_eq!(map.get(&1), None);
//! assert!(map.is_empty());
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::node::{self, Link, Node};

/// A self-balancing Binary Search Tree (specifically, an AVL tree) used as an ordered map.
///
/// Every `insert` and `remove` rebalances the nodes on the path it touched so that, for every
/// node, the heights of its two subtrees differ by at most one. This keeps the height of the tree
/// in `O(lg N)` and with it the cost of every operation.
///
/// The map holds no lock of its own. Share it between threads behind something like an
/// [`RwLock`][std::sync::RwLock] if you need to.
pub struct AvlMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for AvlMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for AvlMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for AvlMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for AvlMap<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> AvlMap<K, V> {
    /// Generate a new, empty `AvlMap`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree. An empty map has a height of 0 and a map with a single
    /// entry has a height of 1.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the entries of the map in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlMap;
    ///
    /// let map: AvlMap<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let entries: Vec<_> = map.iter().collect();
    ///
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterates over the keys of the map in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over the values of the map in ascending order of their keys.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Whether the keys of the map come out of an in-order traversal in strictly increasing
    /// order. This always holds for a correctly implemented map and is meant for verification.
    pub fn is_ordered(&self) -> bool
    where
        K: Ord,
    {
        self.keys().zip(self.keys().skip(1)).all(|(a, b)| a < b)
    }

    /// Whether every node's left and right subtrees differ in height by at most one. This always
    /// holds for a correctly implemented map and is meant for verification.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().map_or(true, Node::is_balanced)
    }

    /// Potentially finds the value associated with the given key in this map. If no entry has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.get(&1), Some(&2));
    /// assert_eq!(map.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.root.as_deref().and_then(|n| n.find(key))
    }

    /// Like [`AvlMap::get`] but hands out a mutable reference to the value.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.root.as_deref_mut().and_then(|n| n.find_mut(key))
    }

    /// Whether the map has an entry for the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_some()
    }

    /// Inserts the given value into the map stored at the given key. Inserting a new value for
    /// an existing key overwrites its value and returns the old one, leaving the shape of the
    /// tree alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    ///
    /// assert_eq!(map.insert(1, 2), None);
    /// assert_eq!(map.get(&1), Some(&2));
    ///
    /// assert_eq!(map.insert(1, 3), Some(2));
    /// assert_eq!(map.get(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let (root, replaced) = node::insert(self.root.take(), key, value);
        self.root = Some(root);

        if replaced.is_none() {
            self.len += 1;
            debug!(len = self.len, height = self.height(), "inserted new key");
        }
        replaced
    }

    /// Replaces the value stored at a key that is already in the map, returning the old value.
    /// Unlike [`AvlMap::insert`], this never creates an entry.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the map has no entry for `key`. The map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{AvlMap, Error};
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.update(&1, 3), Ok(2));
    /// assert_eq!(map.get(&1), Some(&3));
    ///
    /// assert_eq!(map.update(&42, 3), Err(Error::NotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn update(&mut self, key: &K, value: V) -> Result<V>
    where
        K: Ord,
    {
        let slot = self.get_mut(key).ok_or(Error::NotFound)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes the entry with the given key from the map and returns its value. If the map
    /// does not contain the key, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 2);
    ///
    /// assert_eq!(map.remove(&1), Some(2));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let (root, removed) = node::remove(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
            debug!(len = self.len, height = self.height(), "removed key");
        }
        removed
    }
}

impl<'a, K, V> IntoIterator for &'a AvlMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Extend<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for AvlMap<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

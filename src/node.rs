//! The recursive machinery behind [`AvlMap`][crate::AvlMap].
//!
//! Every mutating operation here follows the same pattern: take ownership of a subtree, recurse
//! into the appropriate child, put the (possibly new) child back and then hand the rebalanced
//! subtree root back to the caller. Nothing outside of this module ever sees a subtree halfway
//! through a rotation.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

/// Gets the height of a subtree. An empty subtree has a height of 0.
pub(crate) fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// The balance factor of a subtree. An empty subtree is perfectly balanced.
fn balance_factor<K, V>(link: &Link<K, V>) -> isize {
    link.as_ref().map_or(0, |n| n.balance_factor())
}

/// Inserts `key` and `value` into the subtree, returning the new subtree root and the value that
/// was previously stored at `key` (if any).
pub(crate) fn insert<K, V>(link: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>)
where
    K: Ord,
{
    match link {
        None => {
            trace!("creating leaf node");
            (Node::new_boxed(key, value), None)
        }
        Some(node) => node.insert(key, value),
    }
}

/// Removes `key` from the subtree, returning the new (possibly empty) subtree root and the
/// removed value. Removing a key that isn't present leaves the subtree untouched.
pub(crate) fn remove<K, V>(link: Link<K, V>, key: &K) -> (Link<K, V>, Option<V>)
where
    K: Ord,
{
    match link {
        None => (None, None),
        Some(node) => node.remove(key),
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn into_value(self: Box<Self>) -> V {
        let Node { value, .. } = *self;
        value
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    pub(crate) fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    pub(crate) fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left.as_deref_mut().and_then(|n| n.find_mut(key)),
            Ordering::Equal => Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut().and_then(|n| n.find_mut(key)),
        }
    }

    /// Whether every node in this subtree has a balance factor in `-1..=1`.
    pub(crate) fn is_balanced(&self) -> bool {
        self.balance_factor().abs() <= 1
            && self.left().map_or(true, Self::is_balanced)
            && self.right().map_or(true, Self::is_balanced)
    }

    fn insert(mut self: Box<Self>, key: K, value: V) -> (Box<Self>, Option<V>)
    where
        K: Ord,
    {
        let replaced = match key.cmp(&self.key) {
            Ordering::Less => {
                let (left, replaced) = insert(self.left.take(), key, value);
                self.left = Some(left);
                replaced
            }
            Ordering::Equal => {
                // Same key, new value. The shape of the tree doesn't change.
                let replaced = mem::replace(&mut self.value, value);
                return (self, Some(replaced));
            }
            Ordering::Greater => {
                let (right, replaced) = insert(self.right.take(), key, value);
                self.right = Some(right);
                replaced
            }
        };

        (self.rebalance(), replaced)
    }

    fn remove(mut self: Box<Self>, key: &K) -> (Link<K, V>, Option<V>)
    where
        K: Ord,
    {
        let removed = match key.cmp(&self.key) {
            Ordering::Less => {
                let (left, removed) = remove(self.left.take(), key);
                self.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = remove(self.right.take(), key);
                self.right = right;
                removed
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => {
                    trace!("removing node, promoting right child");
                    return (right, Some(self.into_value()));
                }
                (left, None) => {
                    trace!("removing node, promoting left child");
                    return (left, Some(self.into_value()));
                }
                // With two children we move the in-order successor (the smallest node of the
                // right subtree) into this position and drop the successor's old node instead.
                (Some(left), Some(right)) => {
                    trace!("removing node, promoting in-order successor");
                    let (right, successor) = right.take_min();
                    let Node {
                        key: successor_key,
                        value: successor_value,
                        ..
                    } = *successor;

                    self.left = Some(left);
                    self.right = right;
                    self.key = successor_key;
                    Some(mem::replace(&mut self.value, successor_value))
                }
            },
        };

        (Some(self.rebalance()), removed)
    }

    /// Detaches the smallest node of this subtree. Returns the rebalanced remainder of the
    /// subtree and the detached node, which no longer has any children.
    fn take_min(mut self: Box<Self>) -> (Link<K, V>, Box<Self>) {
        match self.left.take() {
            // The minimum can't have a left child so its right child takes its place.
            None => {
                let right = self.right.take();
                self.height = 1;
                (right, self)
            }
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Some(self.rebalance()), min)
            }
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically. Used to rebalance the tree when the left child is too tall. Without a left
    /// child there is nothing to rotate and `self` is returned as is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///         old_root                 new_root
    ///          /     \                 /     \
    ///     new_root    z   rotate ->   x    old_root
    ///      /   \                            /   \
    ///     x     y                          y     z
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };

        self.left = new_root.right.take();
        // The old root is now a child so its height has to be fixed first.
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// The mirror image of [`Node::rotate_right`].
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Recomputes the height of `self` and applies at most one of the four AVL rebalancing
    /// cases, returning the new root of this subtree.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();

        let root = match (
            self.balance_factor(),
            balance_factor(&self.left),
            balance_factor(&self.right),
        ) {
            (factor, left, _) if factor > 1 && left >= 0 => {
                trace!(case = "LL", "rebalancing subtree");
                self.rotate_right()
            }
            (factor, _, right) if factor < -1 && right <= 0 => {
                trace!(case = "RR", "rebalancing subtree");
                self.rotate_left()
            }
            (factor, _, _) if factor > 1 => {
                trace!(case = "LR", "rebalancing subtree");
                self.left = self.left.take().map(Self::rotate_left);
                self.rotate_right()
            }
            (factor, _, _) if factor < -1 => {
                trace!(case = "RL", "rebalancing subtree");
                self.right = self.right.take().map(Self::rotate_right);
                self.rotate_left()
            }
            _ => self,
        };

        if cfg!(debug_assertions) {
            let left_height = height(&root.left);
            let right_height = height(&root.right);
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }

        root
    }
}

//! In-order iteration over an [`AvlMap`][crate::AvlMap].

use std::iter::FusedIterator;

use crate::node::Node;

/// An iterator over the entries of an [`AvlMap`][crate::AvlMap], in ascending key order.
///
/// Created by [`AvlMap::iter`][crate::AvlMap::iter].
pub struct Iter<'a, K, V> {
    /// The nodes whose left subtrees have been visited but which haven't been yielded yet. The
    /// next node to yield is on top.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use crate::AvlMap;

    #[test]
    fn empty() {
        let map: AvlMap<i32, i32> = AvlMap::new();
        let mut iter = map.iter();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn yields_keys_in_order_with_exact_size() {
        let map: AvlMap<_, _> = [9, 2, 7, 4, 5, 6, 3, 8, 1].iter().map(|&k| (k, k * 10)).collect();
        let mut iter = map.iter();

        assert_eq!(iter.len(), 9);
        assert_eq!(iter.next(), Some((&1, &10)));
        assert_eq!(iter.len(), 8);

        let rest: Vec<_> = iter.map(|(k, _)| *k).collect();
        assert_eq!(rest, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }
}

use avl::AvlMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

use crate::Op;

/// Applies a set of operations to a map and a hashmap.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut AvlMap<K, V>, reference: &mut HashMap<K, V>) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                map.insert(k.clone(), v.clone());
                reference.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                if map.remove(k) != reference.remove(k) {
                    return false;
                }
            }
        }

        if !(map.is_ordered() && map.is_balanced() && map.len() == reference.len()) {
            return false;
        }
    }

    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = AvlMap::new();
        let mut reference = HashMap::new();

        do_ops(&ops, &mut map, &mut reference)
            && reference.keys().all(|key| map.get(key) == reference.get(key))
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut map = AvlMap::new();
        for x in &xs {
            map.insert(*x, *x);
        }

        xs.iter().all(|x| map.get(x) == Some(x) && map.contains_key(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut map = AvlMap::new();
        for x in &xs {
            map.insert(*x, *x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| map.get(x).is_none() && !map.contains_key(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut map = AvlMap::new();
        for x in &xs {
            map.insert(*x, *x);
        }
        for delete in &deletes {
            map.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| map.get(x).is_none())
            && still_present.iter().all(|x| map.get(x).is_some())
    }

    fn len_counts_distinct_keys(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut map = AvlMap::new();
        let mut distinct = HashSet::new();
        for x in xs {
            map.insert(x, ());
            distinct.insert(x);
        }
        for delete in &deletes {
            map.remove(delete);
            distinct.remove(delete);
        }

        map.len() == distinct.len() && map.is_empty() == distinct.is_empty()
    }

    fn iterates_in_sorted_order(xs: Vec<i16>) -> bool {
        let map: AvlMap<_, _> = xs.iter().map(|x| (*x, ())).collect();

        let mut expected = xs;
        expected.sort_unstable();
        expected.dedup();

        map.keys().copied().eq(expected) && map.iter().len() == map.len()
    }

    fn remove_all_in_any_order_empties_the_map(xs: Vec<i16>, seed: u64) -> bool {
        let mut map = AvlMap::new();
        for x in &xs {
            map.insert(*x, *x);
        }

        let mut order: Vec<_> = xs.into_iter().collect::<HashSet<_>>().into_iter().collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));

        for x in &order {
            if map.remove(x) != Some(*x) || !map.is_balanced() || !map.is_ordered() {
                return false;
            }
        }

        map.is_empty() && map.height() == 0 && map.iter().next().is_none()
    }
}

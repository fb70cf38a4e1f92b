use std::collections::BTreeMap;

use avl_tree::AvlTreeMap;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates random keys in a range small enough to force collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::GetKeyValue),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of insert/remove/get operations on both
    /// AvlTreeMap and BTreeMap and asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let avl_result = avl_map.insert(*k, *v);
                    let bt_result = bt_map.insert(*k, *v);
                    prop_assert_eq!(avl_result, bt_result, "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let avl_result = avl_map.remove(k);
                    let bt_result = bt_map.remove(k);
                    prop_assert_eq!(avl_result, bt_result, "remove({})", k);
                }
                MapOp::Get(k) => {
                    let avl_result = avl_map.get(k);
                    let bt_result = bt_map.get(k);
                    prop_assert_eq!(avl_result, bt_result, "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    let avl_result = avl_map.contains_key(k);
                    let bt_result = bt_map.contains_key(k);
                    prop_assert_eq!(avl_result, bt_result, "contains_key({})", k);
                }
                MapOp::GetKeyValue(k) => {
                    let avl_result = avl_map.get_key_value(k);
                    let bt_result = bt_map.get_key_value(k);
                    prop_assert_eq!(avl_result, bt_result, "get_key_value({})", k);
                }
                MapOp::FirstKeyValue => {
                    let avl_result = avl_map.first_key_value();
                    let bt_result = bt_map.first_key_value();
                    prop_assert_eq!(avl_result, bt_result, "first_key_value");
                }
                MapOp::LastKeyValue => {
                    let avl_result = avl_map.last_key_value();
                    let bt_result = bt_map.last_key_value();
                    prop_assert_eq!(avl_result, bt_result, "last_key_value");
                }
                MapOp::PopFirst => {
                    let avl_result = avl_map.pop_first();
                    let bt_result = bt_map.pop_first();
                    prop_assert_eq!(avl_result, bt_result, "pop_first");
                }
                MapOp::PopLast => {
                    let avl_result = avl_map.pop_last();
                    let bt_result = bt_map.pop_last();
                    prop_assert_eq!(avl_result, bt_result, "pop_last");
                }
            }
            prop_assert_eq!(avl_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(avl_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
        }
    }

    /// Tests that iteration order matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            avl_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        // Forward iteration
        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "iter() mismatch");

        // Reverse iteration
        let avl_rev: Vec<_> = avl_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let bt_rev: Vec<_> = bt_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_rev, &bt_rev, "iter().rev() mismatch");

        // Keys
        let avl_keys: Vec<_> = avl_map.keys().copied().collect();
        let bt_keys: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&avl_keys, &bt_keys, "keys() mismatch");

        // Values
        let avl_vals: Vec<_> = avl_map.values().copied().collect();
        let bt_vals: Vec<_> = bt_map.values().copied().collect();
        prop_assert_eq!(&avl_vals, &bt_vals, "values() mismatch");

        // into_iter
        let avl_into: Vec<_> = avl_map.clone().into_iter().collect();
        let bt_into: Vec<_> = bt_map.clone().into_iter().collect();
        prop_assert_eq!(&avl_into, &bt_into, "into_iter() mismatch");

        // into_iter backwards
        let avl_into_rev: Vec<_> = avl_map.clone().into_iter().rev().collect();
        let bt_into_rev: Vec<_> = bt_map.clone().into_iter().rev().collect();
        prop_assert_eq!(&avl_into_rev, &bt_into_rev, "into_iter().rev() mismatch");

        // into_keys
        let avl_into_keys: Vec<_> = avl_map.clone().into_keys().collect();
        let bt_into_keys: Vec<_> = bt_map.clone().into_keys().collect();
        prop_assert_eq!(&avl_into_keys, &bt_into_keys, "into_keys() mismatch");

        // into_values
        let avl_into_vals: Vec<_> = avl_map.clone().into_values().collect();
        let bt_into_vals: Vec<_> = bt_map.clone().into_values().collect();
        prop_assert_eq!(&avl_into_vals, &bt_into_vals, "into_values() mismatch");
    }

    /// Tests ExactSizeIterator and DoubleEndedIterator behavior.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();

        let iter = avl_map.iter();
        let len = iter.len();
        prop_assert_eq!(len, avl_map.len(), "ExactSizeIterator len mismatch");

        // Alternating front/back should yield every element exactly once.
        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut iter = avl_map.iter();
        let mut toggle = true;
        loop {
            if toggle {
                if let Some(item) = iter.next() {
                    from_front.push(item);
                } else {
                    break;
                }
            } else if let Some(item) = iter.next_back() {
                from_back.push(item);
            } else {
                break;
            }
            toggle = !toggle;
        }
        prop_assert_eq!(from_front.len() + from_back.len(), avl_map.len());

        // Stitching the two halves together reproduces the sorted sequence.
        from_back.reverse();
        from_front.extend(from_back);
        let expected: Vec<_> = avl_map.iter().collect();
        prop_assert_eq!(from_front, expected, "alternating traversal mismatch");
    }

    /// Tests get_mut against BTreeMap.
    #[test]
    fn get_mut_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        keys_to_mutate in proptest::collection::vec(key_strategy(), 100),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            avl_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        for k in &keys_to_mutate {
            if let Some(v) = avl_map.get_mut(k) {
                *v += 1;
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v += 1;
            }
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "get_mut mismatch");
    }

    /// Tests that clear produces an empty map.
    #[test]
    fn clear_empties_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        avl_map.clear();
        prop_assert!(avl_map.is_empty());
        prop_assert_eq!(avl_map.len(), 0);
        prop_assert_eq!(avl_map.iter().count(), 0);
    }

    /// Tests remove_entry matches BTreeMap.
    #[test]
    fn remove_entry_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        keys_to_remove in proptest::collection::vec(key_strategy(), TEST_SIZE / 5),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for k in &keys_to_remove {
            let avl_result = avl_map.remove_entry(k);
            let bt_result = bt_map.remove_entry(k);
            prop_assert_eq!(avl_result, bt_result, "remove_entry({})", k);
        }

        prop_assert_eq!(avl_map.len(), bt_map.len());
    }

    /// Tests FromIterator.
    #[test]
    fn from_iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "FromIterator mismatch");
    }

    /// Tests Clone produces an equal map.
    #[test]
    fn clone_produces_equal_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let cloned = avl_map.clone();

        prop_assert_eq!(avl_map.len(), cloned.len());
        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let cl_items: Vec<_> = cloned.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &cl_items, "clone content mismatch");
    }

    /// Tests PartialEq / Eq.
    #[test]
    fn eq_matches_btreemap(
        entries_a in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entries_b in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let avl_a: AvlTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let avl_b: AvlTreeMap<i64, i64> = entries_b.iter().cloned().collect();
        let bt_a: BTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let bt_b: BTreeMap<i64, i64> = entries_b.iter().cloned().collect();

        prop_assert_eq!(avl_a == avl_b, bt_a == bt_b, "equality mismatch");
    }

    /// Tests Ord / PartialOrd.
    #[test]
    fn ord_matches_btreemap(
        entries_a in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entries_b in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let avl_a: AvlTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let avl_b: AvlTreeMap<i64, i64> = entries_b.iter().cloned().collect();
        let bt_a: BTreeMap<i64, i64> = entries_a.iter().cloned().collect();
        let bt_b: BTreeMap<i64, i64> = entries_b.iter().cloned().collect();

        prop_assert_eq!(avl_a.cmp(&avl_b), bt_a.cmp(&bt_b), "Ord mismatch");
        prop_assert_eq!(avl_a.partial_cmp(&avl_b), bt_a.partial_cmp(&bt_b), "PartialOrd mismatch");
    }

    /// Tests Index<&Q> returns the same values as BTreeMap for present keys.
    #[test]
    fn index_by_key_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for (k, _) in &entries {
            prop_assert_eq!(avl_map[k], bt_map[k], "Index[&{}] mismatch", k);
        }
    }
}

// ─── Entry API ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests the Entry API matches BTreeMap behavior.
    #[test]
    fn entry_api_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        entry_keys in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for k in &entry_keys {
            let avl_val = *avl_map.entry(*k).or_insert(999);
            let bt_val = *bt_map.entry(*k).or_insert(999);
            prop_assert_eq!(avl_val, bt_val, "entry({}).or_insert", k);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "entry API content mismatch");
    }

    /// Tests and_modify + or_insert pattern.
    #[test]
    fn entry_and_modify_or_insert(
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for k in &keys {
            avl_map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
            bt_map.entry(*k).and_modify(|v| *v += 1).or_insert(1);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "and_modify/or_insert mismatch");
    }

    /// Tests or_insert_with matches BTreeMap.
    #[test]
    fn entry_or_insert_with(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for k in &keys {
            let avl_val = *avl_map.entry(*k).or_insert_with(|| k.wrapping_mul(2));
            let bt_val = *bt_map.entry(*k).or_insert_with(|| k.wrapping_mul(2));
            prop_assert_eq!(avl_val, bt_val, "or_insert_with({}) value mismatch", k);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "or_insert_with content mismatch");
    }

    /// Tests or_insert_with_key matches BTreeMap.
    #[test]
    fn entry_or_insert_with_key(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for k in &keys {
            let avl_val = *avl_map.entry(*k).or_insert_with_key(|key| key.wrapping_add(100));
            let bt_val = *bt_map.entry(*k).or_insert_with_key(|key| key.wrapping_add(100));
            prop_assert_eq!(avl_val, bt_val, "or_insert_with_key({}) value mismatch", k);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "or_insert_with_key content mismatch");
    }

    /// Tests or_default matches BTreeMap.
    #[test]
    fn entry_or_default(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        keys in proptest::collection::vec(key_strategy(), TEST_SIZE / 2),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for k in &keys {
            let avl_val = *avl_map.entry(*k).or_default();
            let bt_val = *bt_map.entry(*k).or_default();
            prop_assert_eq!(avl_val, bt_val, "or_default({}) value mismatch", k);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "or_default content mismatch");
    }

    /// Tests OccupiedEntry insert / remove against BTreeMap.
    #[test]
    fn occupied_entry_insert_remove(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        probes in proptest::collection::vec(key_strategy(), 200),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        for (i, k) in probes.iter().enumerate() {
            match (avl_map.entry(*k), bt_map.entry(*k)) {
                (avl_tree::avl_map::Entry::Occupied(mut avl_e), std::collections::btree_map::Entry::Occupied(mut bt_e)) => {
                    if i % 2 == 0 {
                        prop_assert_eq!(avl_e.insert(-1), bt_e.insert(-1), "occupied insert({})", k);
                    } else {
                        prop_assert_eq!(avl_e.remove_entry(), bt_e.remove_entry(), "occupied remove_entry({})", k);
                    }
                }
                (avl_tree::avl_map::Entry::Vacant(avl_e), std::collections::btree_map::Entry::Vacant(_)) => {
                    prop_assert_eq!(avl_e.into_key(), *k, "vacant into_key({})", k);
                }
                _ => prop_assert!(false, "entry occupancy mismatch for key {}", k),
            }
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "occupied entry content mismatch");
    }
}

// ─── Extend and iter_mut ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests Extend matches BTreeMap.
    #[test]
    fn extend_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
        extra in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE / 2),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().cloned().collect();

        avl_map.extend(extra.iter().cloned());
        bt_map.extend(extra.iter().cloned());

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "extend mismatch");
    }

    /// Tests iter_mut produces the same sequence and allows mutation.
    #[test]
    fn iter_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        // Mutate all values
        for (_, v) in avl_map.iter_mut() {
            *v = v.wrapping_add(1);
        }
        for (_, v) in bt_map.iter_mut() {
            *v = v.wrapping_add(1);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "iter_mut mismatch");
    }

    /// Tests values_mut produces the same result.
    #[test]
    fn values_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().cloned().collect();

        for v in avl_map.values_mut() {
            *v = v.wrapping_mul(2);
        }
        for v in bt_map.values_mut() {
            *v = v.wrapping_mul(2);
        }

        let avl_items: Vec<_> = avl_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &bt_items, "values_mut mismatch");
    }
}

// ─── Hash consistency ────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests that equal maps produce equal hashes.
    #[test]
    fn hash_consistent_for_equal_maps(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let avl_map1: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();
        let avl_map2: AvlTreeMap<i64, i64> = entries.iter().cloned().collect();

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        avl_map1.hash(&mut h1);
        avl_map2.hash(&mut h2);

        prop_assert_eq!(h1.finish(), h2.finish(), "equal maps should have equal hashes");
    }
}

// ─── Deterministic behavior tests ────────────────────────────────────────────

mod deterministic {
    use avl_tree::AvlTreeMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn insertion_sequence_is_sorted() {
        let mut map = AvlTreeMap::new();
        for key in [10, 20, 5, 4, 15] {
            map.insert(key, key * 10);
        }

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, [4, 5, 10, 15, 20]);
        assert_eq!(map.len(), 5);
        assert_eq!(map.first_key_value(), Some((&4, &40)));
        assert_eq!(map.last_key_value(), Some((&20, &200)));
    }

    #[test]
    fn remove_root_promotes_successor() {
        let mut map: AvlTreeMap<i32, &str> =
            [(30, "c"), (20, "b"), (40, "d"), (10, "a"), (25, "bb"), (35, "cc"), (50, "e")].into();

        assert_eq!(map.remove(&30), Some("c"));
        assert_eq!(map.get(&30), None);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, [10, 20, 25, 35, 40, 50]);
    }

    #[test]
    fn remove_absent_key_leaves_map_untouched() {
        let mut map: AvlTreeMap<i32, i32> = [(10, 1), (20, 2), (5, 3)].into();
        let before: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();

        assert_eq!(map.remove(&7), None);
        let after: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        assert_eq!(before, after);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn single_element_lifecycle() {
        let mut map = AvlTreeMap::new();
        assert_eq!(map.insert(42, "answer"), None);
        assert_eq!(map.len(), 1);

        assert_eq!(map.remove(&42), Some("answer"));
        assert!(map.is_empty());
        assert_eq!(map.first_key_value(), None);
        assert_eq!(map.last_key_value(), None);
        assert_eq!(map.iter().next(), None);
    }

    #[test]
    fn debug_formats_as_map() {
        let map: AvlTreeMap<i32, &str> = [(2, "b"), (1, "a")].into();
        assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_panics_on_missing_key() {
        let map: AvlTreeMap<i32, i32> = [(1, 10)].into();
        let _ = map[&2];
    }
}

// HashTable property tests against the public API.
//
// Property 1: dump round-trip.
//  - Insert N distinct keys with arbitrary values.
//  - Invariant: iter() yields exactly N pairs, each key once, matching the
//    inserted set; dump() renders one line per pair.
//
// Property 2: growth preserves bindings.
//  - Insert keys one at a time, recording capacity before and after.
//  - Invariant: capacity only changes by doubling, and every key inserted so
//    far stays retrievable after each resize.
//
// Property 3: delete accounting.
//  - Delete a random subset of inserted keys, plus absent keys.
//  - Invariant: len drops by exactly one per successful delete and is
//    unchanged by failed ones.
use fnv_chain_table::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

proptest! {
    #[test]
    fn prop_dump_round_trip(pairs in proptest::collection::btree_map("[a-z0-9]{1,8}", any::<i32>(), 0..150)) {
        let mut m = HashTable::new();
        for (k, v) in &pairs {
            m.set(k, *v);
        }
        let dumped: Vec<(String, i32)> = m.iter().map(|(k, v)| (k.to_string(), v)).collect();
        prop_assert_eq!(dumped.len(), pairs.len());
        let as_map: BTreeMap<String, i32> = dumped.into_iter().collect();
        prop_assert_eq!(&as_map, &pairs);
        prop_assert_eq!(m.dump().to_string().lines().count(), pairs.len());
    }

    #[test]
    fn prop_growth_preserves_bindings(keys in proptest::collection::btree_set("[a-z]{1,6}", 1..200)) {
        let mut m = HashTable::new();
        let mut inserted: Vec<&String> = Vec::new();
        for (i, k) in keys.iter().enumerate() {
            let before = m.capacity();
            m.set(k, i as i32);
            inserted.push(k);
            let after = m.capacity();
            prop_assert!(after == before || after == before * 2);
            if after != before {
                for (j, old) in inserted.iter().enumerate() {
                    prop_assert_eq!(m.get(old.as_str()), Some(j as i32));
                }
            }
        }
        prop_assert_eq!(m.len(), keys.len());
    }

    #[test]
    fn prop_delete_accounting(
        keys in proptest::collection::btree_set("[a-z]{1,4}", 1..60),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..60),
        absent in proptest::collection::vec("[A-Z]{1,4}", 0..10),
    ) {
        let mut m = HashTable::new();
        let keys: Vec<String> = keys.into_iter().collect();
        for k in &keys {
            m.set(k, 0);
        }
        let mut removed: BTreeSet<String> = BTreeSet::new();
        for p in picks {
            let k = p.get(&keys);
            let before = m.len();
            let found = m.delete(k);
            prop_assert_eq!(found, removed.insert(k.clone()));
            prop_assert_eq!(m.len(), if found { before - 1 } else { before });
            prop_assert!(!m.contains_key(k));
        }
        for k in absent {
            let before = m.len();
            prop_assert!(!m.delete(&k));
            prop_assert_eq!(m.len(), before);
        }
        prop_assert_eq!(m.len(), keys.len() - removed.len());
    }
}

//! Property tests for `CanonicalStore` balance.
//!
//! Random insertion orders (with duplicates) must always leave a valid
//! red-black tree whose in-order traversal is the sorted, deduplicated
//! input and whose height stays within `2 * log2(n + 1)`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Proptest macros and height bounds use float math"
)]

use ipr_ir::{CanonicalStore, KeyedStore, SequenceStore};
use proptest::prelude::*;

fn build(values: &[u32]) -> CanonicalStore<u32> {
    let mut store = CanonicalStore::new();
    for value in values {
        store.insert(value, |key: &u32, entry: &u32| key.cmp(entry), |&key| key);
    }
    store
}

fn height_bound(len: usize) -> usize {
    (2.0 * ((len + 1) as f64).log2()).floor() as usize
}

proptest! {
    #[test]
    fn random_orders_stay_balanced(values in prop::collection::vec(0u32..500, 0..400)) {
        let store = build(&values);
        prop_assert!(store.check().is_ok(), "{:?}", store.check());

        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        let actual: Vec<u32> = store.iter().copied().collect();
        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(store.len(), expected.len());
        prop_assert!(store.height() <= height_bound(store.len()));
    }

    #[test]
    fn every_inserted_value_is_found(values in prop::collection::vec(any::<u32>(), 1..200)) {
        let store = build(&values);
        for value in &values {
            let found = store.find(value, |key: &u32, entry: &u32| key.cmp(entry));
            prop_assert_eq!(found, Some(value));
        }
    }

    #[test]
    fn keyed_store_hands_out_first_value(keys in prop::collection::vec(0u16..64, 0..200)) {
        let mut store: KeyedStore<u16, usize> = KeyedStore::new();
        let mut first_seen = std::collections::BTreeMap::new();
        for (position, key) in keys.iter().enumerate() {
            let (value, fresh) = store.get_or_insert_with(key, || position);
            let expected = *first_seen.entry(*key).or_insert(position);
            prop_assert_eq!(value, expected);
            prop_assert_eq!(fresh, expected == position);
        }
        prop_assert!(store.tree().check().is_ok());
    }

    #[test]
    fn sequence_store_is_canonical(
        seqs in prop::collection::vec(prop::collection::vec(0u8..4, 0..4), 0..60),
    ) {
        let mut store: SequenceStore<u8> = SequenceStore::new();
        for seq in &seqs {
            let (slot, _) = store.intern(seq);
            prop_assert_eq!(store.get(slot), seq.as_slice());
            prop_assert_eq!(store.intern(seq), (slot, false));
        }
        prop_assert!(store.tree().check().is_ok());
    }
}

//! Typed facades over `CanonicalStore`.

use super::{CanonicalStore, Slot};

/// Entry of a `KeyedStore`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyed<K, V> {
    pub key: K,
    pub value: V,
}

/// Canonical map from structural keys to handles.
///
/// Keys are ordered by their `Ord` impl; for enums that is the discriminant
/// first, then the payload, which is exactly the structural order a
/// hash-consing table needs.
pub struct KeyedStore<K, V> {
    tree: CanonicalStore<Keyed<K, V>>,
}

impl<K: Ord + Clone, V: Copy> KeyedStore<K, V> {
    pub const fn new() -> Self {
        KeyedStore {
            tree: CanonicalStore::new(),
        }
    }

    /// Handle stored for `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.tree
            .find(key, |key, entry| key.cmp(&entry.key))
            .map(|entry| entry.value)
    }

    /// Handle stored for `key`, creating it with `make` on first use.
    ///
    /// Returns the handle and whether `make` ran.
    pub fn get_or_insert_with(&mut self, key: &K, make: impl FnOnce() -> V) -> (V, bool) {
        let (slot, fresh) = self.tree.insert_slot(
            key,
            |key, entry| key.cmp(&entry.key),
            |key| Keyed {
                key: key.clone(),
                value: make(),
            },
        );
        (self.tree.get(slot).value, fresh)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, V)> + '_ {
        self.tree.iter().map(|entry| (&entry.key, entry.value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Underlying tree, for invariant checks.
    #[inline]
    pub fn tree(&self) -> &CanonicalStore<Keyed<K, V>> {
        &self.tree
    }
}

impl<K: Ord + Clone, V: Copy> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical sequences: equal slices share one slot.
///
/// The empty sequence is interned on construction at `SequenceStore::EMPTY`.
pub struct SequenceStore<T> {
    tree: CanonicalStore<Box<[T]>>,
}

impl<T: Ord + Clone> SequenceStore<T> {
    /// Slot of the empty sequence.
    pub const EMPTY: Slot = Slot::from_raw(0);

    pub fn new() -> Self {
        let mut store = SequenceStore {
            tree: CanonicalStore::new(),
        };
        let _ = store.intern(&[]);
        store
    }

    /// Slot of the sequence equal to `items`, and whether it is new.
    pub fn intern(&mut self, items: &[T]) -> (Slot, bool) {
        self.tree.insert_slot(
            items,
            |items, entry| items.cmp(&**entry),
            |items| items.to_vec().into_boxed_slice(),
        )
    }

    /// Slot of `items` if it was already interned.
    pub fn find(&self, items: &[T]) -> Option<Slot> {
        self.tree.find_slot(items, |items, entry| items.cmp(&**entry))
    }

    /// Elements of the sequence at `slot`.
    ///
    /// # Panics
    /// Panics if `slot` was not issued by this store.
    #[inline]
    pub fn get(&self, slot: Slot) -> &[T] {
        self.tree.get(slot)
    }

    /// Number of distinct sequences, the empty one included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[inline]
    pub fn tree(&self) -> &CanonicalStore<Box<[T]>> {
        &self.tree
    }
}

impl<T: Ord + Clone> Default for SequenceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

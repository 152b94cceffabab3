//! Hash-consing storage.
//!
//! `CanonicalStore` is an append-only red-black tree whose nodes live in an
//! index slab. Lookups and insertions descend with a caller-supplied
//! comparator, so one tree type serves every structural key; the tree never
//! deletes, and a `Slot` stays valid for the life of the store.
//!
//! # Invariants
//!
//! - The root is black.
//! - No red node has a red child.
//! - Every root-to-nil path crosses the same number of black nodes.
//!
//! `check` verifies all three (plus parent-link consistency).

mod keyed;

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::TreeViolation;

pub use keyed::{Keyed, KeyedStore, SequenceStore};

crate::define_index! {
    /// Position of an entry in a `CanonicalStore`.
    pub struct Slot;
}

/// Red-black node color.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// Child direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub const fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

struct RbNode<T> {
    value: T,
    color: Color,
    parent: Option<Slot>,
    left: Option<Slot>,
    right: Option<Slot>,
}

impl<T> RbNode<T> {
    #[inline]
    fn child(&self, dir: Dir) -> Option<Slot> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    #[inline]
    fn set_child(&mut self, dir: Dir, child: Option<Slot>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
    }
}

/// Append-only red-black tree over an index slab.
///
/// Entries are ordered by whatever comparator the caller passes to `find`
/// and `insert`; every call on one store must use the same total order.
/// An inconsistent comparator misplaces entries but never panics.
pub struct CanonicalStore<T> {
    nodes: Vec<RbNode<T>>,
    root: Option<Slot>,
}

impl<T> CanonicalStore<T> {
    pub const fn new() -> Self {
        CanonicalStore {
            nodes: Vec::new(),
            root: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn root(&self) -> Option<Slot> {
        self.root
    }

    #[inline]
    fn node(&self, slot: Slot) -> &RbNode<T> {
        &self.nodes[slot.index()]
    }

    #[inline]
    fn node_mut(&mut self, slot: Slot) -> &mut RbNode<T> {
        &mut self.nodes[slot.index()]
    }

    /// Value stored at `slot`.
    ///
    /// # Panics
    /// Panics if `slot` was not issued by this store.
    #[inline]
    pub fn get(&self, slot: Slot) -> &T {
        &self.node(slot).value
    }

    #[inline]
    pub fn color(&self, slot: Slot) -> Color {
        self.node(slot).color
    }

    #[inline]
    pub fn parent(&self, slot: Slot) -> Option<Slot> {
        self.node(slot).parent
    }

    #[inline]
    pub fn child(&self, slot: Slot, dir: Dir) -> Option<Slot> {
        self.node(slot).child(dir)
    }

    /// Slot of the entry equal to `key` under `cmp`.
    pub fn find_slot<K: ?Sized>(&self, key: &K, cmp: impl Fn(&K, &T) -> Ordering) -> Option<Slot> {
        let mut cursor = self.root;
        while let Some(slot) = cursor {
            let node = self.node(slot);
            cursor = match cmp(key, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(slot),
            };
        }
        None
    }

    /// Entry equal to `key` under `cmp`.
    pub fn find<K: ?Sized>(&self, key: &K, cmp: impl Fn(&K, &T) -> Ordering) -> Option<&T> {
        self.find_slot(key, cmp).map(|slot| self.get(slot))
    }

    /// Find the entry equal to `key`, or build and link a new one.
    ///
    /// Returns the entry's slot and whether it was created by this call.
    /// `build` runs only on a miss.
    pub fn insert_slot<K: ?Sized>(
        &mut self,
        key: &K,
        cmp: impl Fn(&K, &T) -> Ordering,
        build: impl FnOnce(&K) -> T,
    ) -> (Slot, bool) {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(slot) = cursor {
            let node = self.node(slot);
            let dir = match cmp(key, &node.value) {
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
                Ordering::Equal => return (slot, false),
            };
            parent = Some((slot, dir));
            cursor = node.child(dir);
        }

        let slot = Slot::from_index(self.nodes.len());
        self.nodes.push(RbNode {
            value: build(key),
            color: Color::Red,
            parent: parent.map(|(parent, _)| parent),
            left: None,
            right: None,
        });
        match parent {
            Some((parent, dir)) => self.node_mut(parent).set_child(dir, Some(slot)),
            None => self.root = Some(slot),
        }
        self.rebalance(slot);
        (slot, true)
    }

    /// Find the entry equal to `key`, or build and link a new one.
    pub fn insert<K: ?Sized>(
        &mut self,
        key: &K,
        cmp: impl Fn(&K, &T) -> Ordering,
        build: impl FnOnce(&K) -> T,
    ) -> &T {
        let (slot, _) = self.insert_slot(key, cmp, build);
        self.get(slot)
    }

    #[inline]
    fn is_red(&self, slot: Option<Slot>) -> bool {
        slot.is_some_and(|slot| self.node(slot).color == Color::Red)
    }

    /// Restore the color invariants after linking the red leaf `slot`.
    fn rebalance(&mut self, mut slot: Slot) {
        while let Some(mut parent) = self.node(slot).parent {
            if self.node(parent).color == Color::Black {
                break;
            }
            // A red parent is never the root.
            let Some(grand) = self.node(parent).parent else {
                break;
            };
            let side = if self.node(grand).left == Some(parent) {
                Dir::Left
            } else {
                Dir::Right
            };
            let uncle = self.node(grand).child(side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                self.node_mut(parent).color = Color::Black;
                self.node_mut(uncle).color = Color::Black;
                self.node_mut(grand).color = Color::Red;
                slot = grand;
                continue;
            }

            if self.node(parent).child(side.opposite()) == Some(slot) {
                self.rotate(parent, side);
                slot = parent;
                parent = match self.node(slot).parent {
                    Some(lifted) => lifted,
                    None => break,
                };
            }
            self.node_mut(parent).color = Color::Black;
            self.node_mut(grand).color = Color::Red;
            self.rotate(grand, side.opposite());
        }

        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    /// Rotate around `pivot` toward `dir`: the child on the opposite side
    /// takes the pivot's place and the pivot becomes its `dir` child.
    fn rotate(&mut self, pivot: Slot, dir: Dir) {
        let Some(lifted) = self.node(pivot).child(dir.opposite()) else {
            return;
        };
        let inner = self.node(lifted).child(dir);
        self.node_mut(pivot).set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        let parent = self.node(pivot).parent;
        self.node_mut(lifted).parent = parent;
        match parent {
            None => self.root = Some(lifted),
            Some(parent) => {
                let side = if self.node(parent).left == Some(pivot) {
                    Dir::Left
                } else {
                    Dir::Right
                };
                self.node_mut(parent).set_child(side, Some(lifted));
            }
        }

        self.node_mut(lifted).set_child(dir, Some(pivot));
        self.node_mut(pivot).parent = Some(lifted);
    }

    /// Verify the red-black invariants, returning the black height.
    ///
    /// Nil leaves do not count toward the height; an empty store has
    /// height zero.
    pub fn check(&self) -> Result<usize, TreeViolation> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        if self.node(root).color == Color::Red {
            return Err(TreeViolation::RedRoot);
        }
        if self.node(root).parent.is_some() {
            return Err(TreeViolation::BrokenParent { slot: root });
        }
        self.check_subtree(root)
    }

    fn check_subtree(&self, slot: Slot) -> Result<usize, TreeViolation> {
        let node = self.node(slot);
        let mut heights = [0; 2];
        for (height, dir) in heights.iter_mut().zip([Dir::Left, Dir::Right]) {
            let Some(child) = node.child(dir) else {
                continue;
            };
            let child_node = self.node(child);
            if child_node.parent != Some(slot) {
                return Err(TreeViolation::BrokenParent { slot: child });
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(TreeViolation::RedRed { slot });
            }
            *height = self.check_subtree(child)?;
        }
        let [left, right] = heights;
        if left != right {
            return Err(TreeViolation::BlackHeight { slot, left, right });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_height(root))
    }

    fn subtree_height(&self, slot: Slot) -> usize {
        let node = self.node(slot);
        let left = node.left.map_or(0, |left| self.subtree_height(left));
        let right = node.right.map_or(0, |right| self.subtree_height(right));
        1 + left.max(right)
    }

    /// In-order traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            store: self,
            stack: SmallVec::new(),
        };
        iter.descend(self.root);
        iter
    }
}

impl<T> Default for CanonicalStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over a `CanonicalStore`.
pub struct Iter<'a, T> {
    store: &'a CanonicalStore<T>,
    stack: SmallVec<[Slot; 48]>,
}

impl<T> Iter<'_, T> {
    fn descend(&mut self, mut cursor: Option<Slot>) {
        while let Some(slot) = cursor {
            self.stack.push(slot);
            cursor = self.store.node(slot).left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.stack.pop()?;
        let store = self.store;
        let node = store.node(slot);
        self.descend(node.right);
        Some(&node.value)
    }
}

//! Per-representation node census.

use crate::{Category, CategoryGroup, NodeId};

/// Node counters owned by one representation.
///
/// Assigns node ids and counts allocations per category, plus canonical
/// store hits and misses per category group. Static singletons are never
/// recorded.
#[derive(Clone, Debug)]
pub struct NodeStats {
    next: u32,
    counts: [u32; 256],
    hits: [u64; CategoryGroup::COUNT],
    misses: [u64; CategoryGroup::COUNT],
}

impl NodeStats {
    pub fn new() -> Self {
        NodeStats {
            next: NodeId::FIRST_DYNAMIC,
            counts: [0; 256],
            hits: [0; CategoryGroup::COUNT],
            misses: [0; CategoryGroup::COUNT],
        }
    }

    /// Allocate the next node id for a node of `category`.
    ///
    /// # Panics
    /// Panics if the representation runs out of `u32` node ids.
    pub fn record(&mut self, category: Category) -> NodeId {
        let id = NodeId::from_raw(self.next);
        self.next = self
            .next
            .checked_add(1)
            .unwrap_or_else(|| panic!("node ids exhausted"));
        self.counts[category as usize] += 1;
        id
    }

    /// Record the outcome of a canonical store lookup.
    pub fn record_lookup(&mut self, group: CategoryGroup, fresh: bool) {
        if fresh {
            self.misses[group.index()] += 1;
        } else {
            self.hits[group.index()] += 1;
        }
    }

    /// Nodes allocated for `category`.
    #[inline]
    pub fn count(&self, category: Category) -> u32 {
        self.counts[category as usize]
    }

    /// Nodes allocated across every category in `group`.
    pub fn group_count(&self, group: CategoryGroup) -> u64 {
        Category::ALL
            .iter()
            .filter(|category| category.group() == group)
            .map(|&category| u64::from(self.count(category)))
            .sum()
    }

    /// Nodes allocated in total.
    #[inline]
    pub fn total(&self) -> u64 {
        u64::from(self.next - NodeId::FIRST_DYNAMIC)
    }

    /// Canonical lookups in `group` that found an existing node.
    #[inline]
    pub fn hits(&self, group: CategoryGroup) -> u64 {
        self.hits[group.index()]
    }

    /// Canonical lookups in `group` that built a new node.
    #[inline]
    pub fn misses(&self, group: CategoryGroup) -> u64 {
        self.misses[group.index()]
    }
}

impl Default for NodeStats {
    fn default() -> Self {
        Self::new()
    }
}

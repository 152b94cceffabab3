//! IPR IR - interning and canonicalization primitives
//!
//! This crate contains the storage layer shared by every node category of
//! the IPR program representation:
//! - `ByteArena` for bump-allocated, length-prefixed byte strings
//! - `StringPool` for interned strings (`Symbol`), with a static table of
//!   reserved words that never touches the arena
//! - `CanonicalStore` for hash-consing: an append-only red-black tree over an
//!   index slab, keyed by a caller-supplied comparator
//! - `NodeId` / `Category` for node identity and dispatch
//! - `NodeStats` for per-category bookkeeping owned by one representation
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings → `Symbol(u32)`, structural values → one
//!   slot per distinct key
//! - **Indices, not pointers**: every handle is a `u32` into a slab owned by
//!   the representation, so link mutation can never dangle
//! - **Never free**: nothing is reclaimed before the owner is dropped

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod config;
mod error;
mod index;
mod interner;
mod node;
mod stats;
mod store;
mod symbol;
mod words;

pub use arena::{ArenaStr, ArenaUsage, ByteArena};
pub use config::ArenaConfig;
pub use error::{ArenaError, InternError, TreeViolation};
pub use index::to_u32;
pub use interner::{StringLookup, StringPool};
pub use node::{Category, CategoryGroup, NodeId};
pub use stats::NodeStats;
pub use store::{CanonicalStore, Color, Dir, Iter, Keyed, KeyedStore, SequenceStore, Slot};
pub use symbol::Symbol;
pub use words::STATIC_WORDS;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ArenaStr, Category, NodeId, Slot, Symbol};
    static_assert_size!(Symbol, 4);
    static_assert_size!(NodeId, 4);
    static_assert_size!(Slot, 4);
    static_assert_size!(Category, 1);
    static_assert_size!(ArenaStr, 8);
}

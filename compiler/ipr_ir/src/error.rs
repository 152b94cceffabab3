//! Errors raised by the storage layer.

use thiserror::Error;

use crate::Slot;

/// Failure to obtain arena storage.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The allocator refused a new pool.
    #[error("could not allocate an arena pool of {size} bytes")]
    PoolAllocation { size: usize },
    /// The string cannot be described by the 4-byte length header.
    #[error("string of {len} bytes exceeds the arena's length header")]
    Oversized { len: usize },
}

/// Failure to intern a string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InternError {
    #[error(transparent)]
    Arena(#[from] ArenaError),
    /// The pool already holds `Symbol::MAX_DYNAMIC` strings.
    #[error("string pool overflow: {count} strings already interned")]
    Overflow { count: usize },
}

/// A red-black invariant that `CanonicalStore::check` found broken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeViolation {
    #[error("root node is red")]
    RedRoot,
    #[error("red node {slot:?} has a red child")]
    RedRed { slot: Slot },
    #[error("black heights differ below {slot:?}: left {left}, right {right}")]
    BlackHeight { slot: Slot, left: usize, right: usize },
    #[error("parent link of {slot:?} does not point back to it")]
    BrokenParent { slot: Slot },
}

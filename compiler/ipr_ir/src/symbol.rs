//! Interned string handle.
//!
//! Provides compact 32-bit interned string handles.

use std::fmt;

/// Interned string handle.
///
/// Layout: 32-bit value split into a kind bit and an index.
/// - Bit 31 set: index into the static word table (no arena storage)
/// - Bit 31 clear: 1-based index into the pool's dynamic entries
/// - Zero: the empty string, shared by every pool and never allocated
///
/// Two symbols issued by the same pool are equal iff their bytes are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// The empty string.
    pub const EMPTY: Symbol = Symbol(0);

    const WORD_BIT: u32 = 1 << 31;

    /// Largest dynamic index a pool can hand out.
    pub const MAX_DYNAMIC: u32 = Self::WORD_BIT - 1;

    /// Handle for the dynamic entry at `index` (0-based).
    #[inline]
    pub(crate) const fn dynamic(index: u32) -> Self {
        debug_assert!(index < Self::MAX_DYNAMIC);
        Symbol(index + 1)
    }

    /// Handle for the static word at `index`.
    #[inline]
    pub(crate) const fn word(index: u32) -> Self {
        Symbol(Self::WORD_BIT | index)
    }

    /// Check if this is the empty string.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if this symbol names a static word.
    #[inline]
    pub const fn is_word(self) -> bool {
        self.0 & Self::WORD_BIT != 0
    }

    #[inline]
    pub(crate) const fn word_index(self) -> Option<usize> {
        if self.is_word() {
            Some((self.0 & !Self::WORD_BIT) as usize)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn entry_index(self) -> Option<usize> {
        if self.is_word() || self.is_empty() {
            None
        } else {
            Some((self.0 - 1) as usize)
        }
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.word_index(), self.entry_index()) {
            (Some(word), _) => write!(f, "Symbol(word={word})"),
            (None, Some(entry)) => write!(f, "Symbol(entry={entry})"),
            (None, None) => write!(f, "Symbol::EMPTY"),
        }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::EMPTY
    }
}

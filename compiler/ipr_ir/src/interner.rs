//! String interning.
//!
//! `StringPool` maps byte strings to `Symbol` handles. Reserved words resolve
//! against the static table and are never stored; everything else is copied
//! into a `ByteArena` once and found again through a chained hash table.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::words::{find_word, word_text};
use crate::{to_u32, ArenaConfig, ArenaStr, ArenaUsage, ByteArena, InternError, Symbol};

/// One dynamic string. Chains link entries in insertion order.
struct Entry {
    text: ArenaStr,
    hash: u64,
    next: Option<u32>,
}

/// Interning table for one representation.
///
/// Symbols from two different pools must not be mixed; nothing checks this.
pub struct StringPool {
    arena: ByteArena,
    entries: Vec<Entry>,
    buckets: Box<[Option<u32>]>,
    max_load: usize,
}

#[inline]
fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

impl StringPool {
    pub fn new() -> Self {
        Self::with_config(&ArenaConfig::default())
    }

    pub fn with_config(config: &ArenaConfig) -> Self {
        StringPool {
            arena: ByteArena::with_config(config),
            entries: Vec::new(),
            buckets: vec![None; config.bucket_count()].into_boxed_slice(),
            max_load: config.max_load(),
        }
    }

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "only the low bits select a bucket"
    )]
    fn bucket_of(hash: u64, buckets: usize) -> usize {
        (hash as usize) & (buckets - 1)
    }

    /// Walk the chain for `bytes`, returning the match or the chain's tail.
    fn search_bucket(&self, bytes: &[u8], hash: u64) -> Result<u32, Option<u32>> {
        let mut tail = None;
        let mut cursor = self.buckets[Self::bucket_of(hash, self.buckets.len())];
        while let Some(index) = cursor {
            let entry = &self.entries[index as usize];
            if entry.hash == hash && self.arena.get(entry.text) == bytes {
                return Ok(index);
            }
            tail = Some(index);
            cursor = entry.next;
        }
        Err(tail)
    }

    /// Try to intern a byte string, returning its symbol or an error on
    /// allocation failure or overflow.
    pub fn try_intern_bytes(&mut self, bytes: &[u8]) -> Result<Symbol, InternError> {
        if bytes.is_empty() {
            return Ok(Symbol::EMPTY);
        }
        if let Some(word) = find_word(bytes) {
            return Ok(Symbol::word(to_u32(word, "static words")));
        }

        let hash = hash_bytes(bytes);
        let tail = match self.search_bucket(bytes, hash) {
            Ok(index) => return Ok(Symbol::dynamic(index)),
            Err(tail) => tail,
        };

        let count = self.entries.len();
        if count >= Symbol::MAX_DYNAMIC as usize {
            return Err(InternError::Overflow { count });
        }
        let text = self.arena.make_string(bytes)?;
        let index = to_u32(count, "string pool");
        self.entries.push(Entry {
            text,
            hash,
            next: None,
        });
        match tail {
            Some(tail) => self.entries[tail as usize].next = Some(index),
            None => self.buckets[Self::bucket_of(hash, self.buckets.len())] = Some(index),
        }

        if self.entries.len() > self.buckets.len().saturating_mul(self.max_load) {
            self.grow();
        }
        Ok(Symbol::dynamic(index))
    }

    /// Try to intern a string, returning its symbol or an error.
    #[inline]
    pub fn try_intern(&mut self, text: &str) -> Result<Symbol, InternError> {
        self.try_intern_bytes(text.as_bytes())
    }

    /// Intern a byte string.
    ///
    /// # Panics
    /// Panics if the arena cannot allocate or the pool overflows.
    /// Use `try_intern_bytes` for fallible interning.
    pub fn intern_bytes(&mut self, bytes: &[u8]) -> Symbol {
        self.try_intern_bytes(bytes)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if the arena cannot allocate or the pool overflows.
    pub fn intern(&mut self, text: &str) -> Symbol {
        self.intern_bytes(text.as_bytes())
    }

    /// Symbol for `bytes` if it was already interned. Never allocates.
    pub fn get(&self, bytes: &[u8]) -> Option<Symbol> {
        if bytes.is_empty() {
            return Some(Symbol::EMPTY);
        }
        if let Some(word) = find_word(bytes) {
            return Some(Symbol::word(to_u32(word, "static words")));
        }
        self.search_bucket(bytes, hash_bytes(bytes))
            .ok()
            .map(Symbol::dynamic)
    }

    /// Double the bucket table, relinking every entry in insertion order.
    fn grow(&mut self) {
        let count = self.buckets.len() * 2;
        let mut buckets = vec![None; count].into_boxed_slice();
        let mut tails: Vec<Option<u32>> = vec![None; count];
        for index in 0..self.entries.len() {
            let id = to_u32(index, "string pool");
            let bucket = Self::bucket_of(self.entries[index].hash, count);
            self.entries[index].next = None;
            match tails[bucket] {
                Some(tail) => self.entries[tail as usize].next = Some(id),
                None => buckets[bucket] = Some(id),
            }
            tails[bucket] = Some(id);
        }
        self.buckets = buckets;
        tracing::debug!(
            buckets = count,
            strings = self.entries.len(),
            "string pool rehashed"
        );
    }

    /// Bytes of an interned symbol.
    ///
    /// # Panics
    /// Panics if `symbol` was issued by a different pool.
    pub fn lookup(&self, symbol: Symbol) -> &[u8] {
        if let Some(word) = symbol.word_index() {
            return word_text(word).as_bytes();
        }
        match symbol.entry_index() {
            Some(entry) => self.arena.get(self.entries[entry].text),
            None => &[],
        }
    }

    /// Text of an interned symbol, if it is valid UTF-8.
    pub fn lookup_str(&self, symbol: Symbol) -> Option<&str> {
        std::str::from_utf8(self.lookup(symbol)).ok()
    }

    /// Symbol of a reserved word. Shared by every pool.
    ///
    /// # Panics
    /// Panics if `text` is not in the static word table.
    pub fn word(text: &str) -> Symbol {
        Self::find_word(text).unwrap_or_else(|| panic!("`{text}` is not a reserved word"))
    }

    /// Symbol of a reserved word, if `text` is one.
    pub fn find_word(text: &str) -> Option<Symbol> {
        find_word(text.as_bytes()).map(|word| Symbol::word(to_u32(word, "static words")))
    }

    /// Number of dynamic strings stored. Reserved words are not counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn usage(&self) -> ArenaUsage {
        self.arena.usage()
    }
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for resolving symbols back to their bytes.
pub trait StringLookup {
    /// Bytes of an interned symbol.
    fn lookup(&self, symbol: Symbol) -> &[u8];
}

impl StringLookup for StringPool {
    fn lookup(&self, symbol: Symbol) -> &[u8] {
        StringPool::lookup(self, symbol)
    }
}

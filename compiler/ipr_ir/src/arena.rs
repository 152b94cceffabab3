//! Bump-allocated byte arena.
//!
//! Strings are copied into fixed-size pools and never freed or moved until
//! the arena is dropped. Each stored string carries a 4-byte little-endian
//! length header, so an `ArenaStr` handle is enough to recover the bytes.

use crate::{to_u32, ArenaConfig, ArenaError};

const HEADER: usize = std::mem::size_of::<u32>();

/// Handle to a string stored in a `ByteArena`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ArenaStr {
    pool: u32,
    offset: u32,
}

impl ArenaStr {
    /// The empty string; resolves without touching any pool.
    pub const EMPTY: ArenaStr = ArenaStr {
        pool: u32::MAX,
        offset: 0,
    };

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.pool == u32::MAX
    }
}

/// Allocation counters reported by [`ByteArena::usage`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaUsage {
    /// Pools allocated so far, standard and oversized.
    pub pools: usize,
    /// Strings stored, excluding empty ones.
    pub strings: usize,
    /// Bytes consumed, headers included.
    pub bytes_used: usize,
    /// Bytes reserved across all pools.
    pub bytes_reserved: usize,
}

struct Pool {
    data: Box<[u8]>,
    used: usize,
}

impl Pool {
    fn allocate(size: usize) -> Result<Self, ArenaError> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| ArenaError::PoolAllocation { size })?;
        data.resize(size, 0);
        Ok(Pool {
            data: data.into_boxed_slice(),
            used: 0,
        })
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.data.len() - self.used
    }

    fn push(&mut self, bytes: &[u8], len: u32) -> usize {
        let offset = self.used;
        let end = offset + HEADER + bytes.len();
        self.data[offset..offset + HEADER].copy_from_slice(&len.to_le_bytes());
        self.data[offset + HEADER..end].copy_from_slice(bytes);
        self.used = end;
        offset
    }
}

/// Append-only storage for byte strings.
pub struct ByteArena {
    pools: Vec<Pool>,
    /// Pool that standard-size requests are carved from.
    current: Option<usize>,
    pool_size: usize,
    strings: usize,
    bytes_used: usize,
}

impl ByteArena {
    pub fn new() -> Self {
        Self::with_config(&ArenaConfig::default())
    }

    pub fn with_config(config: &ArenaConfig) -> Self {
        ByteArena {
            pools: Vec::new(),
            current: None,
            pool_size: config.pool_size(),
            strings: 0,
            bytes_used: 0,
        }
    }

    /// Copy `bytes` into the arena.
    ///
    /// Requests that do not fit a standard pool get a dedicated pool of their
    /// own; the current pool keeps serving later small requests.
    pub fn make_string(&mut self, bytes: &[u8]) -> Result<ArenaStr, ArenaError> {
        if bytes.is_empty() {
            return Ok(ArenaStr::EMPTY);
        }
        let len = u32::try_from(bytes.len())
            .map_err(|_| ArenaError::Oversized { len: bytes.len() })?;
        let need = HEADER + bytes.len();

        let pool = if need > self.pool_size {
            tracing::debug!(size = need, "allocating oversized arena pool");
            self.pools.push(Pool::allocate(need)?);
            self.pools.len() - 1
        } else {
            match self.current {
                Some(index) if self.pools[index].remaining() >= need => index,
                _ => {
                    tracing::debug!(
                        size = self.pool_size,
                        pools = self.pools.len() + 1,
                        "allocating arena pool"
                    );
                    self.pools.push(Pool::allocate(self.pool_size)?);
                    let index = self.pools.len() - 1;
                    self.current = Some(index);
                    index
                }
            }
        };

        let offset = self.pools[pool].push(bytes, len);
        self.strings += 1;
        self.bytes_used += need;
        Ok(ArenaStr {
            pool: to_u32(pool, "arena pools"),
            offset: to_u32(offset, "arena pool offset"),
        })
    }

    /// Bytes stored under `handle`.
    ///
    /// # Panics
    /// Panics if `handle` was issued by a different arena.
    pub fn get(&self, handle: ArenaStr) -> &[u8] {
        if handle.is_empty() {
            return &[];
        }
        let data = &self.pools[handle.pool as usize].data;
        let start = handle.offset as usize;
        let mut header = [0u8; HEADER];
        header.copy_from_slice(&data[start..start + HEADER]);
        let len = u32::from_le_bytes(header) as usize;
        &data[start + HEADER..start + HEADER + len]
    }

    pub fn usage(&self) -> ArenaUsage {
        ArenaUsage {
            pools: self.pools.len(),
            strings: self.strings,
            bytes_used: self.bytes_used,
            bytes_reserved: self.pools.iter().map(|pool| pool.data.len()).sum(),
        }
    }
}

impl Default for ByteArena {
    fn default() -> Self {
        Self::new()
    }
}

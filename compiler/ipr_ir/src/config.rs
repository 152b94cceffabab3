//! Sizing knobs for the byte arena and the string pool.

/// Arena and string-pool configuration.
///
/// All values are clamped on construction, so any `ArenaConfig` is usable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    pool_size: usize,
    bucket_count: usize,
    max_load: usize,
}

impl ArenaConfig {
    /// Smallest pool the arena will allocate.
    pub const MIN_POOL_SIZE: usize = 64;
    /// Largest standard pool the arena will allocate.
    pub const MAX_POOL_SIZE: usize = 1 << 30;

    /// Largest initial bucket count of the string pool.
    pub const MAX_BUCKET_COUNT: usize = 1 << 24;
    /// Largest load factor accepted by `with_max_load`.
    pub const MAX_LOAD: usize = 1 << 16;

    /// Default standard pool size (64 KiB).
    pub const DEFAULT_POOL_SIZE: usize = 64 * 1024;
    /// Default initial bucket count of the string pool.
    pub const DEFAULT_BUCKET_COUNT: usize = 1024;
    /// Default average chain length that triggers a rehash.
    pub const DEFAULT_MAX_LOAD: usize = 2;

    pub const fn new() -> Self {
        ArenaConfig {
            pool_size: Self::DEFAULT_POOL_SIZE,
            bucket_count: Self::DEFAULT_BUCKET_COUNT,
            max_load: Self::DEFAULT_MAX_LOAD,
        }
    }

    /// Set the standard pool size, clamped to `[MIN_POOL_SIZE, MAX_POOL_SIZE]`.
    #[must_use]
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size.clamp(Self::MIN_POOL_SIZE, Self::MAX_POOL_SIZE);
        self
    }

    /// Set the initial bucket count, rounded up to a power of two no larger
    /// than `MAX_BUCKET_COUNT`.
    #[must_use]
    pub fn with_bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = count.clamp(1, Self::MAX_BUCKET_COUNT).next_power_of_two();
        self
    }

    /// Set the load factor (entries per bucket) that triggers growth,
    /// clamped to `[1, MAX_LOAD]`.
    #[must_use]
    pub fn with_max_load(mut self, load: usize) -> Self {
        self.max_load = load.clamp(1, Self::MAX_LOAD);
        self
    }

    #[inline]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    #[inline]
    pub const fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    #[inline]
    pub const fn max_load(&self) -> usize {
        self.max_load
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.pool_size(), 64 * 1024);
        assert_eq!(config.bucket_count(), 1024);
        assert_eq!(config.max_load(), 2);
    }

    #[test]
    fn builders_clamp() {
        let config = ArenaConfig::new()
            .with_pool_size(1)
            .with_bucket_count(0)
            .with_max_load(0);
        assert_eq!(config.pool_size(), ArenaConfig::MIN_POOL_SIZE);
        assert_eq!(config.bucket_count(), 1);
        assert_eq!(config.max_load(), 1);

        let config = ArenaConfig::new()
            .with_pool_size(usize::MAX)
            .with_bucket_count(1000);
        assert_eq!(config.pool_size(), ArenaConfig::MAX_POOL_SIZE);
        assert_eq!(config.bucket_count(), 1024);

        let config = ArenaConfig::new()
            .with_bucket_count(usize::MAX)
            .with_max_load(usize::MAX);
        assert_eq!(config.bucket_count(), ArenaConfig::MAX_BUCKET_COUNT);
        assert_eq!(config.max_load(), ArenaConfig::MAX_LOAD);
    }
}

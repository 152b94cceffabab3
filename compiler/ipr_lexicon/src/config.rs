//! Representation configuration.

use ipr_ir::ArenaConfig;

/// Settings for a `Lexicon`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexiconConfig {
    /// Sizing of the string arena and interning table.
    pub arena: ArenaConfig,
}

impl LexiconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_arena(mut self, arena: ArenaConfig) -> Self {
        self.arena = arena;
        self
    }
}

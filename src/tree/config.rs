//! Configuration types for the tree walker

/// Depth limit used when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Deepest level rendered; children of the root are level 1
    pub max_depth: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

//! Output configuration types

use crate::metadata::MetadataConfig;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Metadata display configuration
    pub metadata: MetadataConfig,
    /// Hide node payloads
    pub suppress_payload: bool,
    /// Print a node count after the tree
    pub show_summary: bool,
}

impl OutputConfig {
    /// Plain output with payloads and no metadata.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Self::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            metadata: MetadataConfig::hidden(),
            suppress_payload: false,
            show_summary: false,
        }
    }
}

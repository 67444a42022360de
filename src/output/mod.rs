//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Payload escaping, metadata prefixes, node colors
//! - `streaming` - Streaming formatter for console output

mod config;
mod streaming;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use utils::{format_payload, metadata_prefix, name_color};

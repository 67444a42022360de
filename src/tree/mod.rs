//! Namespace tree walking logic
//!
//! `TreeWalker` performs a depth-first walk over a `NamespaceClient`, computing the
//! guide-line context of every node and streaming it to a `NodeOutput`.

mod config;
mod node;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use node::TreeNode;
pub use traversal::{
    BLANK_PREFIX, BRANCH, LAST_BRANCH, PIPE_PREFIX, PREFIX_WIDTH, RenderContext,
};
pub use utils::{join_child_path, normalize_root};
pub use walker::{NodeOutput, TreeWalker, WalkStats};

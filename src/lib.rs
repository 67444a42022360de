//! zkview - a tree command for ZooKeeper namespaces

pub mod client;
pub mod error;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::{NamespaceClient, ZkClient};
pub use error::{ClientError, TraversalError};
pub use metadata::{MetadataBlock, MetadataConfig, NodeMetadata};
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{
    DEFAULT_MAX_DEPTH, NodeOutput, RenderContext, TreeNode, TreeWalker, WalkStats, WalkerConfig,
};

//! A fetched node, alive for one traversal step

use crate::metadata::NodeMetadata;

/// One node of the namespace as fetched during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Last path segment
    pub name: String,
    /// Absolute path
    pub path: String,
    pub payload: Vec<u8>,
    pub metadata: NodeMetadata,
}

impl TreeNode {
    pub fn new(name: String, path: String, payload: Vec<u8>, metadata: NodeMetadata) -> Self {
        Self {
            name,
            path,
            payload,
            metadata,
        }
    }

    /// A node whose contents could not be fetched.
    pub fn without_contents(name: String, path: String) -> Self {
        Self::new(name, path, Vec::new(), NodeMetadata::default())
    }
}

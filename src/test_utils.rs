//! In-memory namespace for tests and benchmarks.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use std::collections::{HashMap, HashSet};

use zookeeper::ZkError;

use crate::client::NamespaceClient;
use crate::error::ClientError;
use crate::metadata::NodeMetadata;
use crate::tree::join_child_path;

#[derive(Debug, Default)]
struct MemoryNode {
    /// Child names in insertion order
    children: Vec<String>,
    payload: Vec<u8>,
    metadata: NodeMetadata,
}

/// A namespace held in memory, served through `NamespaceClient`.
///
/// Children are listed in insertion order. `child_count` and `data_length` are
/// derived from the stored tree; the remaining metadata fields default to zero and
/// can be set with `with_metadata`.
#[derive(Debug)]
pub struct MemoryNamespace {
    nodes: HashMap<String, MemoryNode>,
    failing_list: HashSet<String>,
    failing_get: HashSet<String>,
}

impl Default for MemoryNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNamespace {
    /// A namespace containing only the root `/`.
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert("/".to_string(), MemoryNode::default());
        Self {
            nodes,
            failing_list: HashSet::new(),
            failing_get: HashSet::new(),
        }
    }

    /// Add a node, creating missing ancestors with empty payloads.
    ///
    /// Adding an existing path replaces its payload.
    pub fn with_node(mut self, path: &str, payload: &[u8]) -> Self {
        self.insert(path, payload);
        self
    }

    /// Override the stored metadata of an existing node.
    pub fn with_metadata(mut self, path: &str, metadata: NodeMetadata) -> Self {
        if let Some(node) = self.nodes.get_mut(path) {
            node.metadata = metadata;
        }
        self
    }

    /// Make `list_children` fail for `path`.
    pub fn failing_list(mut self, path: &str) -> Self {
        self.failing_list.insert(path.to_string());
        self
    }

    /// Make `get_node` fail for `path`.
    pub fn failing_get(mut self, path: &str) -> Self {
        self.failing_get.insert(path.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn insert(&mut self, path: &str, payload: &[u8]) {
        let mut parent = "/".to_string();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let child = join_child_path(&parent, segment);
            if !self.nodes.contains_key(&child) {
                self.nodes.insert(child.clone(), MemoryNode::default());
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.push(segment.to_string());
                }
            }
            parent = child;
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.payload = payload.to_vec();
        }
    }
}

impl NamespaceClient for MemoryNamespace {
    fn list_children(&self, path: &str) -> Result<Vec<String>, ClientError> {
        if self.failing_list.contains(path) {
            return Err(ZkError::ConnectionLoss.into());
        }
        self.nodes
            .get(path)
            .map(|node| node.children.clone())
            .ok_or_else(|| ClientError::NoNode(path.to_string()))
    }

    fn get_node(&self, path: &str) -> Result<(Vec<u8>, NodeMetadata), ClientError> {
        if self.failing_get.contains(path) {
            return Err(ZkError::ConnectionLoss.into());
        }
        let node = self
            .nodes
            .get(path)
            .ok_or_else(|| ClientError::NoNode(path.to_string()))?;
        let metadata = NodeMetadata {
            data_length: node.payload.len() as i32,
            child_count: node.children.len() as i32,
            ..node.metadata
        };
        Ok((node.payload.clone(), metadata))
    }
}

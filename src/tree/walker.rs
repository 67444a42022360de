//! TreeWalker - depth-first walk over the remote namespace
//!
//! Lines are streamed to a `NodeOutput` as soon as each node is fetched; only the
//! chain of ancestors' contexts is held in memory.

use std::io;

use tracing::{debug, trace};

use crate::client::NamespaceClient;
use crate::error::TraversalError;

use super::config::WalkerConfig;
use super::node::TreeNode;
use super::traversal::RenderContext;
use super::utils::join_child_path;

/// Receives nodes in display order.
pub trait NodeOutput {
    fn output_node(&mut self, node: &TreeNode, context: &RenderContext) -> io::Result<()>;

    fn finish(&mut self, stats: &WalkStats) -> io::Result<()>;
}

/// Counts gathered while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Nodes rendered
    pub nodes: usize,
    /// Deepest level rendered, 0 if nothing was
    pub deepest: usize,
}

impl WalkStats {
    fn record(&mut self, depth: usize) {
        self.nodes += 1;
        self.deepest = self.deepest.max(depth);
    }
}

/// Streaming, single-threaded walker over a `NamespaceClient`.
pub struct TreeWalker<'a, C: NamespaceClient + ?Sized> {
    config: WalkerConfig,
    client: &'a C,
}

impl<'a, C: NamespaceClient + ?Sized> TreeWalker<'a, C> {
    pub fn new(config: WalkerConfig, client: &'a C) -> Self {
        Self { config, client }
    }

    /// Walk everything below `root`, streaming each node to `output`.
    ///
    /// A failed child listing aborts the walk; lines already written stay written.
    pub fn walk<O: NodeOutput>(
        &self,
        root: &str,
        output: &mut O,
    ) -> Result<WalkStats, TraversalError> {
        let mut stats = WalkStats::default();
        self.walk_node(root, &RenderContext::root(), output, &mut stats)?;
        output.finish(&stats)?;
        Ok(stats)
    }

    /// `context` describes the level of `path`'s children.
    fn walk_node<O: NodeOutput>(
        &self,
        path: &str,
        context: &RenderContext,
        output: &mut O,
        stats: &mut WalkStats,
    ) -> Result<(), TraversalError> {
        if context.depth > self.config.max_depth {
            trace!(path, depth = context.depth, "depth limit reached");
            return Ok(());
        }

        let children =
            self.client
                .list_children(path)
                .map_err(|source| TraversalError::ListChildren {
                    path: path.to_string(),
                    source,
                })?;

        let total = children.len();
        for (i, name) in children.into_iter().enumerate() {
            let child_context = context.sibling(i == total - 1);
            let child_path = join_child_path(path, &name);
            let node = self.fetch_node(name, child_path);

            output.output_node(&node, &child_context)?;
            stats.record(child_context.depth);

            self.walk_node(&node.path, &child_context.descend(), output, stats)?;
        }

        Ok(())
    }

    fn fetch_node(&self, name: String, path: String) -> TreeNode {
        match self.client.get_node(&path) {
            Ok((payload, metadata)) => TreeNode::new(name, path, payload, metadata),
            Err(e) => {
                debug!(path = %path, error = %e, "content fetch failed, rendering without contents");
                TreeNode::without_contents(name, path)
            }
        }
    }
}

//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each node as soon as
//! the walker hands it over, for use with `TreeWalker`.

use std::io;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::metadata::MetadataBlock;
use crate::tree::{NodeOutput, RenderContext, TreeNode, WalkStats};

use super::config::OutputConfig;
use super::utils::{format_payload, metadata_prefix, name_color};

/// Streaming output formatter - writes directly to its sink without buffering the tree.
/// Implements the NodeOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W = StandardStream> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            out: StandardStream::stdout(choice),
        }
    }
}

impl StreamingFormatter<Buffer> {
    /// Formatter writing into an in-memory buffer, with ANSI colors if enabled.
    pub fn buffered(config: OutputConfig) -> Self {
        let out = if config.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        Self { config, out }
    }

    /// Everything written so far, as text.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.out.as_slice()).into_owned()
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Write the traversal root as the header line, uncolored.
    pub fn output_root(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "{}", path)
    }

    fn write_colored(&mut self, text: &str, spec: ColorSpec) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(&spec)?;
            write!(self.out, "{}", text)?;
            self.out.reset()
        } else {
            write!(self.out, "{}", text)
        }
    }

    /// Print a node's metadata block beneath its line.
    fn print_metadata_block(&mut self, node: &TreeNode, context: &RenderContext) -> io::Result<()> {
        let block =
            MetadataBlock::from_metadata(&node.metadata, self.config.metadata.human_timestamps);
        let prefix = metadata_prefix(context, node.metadata.has_children());
        writeln!(self.out, "{}", block.render(&prefix)?)
    }
}

impl<W: WriteColor> NodeOutput for StreamingFormatter<W> {
    fn output_node(&mut self, node: &TreeNode, context: &RenderContext) -> io::Result<()> {
        write!(self.out, "{}{}", context.prefix, context.connector())?;
        self.write_colored(&node.name, name_color(node.metadata.has_children()))?;

        if !self.config.suppress_payload && !node.payload.is_empty() {
            write!(self.out, " {}", format_payload(&node.payload))?;
        }
        writeln!(self.out)?;

        if self.config.metadata.show {
            self.print_metadata_block(node, context)?;
        }
        Ok(())
    }

    fn finish(&mut self, stats: &WalkStats) -> io::Result<()> {
        if self.config.show_summary {
            writeln!(self.out)?;
            let noun = if stats.nodes == 1 { "node" } else { "nodes" };
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Black)).set_intense(true);
            self.write_colored(&format!("{} {}", stats.nodes, noun), spec)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

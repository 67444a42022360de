//! Per-node rendering context carried down the traversal.

/// Connector for a node with siblings below it.
pub const BRANCH: &str = "├── ";
/// Connector for the last node among its siblings.
pub const LAST_BRANCH: &str = "└── ";
/// Prefix unit under a node that has siblings below it.
pub const PIPE_PREFIX: &str = "│   ";
/// Prefix unit under the last node among its siblings.
pub const BLANK_PREFIX: &str = "    ";
/// Display width of every connector and prefix unit.
pub const PREFIX_WIDTH: usize = 4;

/// Where a node sits in the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Guide glyphs accumulated from ancestors
    pub prefix: String,
    /// 1-based distance from the traversal root
    pub depth: usize,
    pub is_last: bool,
}

impl RenderContext {
    /// Context for the direct children of the traversal root.
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
            depth: 1,
            is_last: true,
        }
    }

    /// Same level and prefix, with the given last-sibling flag.
    pub fn sibling(&self, is_last: bool) -> Self {
        Self {
            prefix: self.prefix.clone(),
            depth: self.depth,
            is_last,
        }
    }

    /// Context for the children of the node this context describes.
    pub fn descend(&self) -> Self {
        Self {
            prefix: self.continuation_prefix(),
            depth: self.depth + 1,
            is_last: false,
        }
    }

    pub fn connector(&self) -> &'static str {
        if self.is_last { LAST_BRANCH } else { BRANCH }
    }

    /// Prefix for anything drawn beneath this node: its children and its metadata block.
    pub fn continuation_prefix(&self) -> String {
        if self.is_last {
            format!("{}{}", self.prefix, BLANK_PREFIX)
        } else {
            format!("{}{}", self.prefix, PIPE_PREFIX)
        }
    }

    /// Prefix width in display columns.
    pub fn prefix_width(&self) -> usize {
        self.prefix.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_context() {
        let ctx = RenderContext::root();
        assert_eq!(ctx.depth, 1);
        assert_eq!(ctx.prefix, "");
    }

    #[test]
    fn test_connector() {
        let ctx = RenderContext::root();
        assert_eq!(ctx.sibling(false).connector(), "├── ");
        assert_eq!(ctx.sibling(true).connector(), "└── ");
    }

    #[test]
    fn test_descend_extends_prefix() {
        let ctx = RenderContext::root();
        let under_middle = ctx.sibling(false).descend();
        assert_eq!(under_middle.prefix, "│   ");
        assert_eq!(under_middle.depth, 2);

        let under_last = ctx.sibling(true).descend();
        assert_eq!(under_last.prefix, "    ");
        assert_eq!(under_last.depth, 2);
    }

    #[test]
    fn test_prefix_width_grows_one_unit_per_level() {
        let mut ctx = RenderContext::root();
        for level in 1..=6 {
            assert_eq!(ctx.depth, level);
            assert_eq!(ctx.prefix_width(), PREFIX_WIDTH * (level - 1));
            ctx = ctx.sibling(level % 2 == 0).descend();
        }
    }

    #[test]
    fn test_ancestor_state_preserved() {
        // middle child -> last child -> middle child
        let ctx = RenderContext::root()
            .sibling(false)
            .descend()
            .sibling(true)
            .descend()
            .sibling(false)
            .descend();
        assert_eq!(ctx.prefix, "│       │   ");
    }
}

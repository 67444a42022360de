//! Shared utility functions for output formatting

use std::fmt::Write;

use termcolor::{Color, ColorSpec};

use crate::tree::{PIPE_PREFIX, RenderContext};

/// Indent under a last sibling's metadata block.
const LAST_METADATA_INDENT: &str = "  ";

/// Render a payload as a quoted, escaped string.
///
/// Printable characters are kept as-is, common control characters use their
/// short escapes (`\n`, `\a`, ...), other ASCII control bytes and bytes that are
/// not part of valid UTF-8 become `\xNN`.
pub fn format_payload(payload: &[u8]) -> String {
    let mut out = String::with_capacity(payload.len() + 2);
    out.push('"');
    for chunk in payload.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped_char(&mut out, c);
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{:02x}", byte);
        }
    }
    out.push('"');
    out
}

fn push_escaped_char(out: &mut String, c: char) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0c' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0b' => out.push_str("\\v"),
        c if c.is_ascii_control() => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
        c => out.push(c),
    }
}

/// Line prefix for a node's metadata block.
///
/// Under a node with siblings below it the block keeps the vertical guide;
/// under a last sibling it is indented by two columns. The final column holds a
/// guide when the node has children of its own.
pub fn metadata_prefix(context: &RenderContext, has_children: bool) -> String {
    let indent = if context.is_last {
        LAST_METADATA_INDENT
    } else {
        PIPE_PREFIX
    };
    let guide = if has_children { "│" } else { " " };
    format!("{}{}{}", context.prefix, indent, guide)
}

/// Color for a node name: branches in bold blue, leaves in green.
pub fn name_color(has_children: bool) -> ColorSpec {
    let mut spec = ColorSpec::new();
    if has_children {
        spec.set_fg(Some(Color::Blue)).set_bold(true);
    } else {
        spec.set_fg(Some(Color::Green));
    }
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_payload_text() {
        assert_eq!(format_payload(b"x"), "\"x\"");
        assert_eq!(format_payload(b"a \"b\"\n"), "\"a \\\"b\\\"\\n\"");
        assert_eq!(format_payload(b"c:\\tmp"), "\"c:\\\\tmp\"");
    }

    #[test]
    fn test_format_payload_keeps_utf8() {
        assert_eq!(format_payload("héllo".as_bytes()), "\"héllo\"");
    }

    #[test]
    fn test_format_payload_binary() {
        assert_eq!(format_payload(&[0xff, b'a', 0x00]), "\"\\xffa\\x00\"");
    }

    #[test]
    fn test_format_payload_keeps_utf8_around_invalid_bytes() {
        assert_eq!(
            format_payload(&[0xff, 0xc3, 0xa9, 0x00]),
            "\"\\xffé\\x00\""
        );
    }

    #[test]
    fn test_format_payload_control_characters() {
        assert_eq!(format_payload(b"\x00\x07"), "\"\\x00\\a\"");
        assert_eq!(format_payload(b"\t\r\x0b\x0c\x08"), "\"\\t\\r\\v\\f\\b\"");
        assert_eq!(format_payload(b"\x1b\x7f"), "\"\\x1b\\x7f\"");
        assert_eq!(format_payload("\u{85}".as_bytes()), "\"\\u0085\"");
    }

    #[test]
    fn test_metadata_prefix() {
        let middle = RenderContext::root().sibling(false);
        assert_eq!(metadata_prefix(&middle, true), "│   │");
        assert_eq!(metadata_prefix(&middle, false), "│    ");

        let last = RenderContext::root().sibling(true);
        assert_eq!(metadata_prefix(&last, true), "  │");
        assert_eq!(metadata_prefix(&last, false), "   ");
    }

    #[test]
    fn test_metadata_prefix_keeps_ancestor_guides() {
        let nested_last = RenderContext::root()
            .sibling(false)
            .descend()
            .sibling(true);
        assert_eq!(metadata_prefix(&nested_last, true), "│     │");
    }

    #[test]
    fn test_name_color() {
        assert_eq!(name_color(true).fg(), Some(&Color::Blue));
        assert!(name_color(true).bold());
        assert_eq!(name_color(false).fg(), Some(&Color::Green));
        assert!(!name_color(false).bold());
    }
}

//! Plain-text rendering of render trees, outlines and session rows.

use sift_core::render::{
    Block, DocumentOutline, PrimitiveView, RenderNode, RenderTree, Section, Slot,
};
use sift_core::session::SessionSummary;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Formats a scalar for inline display.
pub fn primitive(view: &PrimitiveView) -> String {
    match view {
        PrimitiveView::Empty => "(empty)".to_string(),
        PrimitiveView::Flag(true) => "[yes]".to_string(),
        PrimitiveView::Flag(false) => "[no]".to_string(),
        PrimitiveView::Number(text) | PrimitiveView::Text(text) => text.clone(),
        PrimitiveView::Link(url) => format!("<{}>", url),
        PrimitiveView::Block(text) => text.clone(),
    }
}

/// Formats a render tree, one node per line, children indented under parents.
///
/// Long text blocks are printed on their own lines below the label with
/// their line breaks kept.
pub fn tree(tree: &RenderTree) -> String {
    let mut out = String::new();
    // The fields of a root object sit at the left margin.
    let base = usize::from(matches!(tree.root_node(), RenderNode::Object { .. }));
    for item in tree.walk() {
        let pad = INDENT.repeat(item.indent.saturating_sub(base));
        let label = match item.slot {
            Slot::Root => String::new(),
            Slot::Field { label, .. } => format!("{}:", label),
            Slot::Entry { index } => format!("[{}]", index),
        };

        let value = match item.node {
            RenderNode::Primitive {
                value: PrimitiveView::Block(text),
            } => {
                if !label.is_empty() {
                    let _ = writeln!(out, "{}{}", pad, label);
                }
                for line in text.lines() {
                    let _ = writeln!(out, "{}{}{}", pad, INDENT, line);
                }
                continue;
            }
            RenderNode::Primitive { value } => primitive(value),
            RenderNode::EmptyObject => "{}".to_string(),
            RenderNode::EmptyList => "[]".to_string(),
            RenderNode::Badges { items } => items
                .iter()
                .map(|item| format!("[{}]", primitive(item)))
                .collect::<Vec<_>>()
                .join(" "),
            RenderNode::List { entries, .. } => match entries.len() {
                1 => "(1 item)".to_string(),
                n => format!("({} items)", n),
            },
            // Object fields follow on their own lines.
            RenderNode::Object { .. } => String::new(),
        };

        let line = match (label.is_empty(), value.is_empty()) {
            (true, true) => continue,
            (true, false) => value,
            (false, true) => label,
            (false, false) => format!("{} {}", label, value),
        };
        let _ = writeln!(out, "{}{}", pad, line);
    }
    out
}

/// Formats a discussion outline back into readable text.
pub fn outline(outline: &DocumentOutline) -> String {
    let mut out = String::new();
    write_blocks(&mut out, &outline.preamble);
    for section in &outline.sections {
        write_section(&mut out, section);
    }
    out
}

// Sections nest at most six levels deep.
fn write_section(out: &mut String, section: &Section) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} {}",
        "#".repeat(usize::from(section.level)),
        section.heading
    );
    write_blocks(out, &section.blocks);
    for child in &section.children {
        write_section(out, child);
    }
}

fn write_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph { text } => {
                let _ = writeln!(out, "{}", text);
            }
            Block::Code { language, text } => {
                let _ = writeln!(out, "```{}", language.as_deref().unwrap_or(""));
                let _ = writeln!(out, "{}", text);
                let _ = writeln!(out, "```");
            }
            Block::List { items } => {
                for item in items {
                    let _ = writeln!(out, "- {}", item);
                }
            }
        }
    }
}

/// Formats one row of the session list.
pub fn summary_row(summary: &SessionSummary) -> String {
    format!(
        "{:<12} {}  {}  {}",
        summary.status.label(),
        summary.created_at,
        summary.id,
        summary.topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sift_core::render::{outline as parse_outline, render};

    #[test]
    fn test_tree_format() {
        let value = json!({
            "topic": "Auth",
            "done": true,
            "tags": ["a", "b"],
            "steps": [{ "name": "x" }],
            "notes": null,
            "extra": {}
        });
        let text = tree(&render(&value));

        assert_eq!(
            text,
            "Topic: Auth\n\
             Done: [yes]\n\
             Tags: [a] [b]\n\
             Steps: (1 item)\n\
             \x20\x20[1]\n\
             \x20\x20\x20\x20Name: x\n\
             Notes: (empty)\n\
             Extra: {}\n"
        );
    }

    #[test]
    fn test_long_text_is_printed_as_block() {
        let long = format!("{}\nsecond line", "word ".repeat(30));
        let text = tree(&render(&json!({ "summary": long })));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Summary:");
        assert!(lines[1].starts_with("  word"));
        assert_eq!(lines[2], "  second line");
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(tree(&render(&json!("https://example.com"))), "<https://example.com>\n");
        assert_eq!(tree(&render(&json!([]))), "[]\n");
    }

    #[test]
    fn test_outline_format() {
        let doc = "intro\n\n# Title\n\nbody\n\n## Sub\n\n- one\n- two\n";
        let text = outline(&parse_outline(doc));

        assert_eq!(text, "intro\n\n# Title\nbody\n\n## Sub\n- one\n- two\n");
    }
}

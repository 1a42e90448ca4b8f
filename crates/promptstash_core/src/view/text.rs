//! Plain-text drawing of display trees for terminal front ends.

use crate::view::node::{DisplayNode, NodeKind};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Draws `nodes` as indented plain text, one block per top-level node.
pub fn render_text(nodes: &[DisplayNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        draw_node(node, &mut out);
    }
    out
}

fn draw_node(node: &DisplayNode, out: &mut String) {
    let text = node.text.as_deref().unwrap_or_default();
    match node.kind {
        NodeKind::PromptCard => {
            let title = child_text(node, NodeKind::Title);
            let id = node.attr("id").unwrap_or_default();
            let _ = writeln!(out, "{title}  [{id}]");
            if let Some(badge) = node.child(NodeKind::ProjectBadge) {
                let _ = writeln!(
                    out,
                    "{INDENT}project: {} ({})",
                    badge.text.as_deref().unwrap_or_default(),
                    badge.attr("color").unwrap_or_default()
                );
            }
            let _ = writeln!(out, "{INDENT}{}", child_text(node, NodeKind::Timestamp));
            for line in child_text(node, NodeKind::Content).lines() {
                let _ = writeln!(out, "{INDENT}| {line}");
            }
            let tags: Vec<&str> = node
                .descendants(NodeKind::Tag)
                .into_iter()
                .filter_map(|tag| tag.text.as_deref())
                .collect();
            if !tags.is_empty() {
                let _ = writeln!(out, "{INDENT}tags: {}", tags.join(", "));
            }
            out.push('\n');
        }
        NodeKind::ProjectItem => {
            let color = node
                .child(NodeKind::ColorSwatch)
                .and_then(|swatch| swatch.attr("color"))
                .unwrap_or_default();
            let marker = if node.attr("active").is_some() { "*" } else { " " };
            let _ = writeln!(
                out,
                "{marker} {}  ({})  {color}  [{}]",
                child_text(node, NodeKind::Label),
                child_text(node, NodeKind::Count),
                node.attr("project").unwrap_or_default()
            );
        }
        NodeKind::SelectOption => {
            let _ = writeln!(out, "{text} = {}", node.attr("value").unwrap_or_default());
        }
        _ => {
            if !text.is_empty() {
                let _ = writeln!(out, "{text}");
            }
            for child in &node.children {
                draw_node(child, out);
            }
        }
    }
}

fn child_text(node: &DisplayNode, kind: NodeKind) -> &str {
    node.child(kind)
        .and_then(|child| child.text.as_deref())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use crate::view::node::{DisplayNode, NodeKind};

    #[test]
    fn prompt_card_draws_title_content_and_tags() {
        let card = DisplayNode::new(NodeKind::PromptCard)
            .with_attr("id", "abc")
            .with_child(DisplayNode::text(NodeKind::Title, "Todo"))
            .with_child(DisplayNode::text(NodeKind::Timestamp, "Added: now"))
            .with_child(DisplayNode::text(NodeKind::Content, "line one\nline two"))
            .with_child(
                DisplayNode::new(NodeKind::TagList)
                    .with_child(DisplayNode::text(NodeKind::Tag, "errand")),
            );

        let drawn = render_text(&[card]);
        assert!(drawn.starts_with("Todo  [abc]\n"));
        assert!(drawn.contains("| line two"));
        assert!(drawn.contains("tags: errand"));
    }
}

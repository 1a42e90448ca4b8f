//! Display tree written by the presenter.
//!
//! Nodes carry semantic kinds and plain attributes only; styling is left to
//! whichever front end draws them.

use std::collections::BTreeMap;

/// Semantic role of a display node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    ProjectItem,
    ColorSwatch,
    Label,
    Count,
    DeleteButton,
    PromptCard,
    Title,
    Timestamp,
    Content,
    TagList,
    Tag,
    ProjectBadge,
    SelectOption,
    Heading,
    Placeholder,
}

/// One element of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub attrs: BTreeMap<&'static str, String>,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(kind: NodeKind, text: impl Into<String>) -> Self {
        Self::new(kind).with_text(text)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    pub fn with_child(mut self, child: DisplayNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DisplayNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// First direct child of `kind`.
    pub fn child(&self, kind: NodeKind) -> Option<&DisplayNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// All descendants of `kind`, depth-first.
    pub fn descendants(&self, kind: NodeKind) -> Vec<&DisplayNode> {
        let mut found = Vec::new();
        collect_kind(&self.children, kind, &mut found);
        found
    }
}

/// Target region whose children are replaced wholesale on each render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    nodes: Vec<DisplayNode>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every child and installs `nodes`.
    pub fn replace(&mut self, nodes: Vec<DisplayNode>) {
        self.nodes = nodes;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Text of the first node, for single-value regions such as counts.
    pub fn text(&self) -> Option<&str> {
        self.nodes.first().and_then(|node| node.text.as_deref())
    }

    /// All nodes of `kind` in the region, depth-first.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&DisplayNode> {
        let mut found = Vec::new();
        collect_kind(&self.nodes, kind, &mut found);
        found
    }
}

/// Message element toggled on and off instead of rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    message: String,
    visible: bool,
}

impl Placeholder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Hides the element; with `clear`, also empties its message.
    pub fn hide(&mut self, clear: bool) {
        self.visible = false;
        if clear {
            self.message.clear();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn collect_kind<'a>(nodes: &'a [DisplayNode], kind: NodeKind, found: &mut Vec<&'a DisplayNode>) {
    for node in nodes {
        if node.kind == kind {
            found.push(node);
        }
        collect_kind(&node.children, kind, found);
    }
}

#[cfg(test)]
mod tests {
    use super::{Container, DisplayNode, NodeKind};

    #[test]
    fn find_all_walks_nested_children() {
        let mut container = Container::new();
        container.replace(vec![DisplayNode::new(NodeKind::PromptCard)
            .with_child(DisplayNode::new(NodeKind::TagList).with_children([
                DisplayNode::text(NodeKind::Tag, "a"),
                DisplayNode::text(NodeKind::Tag, "b"),
            ]))]);

        let tags: Vec<_> = container
            .find_all(NodeKind::Tag)
            .into_iter()
            .filter_map(|node| node.text.as_deref())
            .collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn replace_discards_previous_children() {
        let mut container = Container::new();
        container.replace(vec![DisplayNode::new(NodeKind::Label)]);
        container.replace(Vec::new());
        assert!(container.is_empty());
    }
}

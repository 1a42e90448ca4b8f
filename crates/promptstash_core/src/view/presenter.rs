//! Projection of store state into display trees.
//!
//! # Responsibility
//! - Rebuild each target region from a `StoreSnapshot`.
//! - Decide between list content and empty-state placeholders.
//!
//! # Invariants
//! - Every render call fully replaces its target; nothing is diffed.
//! - Delete affordances carry stable record ids, never list positions.
//! - Rendering never mutates store state.

use crate::model::filter::PromptFilter;
use crate::model::prompt::Prompt;
use crate::service::store::StoreSnapshot;
use crate::view::node::{Container, DisplayNode, NodeKind, Placeholder};
use chrono::{DateTime, Local, Utc};

pub const NO_PROMPTS_MESSAGE: &str = "No prompts here yet. Add one to get started.";
pub const NO_PROJECTS_MESSAGE: &str = "No projects yet";
pub const ALL_PROMPTS_TITLE: &str = "All Prompts";
pub const UNASSIGNED_TITLE: &str = "Unassigned";

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rebuilds the project list: swatch, name, prompt count and delete control.
pub fn render_projects(snapshot: StoreSnapshot<'_>, target: &mut Container) {
    if snapshot.projects.is_empty() {
        target.replace(vec![DisplayNode::text(
            NodeKind::Placeholder,
            NO_PROJECTS_MESSAGE,
        )]);
        return;
    }

    let items = snapshot
        .projects
        .iter()
        .map(|project| {
            let mut item = DisplayNode::new(NodeKind::ProjectItem)
                .with_attr("project", project.id.as_str())
                .with_child(
                    DisplayNode::new(NodeKind::ColorSwatch).with_attr("color", project.color.as_str()),
                )
                .with_child(DisplayNode::text(NodeKind::Label, project.name.as_str()))
                .with_child(DisplayNode::text(
                    NodeKind::Count,
                    snapshot.prompt_count_for_project(&project.id).to_string(),
                ))
                .with_child(
                    DisplayNode::text(NodeKind::DeleteButton, "Delete Project")
                        .with_attr("id", project.id.as_str()),
                );
            if snapshot.filter.is_project(&project.id) {
                item = item.with_attr("active", "true");
            }
            item
        })
        .collect();
    target.replace(items);
}

/// Rebuilds the prompt list for the snapshot's filter.
///
/// Shows `placeholder` and leaves `target` empty when nothing matches.
/// Returns the number of cards rendered.
pub fn render_prompts(
    snapshot: StoreSnapshot<'_>,
    target: &mut Container,
    placeholder: &mut Placeholder,
) -> usize {
    let visible = snapshot.filtered_prompts();
    if visible.is_empty() {
        target.clear();
        placeholder.show();
        return 0;
    }

    placeholder.hide(false);
    let cards: Vec<DisplayNode> = visible
        .iter()
        .map(|prompt| prompt_card(snapshot, prompt))
        .collect();
    let rendered = cards.len();
    target.replace(cards);
    rendered
}

/// Rebuilds the total and unassigned count badges.
///
/// The badge matching the current filter is marked active.
pub fn render_counts(snapshot: StoreSnapshot<'_>, all: &mut Container, unassigned: &mut Container) {
    all.replace(vec![count_badge(
        PromptFilter::All,
        snapshot.prompts.len(),
        snapshot.filter,
    )]);
    unassigned.replace(vec![count_badge(
        PromptFilter::Unassigned,
        snapshot.unassigned_count(),
        snapshot.filter,
    )]);
}

/// Rebuilds the project choices offered by the prompt form.
///
/// The first option has an empty value and means "no project".
pub fn render_project_selector(snapshot: StoreSnapshot<'_>, target: &mut Container) {
    let unassigned = DisplayNode::text(NodeKind::SelectOption, UNASSIGNED_TITLE).with_attr("value", "");
    let options = std::iter::once(unassigned)
        .chain(snapshot.projects.iter().map(|project| {
            DisplayNode::text(NodeKind::SelectOption, project.name.as_str())
                .with_attr("value", project.id.as_str())
        }))
        .collect();
    target.replace(options);
}

/// Rebuilds the current-view heading and its "N prompts" line.
pub fn render_header(snapshot: StoreSnapshot<'_>, title: &mut Container, count: &mut Container) {
    let (heading, visible) = match snapshot.filter {
        PromptFilter::All => (ALL_PROMPTS_TITLE.to_string(), snapshot.prompts.len()),
        PromptFilter::Unassigned => (UNASSIGNED_TITLE.to_string(), snapshot.unassigned_count()),
        PromptFilter::Project(project_id) => {
            let name = snapshot
                .find_project(project_id)
                .map(|project| project.name.clone())
                .unwrap_or_else(|| ALL_PROMPTS_TITLE.to_string());
            (name, snapshot.prompt_count_for_project(project_id))
        }
    };

    title.replace(vec![DisplayNode::text(NodeKind::Heading, heading)]);
    count.replace(vec![DisplayNode::text(
        NodeKind::Count,
        format!("{visible} prompts"),
    )]);
}

/// Formats a creation timestamp for display in local time.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    format!(
        "Added: {}",
        created_at.with_timezone(&Local).format(CREATED_AT_FORMAT)
    )
}

fn prompt_card(snapshot: StoreSnapshot<'_>, prompt: &Prompt) -> DisplayNode {
    let mut card = DisplayNode::new(NodeKind::PromptCard)
        .with_attr("id", prompt.id.as_str())
        .with_child(DisplayNode::text(NodeKind::Title, prompt.title.as_str()))
        .with_child(
            DisplayNode::text(NodeKind::DeleteButton, "Delete").with_attr("id", prompt.id.as_str()),
        )
        .with_child(DisplayNode::text(
            NodeKind::Timestamp,
            format_created_at(&prompt.created_at),
        ));

    // A reference to a project that no longer exists renders without a badge.
    if let Some(project) = prompt
        .project_id
        .as_deref()
        .and_then(|project_id| snapshot.find_project(project_id))
    {
        card = card.with_child(
            DisplayNode::text(NodeKind::ProjectBadge, project.name.as_str())
                .with_attr("color", project.color.as_str()),
        );
    }

    card.with_child(DisplayNode::text(NodeKind::Content, prompt.content.as_str()))
        .with_child(
            DisplayNode::new(NodeKind::TagList).with_children(
                prompt
                    .tags
                    .iter()
                    .map(|tag| DisplayNode::text(NodeKind::Tag, tag.as_str())),
            ),
        )
}

fn count_badge(badge: PromptFilter, count: usize, current: &PromptFilter) -> DisplayNode {
    let node = DisplayNode::text(NodeKind::Count, count.to_string()).with_attr("filter", badge.as_key());
    if &badge == current {
        node.with_attr("active", "true")
    } else {
        node
    }
}

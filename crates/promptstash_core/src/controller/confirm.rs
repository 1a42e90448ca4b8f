//! Staged delete confirmation.

use crate::model::project::ProjectId;
use crate::model::prompt::PromptId;

pub const PROMPT_DELETE_MESSAGE: &str =
    "Are you sure you want to delete this prompt? This action cannot be undone.";

/// Record awaiting an explicit delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Prompt(PromptId),
    Project(ProjectId),
}

/// Confirmation text for deleting a project that holds `prompt_count` prompts.
pub fn project_delete_message(project_name: &str, prompt_count: usize) -> String {
    format!(
        "Are you sure you want to delete \"{project_name}\"? This will also unassign {prompt_count} prompt(s) from this project."
    )
}

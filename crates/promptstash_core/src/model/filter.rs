//! Ephemeral prompt-list filter.
//!
//! The filter is view state: it lives in the store but is never persisted.

use crate::model::project::ProjectId;
use crate::model::prompt::Prompt;
use std::fmt::{Display, Formatter};

const ALL_KEY: &str = "all";
const UNASSIGNED_KEY: &str = "unassigned";

/// Which prompts the list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PromptFilter {
    /// Every prompt.
    #[default]
    All,
    /// Prompts without a project.
    Unassigned,
    /// Prompts assigned to one project.
    Project(ProjectId),
}

impl PromptFilter {
    /// Parses the string form used by selection events.
    ///
    /// `"all"` and `"unassigned"` are reserved; anything else is a project id.
    /// A blank value selects `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | ALL_KEY => Self::All,
            UNASSIGNED_KEY => Self::Unassigned,
            other => Self::Project(other.to_string()),
        }
    }

    /// String form matching `parse`.
    pub fn as_key(&self) -> &str {
        match self {
            Self::All => ALL_KEY,
            Self::Unassigned => UNASSIGNED_KEY,
            Self::Project(project_id) => project_id.as_str(),
        }
    }

    /// Returns whether `prompt` is visible under this filter.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        match self {
            Self::All => true,
            Self::Unassigned => prompt.is_unassigned(),
            Self::Project(project_id) => prompt.belongs_to(project_id),
        }
    }

    /// Returns matching prompts in insertion order.
    pub fn apply<'a>(&self, prompts: &'a [Prompt]) -> Vec<&'a Prompt> {
        prompts.iter().filter(|prompt| self.matches(prompt)).collect()
    }

    /// Returns whether this filter selects `project_id`.
    pub fn is_project(&self, project_id: &str) -> bool {
        matches!(self, Self::Project(current) if current == project_id)
    }
}

impl Display for PromptFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

//! Prompt record.
//!
//! # Invariants
//! - `id` is assigned at creation and never reused.
//! - `title` and `content` are non-empty once accepted by the store.
//! - `tags` keep input order; duplicates are allowed, blanks are not.
//! - `created_at` is for display only; list order is insertion order.

use crate::id::generate_id;
use crate::model::iso_millis;
use crate::model::now_millis;
use crate::model::project::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a stored prompt.
pub type PromptId = String;

/// One stashed prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    /// Free text, may span multiple lines.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `None` means unassigned. Always serialized, as `null` when unset.
    #[serde(default, deserialize_with = "deserialize_project_ref")]
    pub project_id: Option<ProjectId>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Prompt {
    /// Creates a prompt with a fresh id and the current timestamp.
    ///
    /// Field values are taken as given; trimming and blank checks happen in
    /// the store before this is called.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        project_id: Option<ProjectId>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            content: content.into(),
            tags,
            project_id,
            created_at: now_millis(),
        }
    }

    /// Returns whether the prompt belongs to no project.
    pub fn is_unassigned(&self) -> bool {
        self.project_id.is_none()
    }

    /// Returns whether the prompt references `project_id`.
    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project_id.as_deref() == Some(project_id)
    }
}

// Older stored data may carry `""` for "no project".
fn deserialize_project_ref<'de, D>(deserializer: D) -> Result<Option<ProjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}

//! Project record used to group prompts.

use crate::id::generate_id;
use crate::model::iso_millis;
use crate::model::now_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored project.
pub type ProjectId = String;

/// Color preselected in the project form.
pub const DEFAULT_PROJECT_COLOR: &str = "#3B82F6";

/// Colors offered by the project form, in display order.
pub const PROJECT_COLOR_OPTIONS: &[&str] = &[
    "#3B82F6", "#22C55E", "#EF4444", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#6B7280",
];

/// Named, colored group of prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Display-only tag color, e.g. `#3B82F6`.
    pub color: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            color: color.into(),
            created_at: now_millis(),
        }
    }
}

//! Form state read by the controller.

use crate::model::project::{ProjectId, DEFAULT_PROJECT_COLOR, PROJECT_COLOR_OPTIONS};

/// Splits comma-separated tag input, trimming tokens and dropping empty ones.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inputs of the add-prompt form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptForm {
    pub title: String,
    pub content: String,
    /// Raw comma-separated tags.
    pub tags: String,
    /// Selected project id; empty means unassigned.
    pub project: String,
}

impl PromptForm {
    pub fn tags(&self) -> Vec<String> {
        parse_tags(self.tags.as_str())
    }

    pub fn project_id(&self) -> Option<ProjectId> {
        match self.project.trim() {
            "" => None,
            value => Some(value.to_string()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Inputs of the new-project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    color: String,
    open: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_PROJECT_COLOR.to_string(),
            open: false,
        }
    }
}

impl ProjectForm {
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the form and restores its defaults.
    pub fn close_and_reset(&mut self) {
        *self = Self::default();
    }

    /// Selects a palette color. Colors outside the palette are ignored.
    pub fn select_color(&mut self, color: &str) -> bool {
        match PROJECT_COLOR_OPTIONS
            .iter()
            .find(|option| option.eq_ignore_ascii_case(color.trim()))
        {
            Some(option) => {
                self.color = (*option).to_string();
                true
            }
            None => false,
        }
    }
}

//! In-memory prompt/project state with write-through slot persistence.
//!
//! # Responsibility
//! - Own the prompt and project collections and the current view filter.
//! - Validate user input before mutating anything.
//! - Flush both slots after every successful mutation.
//!
//! # Invariants
//! - Collections keep insertion order; deletes remove exactly one record.
//! - Deleting a project leaves no prompt referencing it.
//! - The filter never points at a project missing from the collection.
//! - The filter is view state and is never persisted.

use crate::model::filter::PromptFilter;
use crate::model::project::{Project, ProjectId, DEFAULT_PROJECT_COLOR};
use crate::model::prompt::Prompt;
use crate::model::validation::{require_text, ValidationError};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::slot_repo::{SlotRepository, PROJECTS_SLOT, PROMPTS_SLOT};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a store mutation.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected; nothing was mutated.
    Validation(ValidationError),
    /// In-memory state changed but could not be written.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "failed to persist stash: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a successful project delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDeletion {
    /// The removed project.
    pub project: Project,
    /// Number of prompts whose project reference was cleared.
    pub unassigned_prompts: usize,
    /// Whether the view filter pointed at the project and was reset to `All`.
    pub filter_reset: bool,
}

/// Read-only slice of store state handed to the presenter.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    pub prompts: &'a [Prompt],
    pub projects: &'a [Project],
    pub filter: &'a PromptFilter,
}

impl<'a> StoreSnapshot<'a> {
    /// Prompts visible under the snapshot's filter.
    pub fn filtered_prompts(&self) -> Vec<&'a Prompt> {
        self.filter.apply(self.prompts)
    }

    pub fn find_project(&self, project_id: &str) -> Option<&'a Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    pub fn prompt_count_for_project(&self, project_id: &str) -> usize {
        self.prompts
            .iter()
            .filter(|prompt| prompt.belongs_to(project_id))
            .count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.prompts
            .iter()
            .filter(|prompt| prompt.is_unassigned())
            .count()
    }
}

/// Prompt stash state owner.
pub struct PromptStore<S: KeyValueStore> {
    slots: SlotRepository<S>,
    prompts: Vec<Prompt>,
    projects: Vec<Project>,
    filter: PromptFilter,
}

impl<S: KeyValueStore> PromptStore<S> {
    /// Builds the store from whatever the slots currently hold.
    ///
    /// Unreadable slots start empty (see `SlotRepository::load`).
    pub fn load(slots: SlotRepository<S>) -> Self {
        let prompts: Vec<Prompt> = slots.load(PROMPTS_SLOT);
        let projects: Vec<Project> = slots.load(PROJECTS_SLOT);
        info!(
            "event=store_load module=store status=ok prompts={} projects={}",
            prompts.len(),
            projects.len()
        );
        Self {
            slots,
            prompts,
            projects,
            filter: PromptFilter::All,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filter(&self) -> &PromptFilter {
        &self.filter
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            prompts: &self.prompts,
            projects: &self.projects,
            filter: &self.filter,
        }
    }

    pub fn find_prompt(&self, prompt_id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|prompt| prompt.id == prompt_id)
    }

    pub fn find_project(&self, project_id: &str) -> Option<&Project> {
        self.snapshot().find_project(project_id)
    }

    pub fn prompt_count_for_project(&self, project_id: &str) -> usize {
        self.snapshot().prompt_count_for_project(project_id)
    }

    pub fn unassigned_count(&self) -> usize {
        self.snapshot().unassigned_count()
    }

    /// Adds one prompt at the end of the collection.
    ///
    /// Title and content are trimmed and must not be blank. Tags are trimmed
    /// and blank tags dropped; order and duplicates are kept. A `project_id`
    /// naming no known project is dropped, leaving the prompt unassigned.
    ///
    /// # Errors
    /// - `StoreError::Validation` when title or content is blank; nothing is
    ///   mutated.
    /// - `StoreError::Repo` when the slots cannot be written; the prompt stays
    ///   in memory.
    pub fn add_prompt(
        &mut self,
        title: &str,
        content: &str,
        tags: Vec<String>,
        project_id: Option<ProjectId>,
    ) -> Result<Prompt, StoreError> {
        let title = require_text(title, ValidationError::EmptyTitle)?;
        let content = require_text(content, ValidationError::EmptyContent)?;
        let tags = tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        let project_id = project_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .filter(|value| {
                let known = self.find_project(value).is_some();
                if !known {
                    warn!(
                        "event=prompt_add module=store status=warn error_code=unknown_project project_id={value}"
                    );
                }
                known
            });

        let prompt = Prompt::new(title, content, tags, project_id);
        self.prompts.push(prompt.clone());
        info!(
            "event=prompt_add module=store status=ok prompt_id={} tags={}",
            prompt.id,
            prompt.tags.len()
        );
        self.persist()?;
        Ok(prompt)
    }

    /// Removes the prompt with `prompt_id`.
    ///
    /// Returns `Ok(None)` without writing when no such prompt exists.
    pub fn delete_prompt(&mut self, prompt_id: &str) -> Result<Option<Prompt>, StoreError> {
        let Some(position) = self.prompts.iter().position(|p| p.id == prompt_id) else {
            warn!("event=prompt_delete module=store status=skipped error_code=not_found prompt_id={prompt_id}");
            return Ok(None);
        };

        let removed = self.prompts.remove(position);
        info!("event=prompt_delete module=store status=ok prompt_id={prompt_id}");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Adds one project at the end of the collection.
    ///
    /// A blank `color` falls back to `DEFAULT_PROJECT_COLOR`.
    pub fn add_project(&mut self, name: &str, color: &str) -> Result<Project, StoreError> {
        let name = require_text(name, ValidationError::EmptyProjectName)?;
        let color = match color.trim() {
            "" => DEFAULT_PROJECT_COLOR,
            value => value,
        };

        let project = Project::new(name, color);
        self.projects.push(project.clone());
        info!(
            "event=project_add module=store status=ok project_id={}",
            project.id
        );
        self.persist()?;
        Ok(project)
    }

    /// Removes a project and unassigns every prompt that referenced it.
    ///
    /// When the filter pointed at the project it is reset to `All`. Returns
    /// `Ok(None)` without writing when no such project exists.
    pub fn delete_project(
        &mut self,
        project_id: &str,
    ) -> Result<Option<ProjectDeletion>, StoreError> {
        let Some(position) = self.projects.iter().position(|p| p.id == project_id) else {
            warn!("event=project_delete module=store status=skipped error_code=not_found project_id={project_id}");
            return Ok(None);
        };

        let project = self.projects.remove(position);
        let mut unassigned_prompts = 0;
        for prompt in self
            .prompts
            .iter_mut()
            .filter(|prompt| prompt.belongs_to(project_id))
        {
            prompt.project_id = None;
            unassigned_prompts += 1;
        }

        let filter_reset = self.filter.is_project(project_id);
        if filter_reset {
            self.filter = PromptFilter::All;
        }

        info!(
            "event=project_delete module=store status=ok project_id={project_id} unassigned={unassigned_prompts} filter_reset={filter_reset}"
        );
        self.persist()?;
        Ok(Some(ProjectDeletion {
            project,
            unassigned_prompts,
            filter_reset,
        }))
    }

    /// Changes the view filter and returns the filter actually applied.
    ///
    /// A project filter naming an unknown project falls back to `All`.
    pub fn set_filter(&mut self, filter: PromptFilter) -> PromptFilter {
        let effective = match filter {
            PromptFilter::Project(project_id) if self.find_project(&project_id).is_none() => {
                warn!("event=filter_set module=store status=fallback error_code=unknown_project project_id={project_id}");
                PromptFilter::All
            }
            other => other,
        };
        self.filter = effective.clone();
        effective
    }

    /// Prompts visible under the current filter, in insertion order.
    ///
    /// Recomputed on every call.
    pub fn filtered_prompts(&self) -> Vec<&Prompt> {
        self.filter.apply(&self.prompts)
    }

    /// Writes both slots. Called on teardown and after each mutation.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.persist()?;
        Ok(())
    }

    /// Consumes the store and returns its slot adapter.
    pub fn into_slots(self) -> SlotRepository<S> {
        self.slots
    }

    fn persist(&mut self) -> RepoResult<()> {
        let result = self
            .slots
            .save(PROMPTS_SLOT, &self.prompts)
            .and_then(|()| self.slots.save(PROJECTS_SLOT, &self.projects));
        if let Err(err) = &result {
            warn!("event=store_persist module=store status=error error={err}");
        }
        result
    }
}

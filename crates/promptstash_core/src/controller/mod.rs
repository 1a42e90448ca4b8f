//! Event handling between user input, the store and the presenter.
//!
//! # Responsibility
//! - Read form state, invoke store operations and re-render affected regions.
//! - Stage deletes behind an explicit confirmation step.
//! - Surface validation failures inline instead of failing the caller.
//!
//! # Invariants
//! - No store mutation happens without a matching user event.
//! - Deletes run only on `ConfirmDelete` for the staged target.
//! - After every handled event the surfaces reflect current store state.

pub mod confirm;
pub mod forms;

use crate::controller::confirm::{project_delete_message, DeleteTarget, PROMPT_DELETE_MESSAGE};
use crate::controller::forms::{ProjectForm, PromptForm};
use crate::model::filter::PromptFilter;
use crate::model::validation::ValidationError;
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::slot_repo::SlotRepository;
use crate::service::store::{PromptStore, StoreError};
use crate::view::node::{Container, Placeholder};
use crate::view::presenter::{
    render_counts, render_header, render_project_selector, render_projects, render_prompts,
    NO_PROMPTS_MESSAGE,
};
use log::{debug, info, warn};

pub const PROMPT_FORM_ERROR: &str = "Title and Content cannot be empty!";
pub const PROJECT_FORM_ERROR: &str = "Project name cannot be empty!";

/// Regions the presenter writes into and the front end draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surfaces {
    pub projects_list: Container,
    pub prompts_list: Container,
    pub no_prompts: Placeholder,
    pub project_selector: Container,
    pub current_title: Container,
    pub current_count: Container,
    pub all_count: Container,
    pub unassigned_count: Container,
    pub prompt_form_error: Placeholder,
    pub project_form_error: Placeholder,
    /// Visible while a delete is staged; carries the confirmation text.
    pub delete_dialog: Placeholder,
}

impl Default for Surfaces {
    fn default() -> Self {
        Self {
            projects_list: Container::new(),
            prompts_list: Container::new(),
            no_prompts: Placeholder::new(NO_PROMPTS_MESSAGE),
            project_selector: Container::new(),
            current_title: Container::new(),
            current_count: Container::new(),
            all_count: Container::new(),
            unassigned_count: Container::new(),
            prompt_form_error: Placeholder::default(),
            project_form_error: Placeholder::default(),
            delete_dialog: Placeholder::default(),
        }
    }
}

/// User-triggered events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OpenProjectForm,
    CancelProjectForm,
    SelectColor(String),
    CreateProject,
    AddPrompt,
    RequestDeletePrompt(String),
    RequestDeleteProject(String),
    ConfirmDelete,
    CancelDelete,
    /// `"all"`, `"unassigned"` or a project id.
    SelectFilter(String),
}

/// How an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or view changed) and surfaces were re-rendered.
    Rendered,
    /// Input was rejected and an inline message shown.
    Rejected(ValidationError),
    /// A delete was staged and awaits confirmation.
    Staged,
    /// A staged delete or open form was dismissed.
    Cancelled,
    /// Nothing applicable to act on.
    Ignored,
}

/// Owns the store and the presentation state for one session.
pub struct Controller<S: KeyValueStore> {
    store: PromptStore<S>,
    surfaces: Surfaces,
    prompt_form: PromptForm,
    project_form: ProjectForm,
    pending_delete: Option<DeleteTarget>,
}

impl<S: KeyValueStore> Controller<S> {
    /// Takes ownership of a loaded store and renders every surface.
    pub fn new(store: PromptStore<S>) -> Self {
        let mut controller = Self {
            store,
            surfaces: Surfaces::default(),
            prompt_form: PromptForm::default(),
            project_form: ProjectForm::default(),
            pending_delete: None,
        };
        controller.render_all();
        controller
    }

    pub fn store(&self) -> &PromptStore<S> {
        &self.store
    }

    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn prompt_form(&self) -> &PromptForm {
        &self.prompt_form
    }

    pub fn prompt_form_mut(&mut self) -> &mut PromptForm {
        &mut self.prompt_form
    }

    pub fn project_form(&self) -> &ProjectForm {
        &self.project_form
    }

    pub fn project_form_mut(&mut self) -> &mut ProjectForm {
        &mut self.project_form
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        self.pending_delete.as_ref()
    }

    /// Routes one event to its handler.
    ///
    /// # Errors
    /// - `StoreError::Repo` when a mutation could not be persisted. Surfaces
    ///   are still re-rendered from in-memory state first.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Outcome, StoreError> {
        debug!("event=ui_event module=controller kind={}", event_name(&event));
        match event {
            UiEvent::OpenProjectForm => {
                self.project_form.open();
                Ok(Outcome::Rendered)
            }
            UiEvent::CancelProjectForm => {
                self.project_form.close_and_reset();
                self.surfaces.project_form_error.hide(true);
                Ok(Outcome::Cancelled)
            }
            UiEvent::SelectColor(color) => {
                if self.project_form.select_color(color.as_str()) {
                    Ok(Outcome::Rendered)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            UiEvent::CreateProject => self.create_project(),
            UiEvent::AddPrompt => self.add_prompt(),
            UiEvent::RequestDeletePrompt(prompt_id) => {
                Ok(self.request_delete(DeleteTarget::Prompt(prompt_id)))
            }
            UiEvent::RequestDeleteProject(project_id) => {
                Ok(self.request_delete(DeleteTarget::Project(project_id)))
            }
            UiEvent::ConfirmDelete => self.confirm_delete(),
            UiEvent::CancelDelete => Ok(self.cancel_delete()),
            UiEvent::SelectFilter(value) => Ok(self.select_filter(value.as_str())),
        }
    }

    /// Creates a project from the project form.
    pub fn create_project(&mut self) -> Result<Outcome, StoreError> {
        let result = self
            .store
            .add_project(self.project_form.name.as_str(), self.project_form.color());
        match result {
            Ok(project) => {
                info!(
                    "event=project_create module=controller status=ok project_id={}",
                    project.id
                );
                self.project_form.close_and_reset();
                self.surfaces.project_form_error.hide(true);
                self.render_projects_and_counts();
                Ok(Outcome::Rendered)
            }
            Err(StoreError::Validation(err)) => {
                self.surfaces
                    .project_form_error
                    .show_message(PROJECT_FORM_ERROR);
                Ok(Outcome::Rejected(err))
            }
            Err(err) => self.render_after_failure(err),
        }
    }

    /// Adds a prompt from the prompt form.
    pub fn add_prompt(&mut self) -> Result<Outcome, StoreError> {
        let result = self.store.add_prompt(
            self.prompt_form.title.as_str(),
            self.prompt_form.content.as_str(),
            self.prompt_form.tags(),
            self.prompt_form.project_id(),
        );
        match result {
            Ok(_) => {
                self.surfaces.prompt_form_error.hide(true);
                self.prompt_form.clear();
                self.render_all();
                Ok(Outcome::Rendered)
            }
            Err(StoreError::Validation(err)) => {
                self.surfaces
                    .prompt_form_error
                    .show_message(PROMPT_FORM_ERROR);
                Ok(Outcome::Rejected(err))
            }
            Err(err) => self.render_after_failure(err),
        }
    }

    /// Stages `target` and shows the confirmation text.
    ///
    /// Unknown ids stage nothing.
    pub fn request_delete(&mut self, target: DeleteTarget) -> Outcome {
        let message = match &target {
            DeleteTarget::Prompt(prompt_id) => {
                if self.store.find_prompt(prompt_id).is_none() {
                    warn!("event=delete_request module=controller status=skipped error_code=not_found prompt_id={prompt_id}");
                    return Outcome::Ignored;
                }
                PROMPT_DELETE_MESSAGE.to_string()
            }
            DeleteTarget::Project(project_id) => {
                let Some(project) = self.store.find_project(project_id) else {
                    warn!("event=delete_request module=controller status=skipped error_code=not_found project_id={project_id}");
                    return Outcome::Ignored;
                };
                project_delete_message(
                    project.name.as_str(),
                    self.store.prompt_count_for_project(project_id),
                )
            }
        };

        self.surfaces.delete_dialog.show_message(message);
        self.pending_delete = Some(target);
        Outcome::Staged
    }

    /// Performs the staged delete, if any.
    pub fn confirm_delete(&mut self) -> Result<Outcome, StoreError> {
        let Some(target) = self.pending_delete.take() else {
            return Ok(Outcome::Ignored);
        };
        self.surfaces.delete_dialog.hide(true);

        let result = match &target {
            DeleteTarget::Prompt(prompt_id) => self
                .store
                .delete_prompt(prompt_id)
                .map(|removed| removed.is_some()),
            DeleteTarget::Project(project_id) => self
                .store
                .delete_project(project_id)
                .map(|removed| removed.is_some()),
        };

        match result {
            Ok(true) => {
                self.render_all();
                Ok(Outcome::Rendered)
            }
            Ok(false) => Ok(Outcome::Ignored),
            Err(err) => self.render_after_failure(err),
        }
    }

    /// Drops the staged delete without mutating anything.
    pub fn cancel_delete(&mut self) -> Outcome {
        self.surfaces.delete_dialog.hide(true);
        match self.pending_delete.take() {
            Some(_) => Outcome::Cancelled,
            None => Outcome::Ignored,
        }
    }

    /// Switches the prompt list to `value` (`all`, `unassigned` or a project id).
    pub fn select_filter(&mut self, value: &str) -> Outcome {
        let applied = self.store.set_filter(PromptFilter::parse(value));
        debug!("event=filter_select module=controller filter={applied}");
        let snapshot = self.store.snapshot();
        render_prompts(
            snapshot,
            &mut self.surfaces.prompts_list,
            &mut self.surfaces.no_prompts,
        );
        render_header(
            snapshot,
            &mut self.surfaces.current_title,
            &mut self.surfaces.current_count,
        );
        render_projects(snapshot, &mut self.surfaces.projects_list);
        render_counts(
            snapshot,
            &mut self.surfaces.all_count,
            &mut self.surfaces.unassigned_count,
        );
        Outcome::Rendered
    }

    /// Flushes the store and releases the slot adapter.
    pub fn shutdown(self) -> Result<SlotRepository<S>, StoreError> {
        let mut store = self.store;
        store.flush()?;
        info!("event=controller_shutdown module=controller status=ok");
        Ok(store.into_slots())
    }

    /// Rebuilds every surface from current store state.
    pub fn render_all(&mut self) {
        let snapshot = self.store.snapshot();
        render_projects(snapshot, &mut self.surfaces.projects_list);
        render_prompts(
            snapshot,
            &mut self.surfaces.prompts_list,
            &mut self.surfaces.no_prompts,
        );
        render_project_selector(snapshot, &mut self.surfaces.project_selector);
        render_counts(
            snapshot,
            &mut self.surfaces.all_count,
            &mut self.surfaces.unassigned_count,
        );
        render_header(
            snapshot,
            &mut self.surfaces.current_title,
            &mut self.surfaces.current_count,
        );
    }

    fn render_projects_and_counts(&mut self) {
        let snapshot = self.store.snapshot();
        render_projects(snapshot, &mut self.surfaces.projects_list);
        render_project_selector(snapshot, &mut self.surfaces.project_selector);
        render_counts(
            snapshot,
            &mut self.surfaces.all_count,
            &mut self.surfaces.unassigned_count,
        );
    }

    fn render_after_failure(&mut self, err: StoreError) -> Result<Outcome, StoreError> {
        self.render_all();
        Err(err)
    }
}

fn event_name(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::OpenProjectForm => "open_project_form",
        UiEvent::CancelProjectForm => "cancel_project_form",
        UiEvent::SelectColor(_) => "select_color",
        UiEvent::CreateProject => "create_project",
        UiEvent::AddPrompt => "add_prompt",
        UiEvent::RequestDeletePrompt(_) => "request_delete_prompt",
        UiEvent::RequestDeleteProject(_) => "request_delete_project",
        UiEvent::ConfirmDelete => "confirm_delete",
        UiEvent::CancelDelete => "cancel_delete",
        UiEvent::SelectFilter(_) => "select_filter",
    }
}

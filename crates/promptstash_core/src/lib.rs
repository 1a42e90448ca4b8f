//! Core logic for the prompt stash.
//! This crate owns every state and persistence invariant; front ends only
//! feed events to the controller and draw its surfaces.

pub mod config;
pub mod controller;
pub mod db;
pub mod id;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::StashConfig;
pub use controller::confirm::DeleteTarget;
pub use controller::forms::{parse_tags, ProjectForm, PromptForm};
pub use controller::{Controller, Outcome, Surfaces, UiEvent};
pub use id::generate_id;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::filter::PromptFilter;
pub use model::project::{Project, ProjectId, DEFAULT_PROJECT_COLOR, PROJECT_COLOR_OPTIONS};
pub use model::prompt::{Prompt, PromptId};
pub use model::validation::ValidationError;
pub use repo::kv_repo::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use repo::slot_repo::{SlotRepository, PROJECTS_SLOT, PROMPTS_SLOT};
pub use repo::{RepoError, RepoResult};
pub use service::store::{ProjectDeletion, PromptStore, StoreError, StoreSnapshot};
pub use view::node::{Container, DisplayNode, NodeKind, Placeholder};
pub use view::text::render_text;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Whole-collection persistence into named slots.
//!
//! # Responsibility
//! - Encode record collections as JSON arrays under fixed slot keys.
//! - Decode them back, failing open to an empty collection.
//!
//! # Invariants
//! - `load` never returns an error to the caller.
//! - `save` writes one slot with one backend call.

use crate::repo::kv_repo::KeyValueStore;
use crate::repo::RepoResult;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot holding the prompt collection.
pub const PROMPTS_SLOT: &str = "promptStashPrompts";
/// Slot holding the project collection.
pub const PROJECTS_SLOT: &str = "promptStashProjects";

/// Serializing adapter over a key-value backend.
pub struct SlotRepository<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> SlotRepository<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads every record stored under `key`.
    ///
    /// Missing, `null`, unreadable or malformed slots all yield an empty
    /// collection; the latter two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=slot_load module=repo status=error slot={key} error_code=read_failed error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<T>>>(raw.as_str()) {
            Ok(records) => {
                let records = records.unwrap_or_default();
                debug!(
                    "event=slot_load module=repo status=ok slot={key} count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=repo status=error slot={key} error_code=corrupt_slot bytes={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    /// Replaces the slot `key` with the full `records` collection.
    pub fn save<T: Serialize>(&mut self, key: &str, records: &[T]) -> RepoResult<()> {
        let encoded = serde_json::to_string(records)?;
        self.backend.set_item(key, encoded.as_str())?;
        debug!(
            "event=slot_save module=repo status=ok slot={key} count={}",
            records.len()
        );
        Ok(())
    }

    /// Borrows the backend, e.g. to inspect raw slot values.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutably borrows the backend.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

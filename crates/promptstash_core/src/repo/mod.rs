//! Durable slot storage.
//!
//! # Responsibility
//! - Define the key-value contract backing the stash (`KeyValueStore`).
//! - Serialize whole record collections into named slots (`SlotRepository`).
//!
//! # Invariants
//! - Only `SlotRepository` serializes or deserializes stored records.
//! - Each slot write replaces the full collection; slots are independent.

pub mod kv_repo;
pub mod slot_repo;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Slot storage failure.
#[derive(Debug)]
pub enum RepoError {
    /// Backend transport failure.
    Db(DbError),
    /// Records could not be encoded for storage.
    Serialization(serde_json::Error),
    /// Connection was not migrated before use.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode slot records: {err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

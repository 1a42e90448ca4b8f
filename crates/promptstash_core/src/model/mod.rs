//! Prompt stash domain model.
//!
//! # Responsibility
//! - Define the prompt and project records persisted in storage slots.
//! - Define the ephemeral view filter and record validation rules.
//!
//! # Invariants
//! - Records are never mutated after creation, except for the
//!   project-delete cascade clearing `Prompt::project_id`.
//! - Serialized field names are camelCase (`projectId`, `createdAt`).

pub mod filter;
pub mod project;
pub mod prompt;
pub mod validation;

/// Serde helpers for ISO-8601 timestamps with millisecond precision.
pub(crate) mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.as_str())
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Current UTC time truncated to the precision kept in storage.
pub(crate) fn now_millis() -> chrono::DateTime<chrono::Utc> {
    use chrono::SubsecRound;
    chrono::Utc::now().trunc_subsecs(3)
}

//! Use-case services.
//!
//! # Responsibility
//! - Hold application state and apply validated mutations.
//! - Keep callers decoupled from slot encoding and backend details.

pub mod store;

//! Presentation layer.
//!
//! # Responsibility
//! - Project store snapshots into display trees (`presenter`).
//! - Provide the regions a front end draws from (`node`).
//! - Draw trees as terminal text (`text`).

pub mod node;
pub mod presenter;
pub mod text;

//! wellspring-core
//!
//! Pure domain types shared by the screening engine and its collaborators.
//! No scoring logic lives here. This is the vocabulary of completed
//! assessments, the envelope they are persisted in, and the reductions the
//! admin dashboard runs over them.

pub mod error;
pub mod models;

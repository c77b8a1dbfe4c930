//! wellspring-instruments
//!
//! The questionnaire scoring engine. Pure data and pure functions, no
//! I/O beyond optional catalog loading. Holds the built-in instrument
//! definitions, validates submissions, sums scores, and maps totals to a
//! severity band through each instrument's range table.

pub mod catalog;
pub mod definition;
pub mod error;
pub mod instruments;
pub mod registry;
pub mod validation;

use definition::QuestionnaireDefinition;

pub use error::InstrumentError;
pub use registry::Registry;
pub use validation::{Submission, ValidationError, ValidationReport};

/// Trait implemented by each built-in screening instrument.
pub trait Instrument: Send + Sync {
    /// The immutable definition, built once on first access.
    fn definition(&self) -> &QuestionnaireDefinition;

    /// Unique identifier (e.g., "phq9", "gad7").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable title (e.g., "Patient Health Questionnaire (PHQ-9)").
    fn name(&self) -> &str {
        &self.definition().title
    }
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::ghq12::Ghq12),
    ]
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

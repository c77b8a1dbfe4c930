//! Versioned JSON catalogs of additional questionnaires.
//!
//! ```json
//! { "catalog_version": 1, "questionnaires": [ ... ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::definition::QuestionnaireDefinition;
use crate::error::InstrumentError;

/// Current catalog version. Bump this when the definition shape changes.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Missing or 0 = pre-versioned catalog.
    #[serde(default)]
    pub catalog_version: u32,
    pub questionnaires: Vec<QuestionnaireDefinition>,
}

/// Parse a catalog document into its questionnaire definitions.
///
/// Definitions are not checked here; [`crate::Registry::new`] does that
/// when they are loaded.
pub fn parse_catalog(json: &str) -> Result<Vec<QuestionnaireDefinition>, InstrumentError> {
    let catalog: Catalog = serde_json::from_str(json)?;
    if catalog.catalog_version > CURRENT_VERSION {
        return Err(InstrumentError::UnsupportedCatalogVersion {
            found: catalog.catalog_version,
            supported: CURRENT_VERSION,
        });
    }
    tracing::debug!(
        version = catalog.catalog_version,
        questionnaires = catalog.questionnaires.len(),
        "parsed questionnaire catalog"
    );
    Ok(catalog.questionnaires)
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<QuestionnaireDefinition>, InstrumentError> {
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

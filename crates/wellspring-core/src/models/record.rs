use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::result::AssessmentResult;
use crate::error::CoreError;

/// A completed result as handed to the persistence layer.
///
/// The id is opaque and assigned once, when the record is created. It is
/// kept outside [`AssessmentResult`] so scoring stays a pure function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: AssessmentResult,
}

impl ScreeningRecord {
    pub fn new(result: AssessmentResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

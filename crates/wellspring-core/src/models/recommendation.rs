use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How strongly a result should steer the respondent toward support.
///
/// Each severity band in a scoring table maps to exactly one tier. The
/// presentation layer owns the copy shown for a tier; the engine only
/// decides which tier applies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationTier {
    /// Keep current practices; preventive self-care.
    Maintain,
    /// Self-care and monitoring, counseling optional.
    SelfCare,
    /// Professional support is advisable.
    #[default]
    Consult,
    /// Professional help should be sought.
    Seek,
    /// Immediate professional or crisis support.
    Urgent,
}

impl RecommendationTier {
    /// Whether this tier should prompt the respondent to book a session.
    pub fn suggests_booking(self) -> bool {
        self >= RecommendationTier::Consult
    }
}

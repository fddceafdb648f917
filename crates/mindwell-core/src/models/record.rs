use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::assessment::RiskAssessment;

/// An assessment tagged with the session it belongs to, in the shape the
/// session store expects.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub session_id: Uuid,
    pub assessment: RiskAssessment,
    pub assessed_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(session_id: Uuid, assessment: RiskAssessment) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            assessment,
            assessed_at: jiff::Timestamp::now(),
        }
    }

    /// Build a record from a session id as received over the wire.
    pub fn for_session(session_id: &str, assessment: RiskAssessment) -> Result<Self, CoreError> {
        let session_id = Uuid::parse_str(session_id.trim())?;
        Ok(Self::new(session_id, assessment))
    }

    /// Whether the caller should raise an alert for this record.
    pub fn needs_alert(&self) -> bool {
        self.assessment.escalation
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

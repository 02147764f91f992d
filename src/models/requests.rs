use serde::{Deserialize, Serialize};

use crate::models::domain::MatchStatus;

/// A user decision on a profile
///
/// `accept` and `decline` are only meaningful for pending profiles; `undo`
/// returns an accepted or declined profile to the pending pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Decline,
    Undo,
}

impl Decision {
    /// The status this decision moves a profile to
    pub fn target_status(&self) -> MatchStatus {
        match self {
            Decision::Accept => MatchStatus::Accepted,
            Decision::Decline => MatchStatus::Declined,
            Decision::Undo => MatchStatus::Pending,
        }
    }
}

/// Request body for the decision endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
}

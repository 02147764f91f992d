use serde::{Deserialize, Serialize};

use crate::core::controller::{SessionState, StateSnapshot};
use crate::models::domain::Profile;

/// Published state partitioned by decision status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub session: SessionState,
    pub pending: Vec<Profile>,
    pub accepted: Vec<Profile>,
    pub declined: Vec<Profile>,
}

impl From<StateSnapshot> for MatchesResponse {
    fn from(snapshot: StateSnapshot) -> Self {
        Self {
            pending: snapshot.pending(),
            accepted: snapshot.accepted(),
            declined: snapshot.declined(),
            session: snapshot.session,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

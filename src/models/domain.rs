use serde::{Deserialize, Serialize};

/// Decision state of a candidate profile
///
/// Every profile is in exactly one of these states. Profiles enter the
/// collection as `Pending`; `Accepted`/`Declined` are reached only through a
/// user decision and can be reverted to `Pending` via undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Declined,
}

impl MatchStatus {
    /// Durable encoding used by the profiles table
    pub fn as_store_str(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "PENDING",
            MatchStatus::Accepted => "ACCEPTED",
            MatchStatus::Declined => "DECLINED",
        }
    }

    /// Decode the durable representation
    ///
    /// Returns `None` for anything outside the known variant set; the store
    /// layer turns that into a read failure rather than defaulting.
    pub fn from_store_str(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(MatchStatus::Pending),
            "ACCEPTED" => Some(MatchStatus::Accepted),
            "DECLINED" => Some(MatchStatus::Declined),
            _ => None,
        }
    }
}

/// A scored, decision-tracked candidate profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Stable unique identity from the remote record
    pub id: String,
    pub name: String,
    pub age: u8,
    pub city: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub email: String,
    pub education: String,
    pub profession: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub status: MatchStatus,
}

/// The current user's comparison attributes used for scoring
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub age: u8,
    pub city: String,
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self {
            age: 28,
            city: "Mumbai".to_string(),
        }
    }
}

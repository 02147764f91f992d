use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex};

use crate::core::pipeline::{SyncOutcome, SyncPipeline};
use crate::models::{MatchStatus, Profile};
use crate::services::ProfileStore;

/// Transient per-session state, reset on every load attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "isLoading")]
    pub is_loading: bool,
    pub error: Option<String>,
}

/// The published unit of state: session plus the authoritative profile list
///
/// The partitioned views are pure projections of `profiles`; they are
/// recomputed on every call and never stored separately.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot {
    pub session: SessionState,
    pub profiles: Vec<Profile>,
}

impl StateSnapshot {
    pub fn pending(&self) -> Vec<Profile> {
        self.by_status(MatchStatus::Pending)
    }

    pub fn accepted(&self) -> Vec<Profile> {
        self.by_status(MatchStatus::Accepted)
    }

    pub fn declined(&self) -> Vec<Profile> {
        self.by_status(MatchStatus::Declined)
    }

    fn by_status(&self, status: MatchStatus) -> Vec<Profile> {
        self.profiles
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }
}

/// Legal decision transitions
///
/// Accepted and Declined are never reachable from each other directly; the
/// only way back is through Pending via undo.
fn transition_allowed(from: MatchStatus, to: MatchStatus) -> bool {
    matches!(
        (from, to),
        (MatchStatus::Pending, MatchStatus::Accepted)
            | (MatchStatus::Pending, MatchStatus::Declined)
            | (MatchStatus::Accepted, MatchStatus::Pending)
            | (MatchStatus::Declined, MatchStatus::Pending)
    )
}

/// Single owner of the in-memory profile collection and session state
///
/// All mutating operations (`load`, `decide`, `clear_error`) apply under one
/// state mutex; a separate gate keeps at most one load in flight. The state
/// mutex is never held across the pipeline's remote calls, so reads and
/// decisions stay responsive during a refresh (a decision arriving mid-load
/// applies to the current snapshot, last write wins). Every state transition
/// is published on a broadcast channel for presentation-layer subscribers.
pub struct MatchStateController {
    state: Mutex<StateSnapshot>,
    load_gate: Mutex<()>,
    pipeline: SyncPipeline,
    store: Arc<dyn ProfileStore>,
    events: broadcast::Sender<StateSnapshot>,
}

impl MatchStateController {
    pub fn new(pipeline: SyncPipeline, store: Arc<dyn ProfileStore>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            state: Mutex::new(StateSnapshot::default()),
            load_gate: Mutex::new(()),
            pipeline,
            store,
            events,
        }
    }

    /// Current published state
    pub async fn snapshot(&self) -> StateSnapshot {
        self.state.lock().await.clone()
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> broadcast::Receiver<StateSnapshot> {
        self.events.subscribe()
    }

    fn publish(&self, state: &StateSnapshot) {
        // Ignore send errors (no subscribers is OK)
        let _ = self.events.send(state.clone());
    }

    /// Run the sync pipeline and apply its outcome
    ///
    /// Re-running after a failure never corrupts state: a degraded or empty
    /// outcome only replaces profiles with cached data or leaves them alone.
    pub async fn load(&self) {
        let _gate = self.load_gate.lock().await;

        {
            let mut state = self.state.lock().await;
            state.session = SessionState {
                is_loading: true,
                error: None,
            };
            self.publish(&state);
        }

        let outcome = self.pipeline.sync().await;

        let mut state = self.state.lock().await;
        match outcome {
            SyncOutcome::Fetched(profiles) => {
                state.profiles = profiles;
                state.session.error = None;
            }
            SyncOutcome::Degraded { cached, reason } => {
                state.profiles = cached;
                state.session.error = Some(format!("Using offline data - {}", reason));
            }
            SyncOutcome::Empty { reason } => {
                state.session.error = Some(format!("No cached data available - {}", reason));
            }
        }

        state.session.is_loading = false;
        self.publish(&state);
    }

    /// Apply a user decision to a profile
    ///
    /// The durable write happens first; the in-memory status only changes
    /// once the store accepted it, so a failed write leaves both copies on
    /// the previous status. Unknown ids and illegal transitions are silent
    /// no-ops.
    pub async fn decide(&self, id: &str, status: MatchStatus) {
        let mut state = self.state.lock().await;

        let Some(index) = state.profiles.iter().position(|p| p.id == id) else {
            tracing::debug!("Ignoring decision for unknown profile {}", id);
            return;
        };

        let current = state.profiles[index].status;
        if !transition_allowed(current, status) {
            tracing::debug!(
                "Ignoring illegal transition {:?} -> {:?} for {}",
                current,
                status,
                id
            );
            return;
        }

        match self.store.update_status(id, status).await {
            Ok(()) => {
                state.profiles[index].status = status;
                tracing::info!("Profile {} moved to {:?}", id, status);
            }
            Err(e) => {
                tracing::warn!("Failed to persist status for {}: {}", id, e);
                state.session.error = Some(format!("Error updating match status - {}", e));
            }
        }

        self.publish(&state);
    }

    pub async fn accept(&self, id: &str) {
        self.decide(id, MatchStatus::Accepted).await;
    }

    pub async fn decline(&self, id: &str) {
        self.decide(id, MatchStatus::Declined).await;
    }

    /// Return an accepted or declined profile to the pending pool
    pub async fn undo(&self, id: &str) {
        self.decide(id, MatchStatus::Pending).await;
    }

    /// Dismiss the current error notice
    pub async fn clear_error(&self) {
        let mut state = self.state.lock().await;
        state.session.error = None;
        self.publish(&state);
    }
}

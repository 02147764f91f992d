//! MatchMate - match-sourcing and decision-state engine
//!
//! This library provides the core engine behind the MatchMate matchmaking
//! browser: a fetch-with-fallback sync pipeline, a deterministic scoring
//! function, and a serialized decision state machine with derived
//! pending/accepted/declined views.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_score, MatchStateController, StateSnapshot, SyncOutcome, SyncPipeline};
pub use crate::models::{Decision, MatchStatus, Profile, ReferencePoint};

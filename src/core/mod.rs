// Core engine exports
pub mod controller;
pub mod enrich;
pub mod pipeline;
pub mod scoring;

pub use controller::{MatchStateController, SessionState, StateSnapshot};
pub use enrich::{AttributePicker, RandomPicker, EDUCATION_LEVELS, PROFESSIONS};
pub use pipeline::{SyncOutcome, SyncPipeline};
pub use scoring::match_score;

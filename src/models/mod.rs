// Model exports
pub mod domain;
pub mod remote;
pub mod requests;
pub mod responses;

pub use domain::{MatchStatus, Profile, ReferencePoint};
pub use remote::{RemoteBatch, RemoteProfile};
pub use requests::{Decision, DecisionRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse};

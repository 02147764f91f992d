// Service exports
pub mod source;
pub mod store;

pub use source::{
    FailurePolicy, NoFailures, ProfileSource, RandomFailurePolicy, RandomUserClient, SourceError,
};
pub use store::{ProfileStore, SqliteProfileStore, StoreError};

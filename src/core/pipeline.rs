use std::sync::Arc;

use crate::core::enrich::{AttributePicker, EDUCATION_LEVELS, PROFESSIONS};
use crate::core::scoring::match_score;
use crate::models::{MatchStatus, Profile, ReferencePoint, RemoteProfile};
use crate::services::{ProfileSource, ProfileStore};

/// Result of a sync attempt
///
/// Every failure mode of the underlying source and store resolves to one of
/// these variants; `sync` never surfaces a raw fault.
#[derive(Debug)]
pub enum SyncOutcome {
    /// A fresh batch was fetched, scored, and persisted
    Fetched(Vec<Profile>),
    /// The fetch failed but the local cache had data
    Degraded { cached: Vec<Profile>, reason: String },
    /// The fetch failed and the local cache was empty or unreadable
    Empty { reason: String },
}

/// Orchestrates fetch -> normalize -> score -> persist, with cache fallback
///
/// # Pipeline stages
/// 1. Request a batch of raw records from the remote source
/// 2. Map each record to a `Profile`: identity and demographics from the
///    record, education/profession from the enrichment picker, score from
///    the scoring function, status forced to `Pending`
/// 3. Persist the whole batch before reporting success
/// 4. On any failure, fall back to whatever the local store holds
pub struct SyncPipeline {
    source: Arc<dyn ProfileSource>,
    store: Arc<dyn ProfileStore>,
    picker: Arc<dyn AttributePicker>,
    reference: ReferencePoint,
    batch_size: usize,
}

impl SyncPipeline {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        store: Arc<dyn ProfileStore>,
        picker: Arc<dyn AttributePicker>,
        reference: ReferencePoint,
        batch_size: usize,
    ) -> Self {
        Self {
            source,
            store,
            picker,
            reference,
            batch_size,
        }
    }

    pub async fn sync(&self) -> SyncOutcome {
        match self.source.fetch_batch(self.batch_size).await {
            Ok(records) => {
                let profiles: Vec<Profile> = records
                    .into_iter()
                    .map(|record| self.build_profile(record))
                    .collect();

                // The batch must be durable before the caller sees Fetched
                if let Err(e) = self.store.upsert_many(&profiles).await {
                    tracing::warn!("Failed to persist fetched batch: {}", e);
                    return self
                        .fall_back(format!("Failed to persist fetched batch: {}", e))
                        .await;
                }

                tracing::info!("Fetched and persisted {} profiles", profiles.len());
                SyncOutcome::Fetched(profiles)
            }
            Err(e) => {
                tracing::warn!("Profile fetch failed: {}", e);
                self.fall_back(e.to_string()).await
            }
        }
    }

    async fn fall_back(&self, reason: String) -> SyncOutcome {
        match self.store.get_all().await {
            Ok(cached) if !cached.is_empty() => {
                tracing::info!("Falling back to {} cached profiles", cached.len());
                SyncOutcome::Degraded { cached, reason }
            }
            Ok(_) => SyncOutcome::Empty { reason },
            Err(e) => {
                tracing::warn!("Cache read failed during fallback: {}", e);
                SyncOutcome::Empty {
                    reason: format!("{}; cache unavailable: {}", reason, e),
                }
            }
        }
    }

    fn build_profile(&self, record: RemoteProfile) -> Profile {
        let score = match_score(record.dob.age, &record.location.city, &self.reference);
        let name = record.display_name();

        Profile {
            id: record.login.uuid,
            name,
            age: record.dob.age,
            city: record.location.city,
            image_url: record.picture.large,
            email: record.email,
            education: self.picker.pick(EDUCATION_LEVELS).to_string(),
            profession: self.picker.pick(PROFESSIONS).to_string(),
            match_score: score,
            status: MatchStatus::Pending,
        }
    }
}

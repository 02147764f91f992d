use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use thiserror::Error;

use crate::models::{RemoteBatch, RemoteProfile};

/// Errors that can occur when fetching from the remote profile source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Network error - simulated flaky connection")]
    Injected,
}

/// Remote-fetch abstraction returning a batch of raw profile records
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<RemoteProfile>, SourceError>;
}

/// Policy deciding whether a fetch should fail before hitting the network
///
/// Models transient network flakiness. The injected failure takes the same
/// error path as a genuine outage, so callers cannot tell them apart.
pub trait FailurePolicy: Send + Sync {
    fn should_fail(&self) -> bool;
}

/// Fails a configurable fraction of calls
pub struct RandomFailurePolicy {
    rate: f32,
}

impl RandomFailurePolicy {
    pub fn new(rate: f32) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }
}

impl FailurePolicy for RandomFailurePolicy {
    fn should_fail(&self) -> bool {
        rand::thread_rng().gen::<f32>() < self.rate
    }
}

/// Policy that never injects a failure
pub struct NoFailures;

impl FailurePolicy for NoFailures {
    fn should_fail(&self) -> bool {
        false
    }
}

/// HTTP client for the remote profile source
///
/// Talks to a randomuser.me-style API: `GET {base}/api/?results={count}`
/// returning a `results` array of raw profile records.
pub struct RandomUserClient {
    base_url: String,
    client: Client,
    flake: Box<dyn FailurePolicy>,
}

impl RandomUserClient {
    pub fn new(base_url: String, flake: Box<dyn FailurePolicy>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            client,
            flake,
        }
    }
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<RemoteProfile>, SourceError> {
        if self.flake.should_fail() {
            tracing::debug!("Injecting simulated network failure");
            return Err(SourceError::Injected);
        }

        let url = format!("{}/api/", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching {} profiles from {}", count, url);

        let response = self
            .client
            .get(&url)
            .query(&[("results", count)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Failed to fetch profiles: {}",
                response.status()
            )));
        }

        let batch: RemoteBatch = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(format!("Failed to parse batch: {}", e)))?;

        tracing::debug!("Fetched {} raw profile records", batch.results.len());

        Ok(batch.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_rate_clamped() {
        let always = RandomFailurePolicy::new(2.0);
        for _ in 0..20 {
            assert!(always.should_fail());
        }

        let never = RandomFailurePolicy::new(-1.0);
        for _ in 0..20 {
            assert!(!never.should_fail());
        }
    }

    #[test]
    fn test_no_failures_policy() {
        let policy = NoFailures;
        assert!(!policy.should_fail());
    }

    #[tokio::test]
    async fn test_injected_failure_skips_network() {
        // Unroutable base URL: if the policy fires, no request is made
        let client = RandomUserClient::new(
            "http://127.0.0.1:1".to_string(),
            Box::new(RandomFailurePolicy::new(1.0)),
        );

        let result = client.fetch_batch(10).await;
        assert!(matches!(result, Err(SourceError::Injected)));
    }
}

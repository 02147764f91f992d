use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use thiserror::Error;

use crate::models::{MatchStatus, Profile};

/// Errors that can occur when interacting with the local profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Unknown match status in store: {0:?}")]
    UnknownStatus(String),

    #[error("Out-of-range {0} in store: {1}")]
    OutOfRange(&'static str, i64),
}

/// Durable keyed storage for profiles
///
/// The store is a cache/backup of the last good batch, not a second source
/// of truth during a session. All operations are idempotent under
/// replace-by-id semantics.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Profile>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>, StoreError>;
    async fn upsert(&self, profile: &Profile) -> Result<(), StoreError>;
    async fn upsert_many(&self, profiles: &[Profile]) -> Result<(), StoreError>;
    async fn update_status(&self, id: &str, status: MatchStatus) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// SQLite-backed profile store
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id          TEXT PRIMARY KEY,
        name        TEXT NOT NULL,
        age         INTEGER NOT NULL,
        city        TEXT NOT NULL,
        image_url   TEXT NOT NULL,
        email       TEXT NOT NULL,
        education   TEXT NOT NULL,
        profession  TEXT NOT NULL,
        match_score INTEGER NOT NULL,
        status      TEXT NOT NULL
    )
"#;

impl SqliteProfileStore {
    /// Open (or create) the database at the given URL and ensure the schema
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// In-memory store for tests
    pub async fn in_memory() -> Result<Self, StoreError> {
        // A single pinned connection keeps the in-memory database alive
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(sqlx::Error::from)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> Result<Profile, StoreError> {
        let status_raw: String = row.get("status");
        let status = MatchStatus::from_store_str(&status_raw)
            .ok_or(StoreError::UnknownStatus(status_raw))?;

        // A corrupted row surfaces as a read failure, not a wrapped value
        let age_raw: i64 = row.get("age");
        let age = u8::try_from(age_raw).map_err(|_| StoreError::OutOfRange("age", age_raw))?;

        let score_raw: i64 = row.get("match_score");
        let match_score =
            u8::try_from(score_raw).map_err(|_| StoreError::OutOfRange("match_score", score_raw))?;

        Ok(Profile {
            id: row.get("id"),
            name: row.get("name"),
            age,
            city: row.get("city"),
            image_url: row.get("image_url"),
            email: row.get("email"),
            education: row.get("education"),
            profession: row.get("profession"),
            match_score,
            status,
        })
    }
}

const UPSERT: &str = r#"
    INSERT OR REPLACE INTO profiles
        (id, name, age, city, image_url, email, education, profession, match_score, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

fn bind_profile<'q>(
    query: sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>,
    profile: &'q Profile,
) -> sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>> {
    query
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(&profile.city)
        .bind(&profile.image_url)
        .bind(&profile.email)
        .bind(&profile.education)
        .bind(&profile.profession)
        .bind(i64::from(profile.match_score))
        .bind(profile.status.as_store_str())
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get_all(&self) -> Result<Vec<Profile>, StoreError> {
        let rows = sqlx::query("SELECT * FROM profiles")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_profile).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query("SELECT * FROM profiles WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), StoreError> {
        bind_profile(sqlx::query(UPSERT), profile)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn upsert_many(&self, profiles: &[Profile]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for profile in profiles {
            bind_profile(sqlx::query(UPSERT), profile)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!("Persisted batch of {} profiles", profiles.len());

        Ok(())
    }

    async fn update_status(&self, id: &str, status: MatchStatus) -> Result<(), StoreError> {
        sqlx::query("UPDATE profiles SET status = ?1 WHERE id = ?2")
            .bind(status.as_store_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Updated status of {} to {:?}", id, status);

        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM profiles").execute(&self.pool).await?;
        Ok(())
    }
}

//! Game store trait and implementations

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::types::{GameRecord, League};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

/// Abstract trait for game record storage
#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Look up the stored record for a league
    async fn find_by_league(&self, league: League) -> Result<Option<GameRecord>>;

    /// All stored records
    async fn list_all(&self) -> Result<Vec<GameRecord>>;

    /// Insert a record. Upserts on league, so two racing first-syncs
    /// converge on a single row instead of violating the one-per-league
    /// invariant.
    async fn insert(&self, record: &GameRecord) -> Result<()>;

    /// Overwrite payload and last_updated in place, preserving identity
    async fn update_payload(
        &self,
        id: Uuid,
        payload: &Value,
        last_updated: DateTime<Utc>,
    ) -> Result<()>;
}

/// Postgres-backed game store
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    /// Connect a pool and apply migrations
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("Game store connected");

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn record_from_row(row: &PgRow) -> Result<GameRecord> {
        let league: String = row.try_get("league")?;
        let league = league
            .parse::<League>()
            .map_err(|e| StoreError::corruption(format!("bad league column: {}", e)))?;

        Ok(GameRecord {
            id: row.try_get("id")?,
            league,
            last_updated: row.try_get("last_updated")?,
            payload: row.try_get("payload")?,
        })
    }
}

#[async_trait::async_trait]
impl GameStore for PgGameStore {
    async fn find_by_league(&self, league: League) -> Result<Option<GameRecord>> {
        let row = sqlx::query(
            "SELECT id, league, last_updated, payload FROM games WHERE league = $1",
        )
        .bind(league.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::record_from_row).transpose()
    }

    async fn list_all(&self) -> Result<Vec<GameRecord>> {
        let rows = sqlx::query("SELECT id, league, last_updated, payload FROM games ORDER BY league")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::record_from_row).collect()
    }

    async fn insert(&self, record: &GameRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO games (id, league, last_updated, payload)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (league)
            DO UPDATE SET
                payload = EXCLUDED.payload,
                last_updated = EXCLUDED.last_updated
            "#,
        )
        .bind(record.id)
        .bind(record.league.as_str())
        .bind(record.last_updated)
        .bind(&record.payload)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_payload(
        &self,
        id: Uuid,
        payload: &Value,
        last_updated: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query("UPDATE games SET payload = $2, last_updated = $3 WHERE id = $1")
            .bind(id)
            .bind(payload)
            .bind(last_updated)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// In-memory game store (for testing)
///
/// Clones share the same underlying records, so a test can hand one
/// handle to the orchestrator and inspect through another.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    records: Arc<tokio::sync::Mutex<Vec<GameRecord>>>,
}

impl MemoryGameStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GameStore for MemoryGameStore {
    async fn find_by_league(&self, league: League) -> Result<Option<GameRecord>> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.league == league).cloned())
    }

    async fn list_all(&self) -> Result<Vec<GameRecord>> {
        let records = self.records.lock().await;
        Ok(records.clone())
    }

    async fn insert(&self, record: &GameRecord) -> Result<()> {
        let mut records = self.records.lock().await;

        // Same conflict semantics as the Postgres backend: a second
        // insert for a league folds into the existing row
        if let Some(existing) = records.iter_mut().find(|r| r.league == record.league) {
            existing.payload = record.payload.clone();
            existing.last_updated = record.last_updated;
        } else {
            records.push(record.clone());
        }

        Ok(())
    }

    async fn update_payload(
        &self,
        id: Uuid,
        payload: &Value,
        last_updated: DateTime<Utc>,
    ) -> Result<()> {
        let mut records = self.records.lock().await;

        if let Some(existing) = records.iter_mut().find(|r| r.id == id) {
            existing.payload = payload.clone();
            existing.last_updated = last_updated;
        }

        Ok(())
    }
}

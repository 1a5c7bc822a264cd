//! SQLite-backed booking counter store

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::CounterStorePort;
use async_trait::async_trait;
use chrono::Utc;
use domain::value_objects::SeatCounts;
use rusqlite::{OptionalExtension, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// Durable per-destination booking counters in SQLite
///
/// One row per destination; counts only ever grow. Writers are serialized
/// through the pool within this process, nothing coordinates counters
/// across independent deployments.
#[derive(Debug, Clone)]
pub struct SqliteCounterStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteCounterStore {
    /// Create a new SQLite counter store
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterStorePort for SqliteCounterStore {
    #[instrument(skip(self))]
    async fn get(&self, destination: &str) -> Result<Option<SeatCounts>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let destination = destination.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let counts = conn
                .query_row(
                    "SELECT sprinter_count, vip_count FROM booking_counters
                     WHERE destination = ?1",
                    [&destination],
                    |row| {
                        Ok(SeatCounts {
                            sprinter: row.get(0)?,
                            vip: row.get(1)?,
                        })
                    },
                )
                .optional()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(counts)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, counts))]
    async fn put(&self, destination: &str, counts: SeatCounts) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let destination = destination.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO booking_counters (destination, sprinter_count, vip_count, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(destination) DO UPDATE SET
                    sprinter_count = excluded.sprinter_count,
                    vip_count = excluded.vip_count,
                    updated_at = excluded.updated_at",
                params![
                    destination,
                    counts.sprinter,
                    counts.vip,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Saved booking counters");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

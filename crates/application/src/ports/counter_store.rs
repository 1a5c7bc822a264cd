//! Counter store port
//!
//! Durable per-destination booking counters backing reference generation.
//! The reference generator reads the counts for a destination, increments
//! one tier, and writes the mapping back before handing out a reference.

use async_trait::async_trait;
use domain::value_objects::SeatCounts;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the durable booking-counter store
///
/// Counts are monotonically non-decreasing per (destination, bus type) for
/// the lifetime of the store; nothing ever resets them. The store only
/// serializes writers within one process - independent deployments keep
/// independent counters, which is accepted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CounterStorePort: Send + Sync {
    /// Read the counters for a destination; `None` if never booked
    async fn get(&self, destination: &str) -> Result<Option<SeatCounts>, ApplicationError>;

    /// Persist the counters for a destination
    async fn put(&self, destination: &str, counts: SeatCounts) -> Result<(), ApplicationError>;
}

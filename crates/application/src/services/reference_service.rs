//! Booking reference assignment
//!
//! Produces the human-readable references travelers quote when paying, and
//! durably advances the per-destination counters behind them.

use std::sync::Arc;

use chrono::Utc;
use domain::value_objects::{BookingReference, BusType, SeatCounts};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::CounterStorePort;

/// Assigns booking references backed by an injected counter store
///
/// A reference looks like `KUM/101-48213`: destination short code, tier
/// prefix (`10` sprinter / `50` vip), seat index capped at the tier
/// capacity, and the last five digits of the assignment timestamp in
/// epoch milliseconds. References are only probabilistically unique across
/// independent deployments - there is no central sequence, and the time
/// suffix is what keeps two clients from colliding. Known property of the
/// scheme, kept as-is.
#[derive(Debug, Clone)]
pub struct ReferenceService<C: CounterStorePort> {
    counters: Arc<C>,
}

impl<C: CounterStorePort> ReferenceService<C> {
    /// Create a reference service on top of a counter store
    pub fn new(counters: Arc<C>) -> Self {
        Self { counters }
    }

    /// Assign the next reference for a destination and tier
    ///
    /// Increments the stored counter even if the caller later fails; there
    /// is no rollback. The counter write lands before the reference is
    /// returned.
    #[instrument(skip(self, short_code), fields(destination = %destination, bus_type = %bus_type))]
    pub async fn assign(
        &self,
        destination: &str,
        short_code: &str,
        bus_type: BusType,
    ) -> Result<BookingReference, ApplicationError> {
        let mut counts = self
            .counters
            .get(destination)
            .await?
            .unwrap_or_default();

        let count = counts.record(bus_type);
        let seat = SeatCounts::seat_index(count, bus_type);
        let suffix = time_suffix(Utc::now().timestamp_millis());

        let reference = BookingReference::new(format!(
            "{short_code}/{}{seat}-{suffix}",
            bus_type.reference_prefix()
        ))?;

        self.counters.put(destination, counts).await?;

        debug!(reference = %reference, count, "Assigned booking reference");
        Ok(reference)
    }
}

/// Last five digits of an epoch-millisecond timestamp, zero-padded
fn time_suffix(millis: i64) -> String {
    format!("{:05}", millis.rem_euclid(100_000))
}

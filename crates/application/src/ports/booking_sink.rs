//! Booking sink port
//!
//! The external persistence collaborator that receives finished bookings.
//! The save is best-effort: the orchestrator fires it off without gating
//! the user-visible flow on the outcome.

use async_trait::async_trait;
use domain::entities::Booking;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forwarding bookings to the remote store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingSinkPort: Send + Sync {
    /// Append one booking record; at most one attempt per submission
    async fn append(&self, booking: &Booking) -> Result<(), ApplicationError>;

    /// Whether the collaborator is currently reachable
    async fn is_healthy(&self) -> bool;
}

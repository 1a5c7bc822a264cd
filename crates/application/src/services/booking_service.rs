//! Booking submission orchestration
//!
//! Validates a raw submission, resolves the fare, assigns a reference, and
//! fires the best-effort remote save. One submission is one sequential unit
//! of work; only the remote save runs detached.

use std::sync::Arc;

use domain::catalog::DestinationCatalog;
use domain::entities::{Booking, BookingSource};
use domain::value_objects::{BusType, PhoneNumber};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{BookingSinkPort, CounterStorePort};
use crate::services::payment_notice;
use crate::services::ReferenceService;

/// Raw submission input, before any validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Traveler's full name
    pub full_name: String,
    /// Traveler's phone number, as typed
    pub phone: String,
    /// Name the MoMo payment will arrive under
    pub payer_name: String,
    /// Destination name
    pub destination: String,
    /// Boarding point
    pub pickup_point: String,
    /// Service tier
    pub bus_type: BusType,
    /// Where the submission came from
    #[serde(default)]
    pub source: BookingSource,
}

/// Diagnostics hook for the detached remote save
///
/// The orchestrator resolves this once the save task finishes. Callers may
/// await it to observe the outcome (tests, operational tooling) but must
/// never gate the booking flow on it - the flow has already reported
/// success by the time this resolves.
#[derive(Debug)]
pub struct RemoteSave {
    outcome: oneshot::Receiver<Result<(), ApplicationError>>,
}

impl RemoteSave {
    /// Await the save outcome; `None` when no sink is configured
    pub async fn outcome(self) -> Option<Result<(), ApplicationError>> {
        self.outcome.await.ok()
    }
}

/// A successful submission: the booking plus everything the caller needs to
/// walk the traveler through manual payment
#[derive(Debug)]
pub struct BookingConfirmation {
    /// The immutable booking record
    pub booking: Booking,
    /// Pre-built manual-payment confirmation text
    pub payment_message: String,
    /// Diagnostics hook for the detached save
    pub remote_save: RemoteSave,
}

/// Orchestrates booking submissions
pub struct BookingService<C: CounterStorePort> {
    catalog: Arc<DestinationCatalog>,
    references: ReferenceService<C>,
    sink: Option<Arc<dyn BookingSinkPort>>,
}

impl<C: CounterStorePort> std::fmt::Debug for BookingService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingService")
            .field("destinations", &self.catalog.len())
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl<C: CounterStorePort + 'static> BookingService<C> {
    /// Create a booking service without a remote sink
    pub fn new(catalog: Arc<DestinationCatalog>, counters: Arc<C>) -> Self {
        Self {
            catalog,
            references: ReferenceService::new(counters),
            sink: None,
        }
    }

    /// Attach the remote persistence collaborator
    pub fn with_sink(mut self, sink: Arc<dyn BookingSinkPort>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Submit one booking
    ///
    /// Validation failures leave the counters untouched and skip the remote
    /// save. Once a reference is assigned the counter mutation sticks, and
    /// the remote save can no longer fail the submission: its errors are
    /// logged and surfaced only through [`RemoteSave`].
    #[instrument(skip(self, request), fields(destination = %request.destination, bus_type = %request.bus_type))]
    pub async fn submit(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, ApplicationError> {
        let full_name = non_empty(&request.full_name, "full name")?;
        let phone_raw = non_empty(&request.phone, "phone")?;
        let payer_name = non_empty(&request.payer_name, "payer name")?;
        let destination = non_empty(&request.destination, "destination")?;
        let pickup_point = non_empty(&request.pickup_point, "pickup point")?;

        let phone = PhoneNumber::new(phone_raw)?;

        let entry = self
            .catalog
            .entry(destination)
            .ok_or_else(|| DomainError::UnknownDestination(destination.to_string()))?;
        let price = entry.price_for(request.bus_type);
        if !price.is_payable() {
            return Err(DomainError::no_valid_price(destination, request.bus_type).into());
        }

        // Observable side effect: the counter advances here and is not
        // rolled back by anything that happens afterwards.
        let reference = self
            .references
            .assign(destination, &entry.short_code, request.bus_type)
            .await?;

        let booking = Booking::new(
            full_name,
            phone,
            payer_name,
            destination,
            pickup_point,
            request.bus_type,
            price,
            reference,
            request.source,
        );

        let payment_message = payment_notice::handoff_message(&booking);
        let remote_save = self.spawn_save(&booking);

        Ok(BookingConfirmation {
            booking,
            payment_message,
            remote_save,
        })
    }

    /// Fire the best-effort save without blocking the submission
    fn spawn_save(&self, booking: &Booking) -> RemoteSave {
        let (tx, rx) = oneshot::channel();

        if let Some(sink) = &self.sink {
            let sink = Arc::clone(sink);
            let booking = booking.clone();
            tokio::spawn(async move {
                let result = sink.append(&booking).await;
                if let Err(e) = &result {
                    warn!(
                        reference = %booking.reference,
                        error = %e,
                        "Booking not saved to remote store"
                    );
                }
                // Receiver may already be gone; that is fine.
                let _ = tx.send(result);
            });
        } else {
            debug!("No booking sink configured, skipping remote save");
            drop(tx);
        }

        RemoteSave { outcome: rx }
    }
}

/// Trim a free-text field, rejecting empties
fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

//! Application state shared across handlers

use std::sync::Arc;

use application::ports::BookingSinkPort;
use application::services::BookingService;
use domain::catalog::DestinationCatalog;
use infrastructure::SqliteCounterStore;
use integration_whatsapp::PaymentHandoff;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Booking submission pipeline
    pub booking_service: Arc<BookingService<SqliteCounterStore>>,
    /// Destination catalog for listings
    pub catalog: Arc<DestinationCatalog>,
    /// WhatsApp/MoMo payment handoff builder
    pub handoff: Arc<PaymentHandoff>,
    /// Remote sink handle for the readiness probe; `None` when the
    /// spreadsheet bridge is not configured
    pub booking_sink: Option<Arc<dyn BookingSinkPort>>,
}

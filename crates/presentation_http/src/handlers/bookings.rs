//! Booking submission handler

use axum::{Json, extract::State, http::StatusCode};
use application::services::BookingRequest;
use domain::entities::{Booking, BookingSource};
use domain::value_objects::BusType;
use integration_whatsapp::MomoInstructions;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Booking submission body
#[derive(Debug, Deserialize)]
pub struct SubmitBookingRequest {
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
    /// Where the submission came from (defaults to the web form)
    #[serde(default)]
    pub source: BookingSource,
}

/// Everything the traveler needs to complete the manual payment
#[derive(Debug, Serialize)]
pub struct PaymentDetails {
    /// Pre-built confirmation message
    pub message: String,
    /// wa.me deep link carrying the escaped message
    pub whatsapp_url: String,
    /// Manual MoMo payment steps
    pub momo: MomoInstructions,
}

/// Booking response body
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// The recorded booking
    pub booking: Booking,
    /// Payment handoff details
    pub payment: PaymentDetails,
}

/// Handle a booking submission
///
/// Validation failures return 400 with the validation message. The remote
/// save never influences the response: it runs detached and its failures
/// are only logged.
#[instrument(skip(state, request), fields(destination = %request.destination))]
pub async fn submit_booking(
    State(state): State<AppState>,
    Json(request): Json<SubmitBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let confirmation = state
        .booking_service
        .submit(BookingRequest {
            full_name: request.full_name,
            phone: request.phone,
            payer_name: request.payer_name,
            destination: request.destination,
            pickup_point: request.pickup_point,
            bus_type: request.bus_type,
            source: request.source,
        })
        .await?;

    let payment = PaymentDetails {
        whatsapp_url: state.handoff.deep_link(&confirmation.payment_message),
        momo: state.handoff.momo_instructions(&confirmation.booking),
        message: confirmation.payment_message,
    };

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking: confirmation.booking,
            payment,
        }),
    ))
}

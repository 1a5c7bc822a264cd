//! Payment handoff message formatting
//!
//! Builds the plain-text notice a traveler forwards to the operator when
//! confirming a manual MoMo payment. URL escaping and the messaging deep
//! link are the notification integration's concern; this module only owes
//! accurate text.

use domain::entities::Booking;

/// Format the manual-payment confirmation message for a booking
///
/// Interpolates the traveler's details, the destination and pickup, the
/// tier, the formatted amount, the reference, and the payer name, in the
/// wording the operator's dispatchers expect.
pub fn handoff_message(booking: &Booking) -> String {
    let lines = [
        "Hello, I just made a booking and will send my MoMo screenshot.".to_string(),
        format!("Name: {}", booking.full_name),
        format!("Phone: {}", booking.phone),
        format!("Destination: {}", booking.destination),
        format!("Pickup: {}", booking.pickup_point),
        format!("Bus: {}", booking.bus_type.label()),
        format!("Amount: {}", booking.price),
        format!("Reference: {}", booking.reference),
        format!("Payer: {}", booking.payer_name),
        String::new(),
        "I'll attach the payment screenshot here.".to_string(),
    ];
    lines.join("\n")
}

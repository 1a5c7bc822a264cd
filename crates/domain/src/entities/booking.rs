//! Booking entity - one traveler's reservation with price and reference

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BookingReference, BusType, PhoneNumber, Price};

/// Where a booking was captured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSource {
    /// Submitted through the public booking form
    #[default]
    Web,
    /// Submitted directly against the API
    Api,
}

impl BookingSource {
    /// Tag written to the spreadsheet row
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }
}

impl std::fmt::Display for BookingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A confirmed reservation request
///
/// Created once at submission time, after validation and reference
/// assignment, and never mutated afterwards. Persistence of the record is
/// delegated to the spreadsheet collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Traveler's full name
    pub full_name: String,
    /// Traveler's phone number
    pub phone: PhoneNumber,
    /// Name the MoMo payment will arrive under
    pub payer_name: String,
    /// Destination name as listed in the catalog
    pub destination: String,
    /// Boarding point chosen by the traveler
    pub pickup_point: String,
    /// Service tier
    pub bus_type: BusType,
    /// Resolved fare
    pub price: Price,
    /// Assigned booking reference
    pub reference: BookingReference,
    /// When the booking was created
    pub created_at: DateTime<Utc>,
    /// Where the booking was captured
    #[serde(default)]
    pub source: BookingSource,
}

impl Booking {
    /// Create a booking stamped with the current time
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: impl Into<String>,
        phone: PhoneNumber,
        payer_name: impl Into<String>,
        destination: impl Into<String>,
        pickup_point: impl Into<String>,
        bus_type: BusType,
        price: Price,
        reference: BookingReference,
        source: BookingSource,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone,
            payer_name: payer_name.into(),
            destination: destination.into(),
            pickup_point: pickup_point.into(),
            bus_type,
            price,
            reference,
            created_at: Utc::now(),
            source,
        }
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {})",
            self.reference, self.destination, self.bus_type, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            "Ama Serwaa",
            PhoneNumber::new("0591234567").unwrap(),
            "Kofi Serwaa",
            "Kumasi",
            "Circle Odawna",
            BusType::Sprinter,
            Price::new(117.0),
            BookingReference::new("KUM/101-48213").unwrap(),
            BookingSource::Web,
        )
    }

    #[test]
    fn new_booking_is_stamped() {
        let before = Utc::now();
        let booking = sample_booking();
        assert!(booking.created_at >= before);
        assert!(booking.created_at <= Utc::now());
    }

    #[test]
    fn source_tags() {
        assert_eq!(BookingSource::Web.tag(), "web");
        assert_eq!(BookingSource::Api.tag(), "api");
        assert_eq!(BookingSource::default(), BookingSource::Web);
    }

    #[test]
    fn display_mentions_reference_and_destination() {
        let booking = sample_booking();
        let text = booking.to_string();
        assert!(text.contains("KUM/101-48213"));
        assert!(text.contains("Kumasi"));
        assert!(text.contains("GHS 117.00"));
    }

    #[test]
    fn serialization_roundtrip() {
        let booking = sample_booking();
        let json = serde_json::to_string(&booking).unwrap();
        let parsed: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.full_name, "Ama Serwaa");
        assert_eq!(parsed.reference, booking.reference);
        assert_eq!(parsed.price, booking.price);
        assert_eq!(parsed.source, BookingSource::Web);
    }

    #[test]
    fn source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingSource::Web).unwrap(),
            "\"web\""
        );
    }
}

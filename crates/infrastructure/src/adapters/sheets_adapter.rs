//! Sheets adapter - Implements BookingSinkPort using integration_sheets

use application::error::ApplicationError;
use application::ports::BookingSinkPort;
use async_trait::async_trait;
use domain::entities::Booking;
use integration_sheets::{HttpSheetsClient, SheetsClient};
use tracing::{debug, instrument};

use crate::config::SheetsAppConfig;

/// Forwards bookings to the spreadsheet bridge as appended rows
#[derive(Debug)]
pub struct SheetsBookingSink {
    client: HttpSheetsClient,
}

impl SheetsBookingSink {
    /// Create a sink around an existing bridge client
    pub const fn new(client: HttpSheetsClient) -> Self {
        Self { client }
    }

    /// Create a sink from the sheets section of the configuration
    pub fn from_config(config: &SheetsAppConfig) -> Result<Self, ApplicationError> {
        let client = HttpSheetsClient::new(&config.to_client_config())
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Flatten a booking into the sheet's column order
    fn booking_row(booking: &Booking) -> Vec<String> {
        vec![
            booking.created_at.to_rfc3339(),
            booking.reference.to_string(),
            booking.full_name.clone(),
            booking.phone.to_string(),
            booking.destination.clone(),
            booking.pickup_point.clone(),
            booking.bus_type.label().to_string(),
            format!("{:.2}", booking.price.amount()),
            booking.payer_name.clone(),
            booking.source.to_string(),
        ]
    }
}

#[async_trait]
impl BookingSinkPort for SheetsBookingSink {
    #[instrument(skip(self, booking), fields(reference = %booking.reference))]
    async fn append(&self, booking: &Booking) -> Result<(), ApplicationError> {
        self.client
            .append_row(&Self::booking_row(booking))
            .await
            .map_err(|e| ApplicationError::RemoteSave(e.to_string()))?;

        debug!("Booking appended to sheet");
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use domain::entities::BookingSource;
    use domain::value_objects::{BookingReference, BusType, PhoneNumber, Price};

    use super::*;

    fn booking() -> Booking {
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
    fn row_follows_the_sheet_column_order() {
        let row = SheetsBookingSink::booking_row(&booking());
        assert_eq!(row.len(), 10);
        assert_eq!(row[1], "KUM/101-48213");
        assert_eq!(row[2], "Ama Serwaa");
        assert_eq!(row[3], "0591234567");
        assert_eq!(row[4], "Kumasi");
        assert_eq!(row[5], "Circle Odawna");
        assert_eq!(row[6], "Sprinter");
        assert_eq!(row[7], "117.00");
        assert_eq!(row[8], "Kofi Serwaa");
        assert_eq!(row[9], "web");
    }

    #[test]
    fn row_timestamp_is_rfc3339() {
        let row = SheetsBookingSink::booking_row(&booking());
        assert!(chrono::DateTime::parse_from_rfc3339(&row[0]).is_ok());
    }
}

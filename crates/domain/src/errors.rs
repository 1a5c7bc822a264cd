//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required booking field was empty after trimming
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Phone string did not match an accepted Ghana format
    #[error("invalid phone format: {0}")]
    InvalidPhoneNumber(String),

    /// Destination is not part of the catalog
    #[error("unknown destination: {0}")]
    UnknownDestination(String),

    /// No payable price could be resolved for the selection
    #[error("no valid price for {destination} ({bus_type})")]
    NoValidPrice {
        destination: String,
        bus_type: String,
    },

    /// Booking reference string did not match the expected shape
    #[error("invalid booking reference: {0}")]
    InvalidReference(String),

    /// Catalog entry failed load-time validation
    #[error("invalid catalog entry for {destination}: {reason}")]
    InvalidCatalog { destination: String, reason: String },
}

impl DomainError {
    /// Create a no-valid-price error
    pub fn no_valid_price(destination: impl Into<String>, bus_type: impl ToString) -> Self {
        Self::NoValidPrice {
            destination: destination.into(),
            bus_type: bus_type.to_string(),
        }
    }
}

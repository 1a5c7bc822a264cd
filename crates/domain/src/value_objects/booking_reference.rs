//! Booking reference value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A human-readable booking reference
///
/// Shape: `{destination code}/{tier prefix}{seat index}-{time suffix}`,
/// e.g. `KUM/101-48213`. The tier prefix is two digits (`10` sprinter,
/// `50` vip), the seat index one or two digits, the time suffix the last
/// five digits of the epoch-millisecond timestamp at assignment.
///
/// References are only probabilistically unique: independent clients share
/// no sequence, and collisions are avoided only by the time suffix. That is
/// an accepted property of the scheme, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference {
    value: String,
}

impl BookingReference {
    /// Create a reference, validating its shape
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        let Some((code, rest)) = value.split_once('/') else {
            return Err(DomainError::InvalidReference(value));
        };
        let Some((number, suffix)) = rest.split_once('-') else {
            return Err(DomainError::InvalidReference(value));
        };

        let code_ok = !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric());
        // two-digit prefix plus a 1-2 digit seat index
        let number_ok =
            (3..=4).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit());
        let suffix_ok = suffix.len() == 5 && suffix.chars().all(|c| c.is_ascii_digit());

        if !(code_ok && number_ok && suffix_ok) {
            return Err(DomainError::InvalidReference(value));
        }

        Ok(Self { value })
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The destination short code part
    pub fn destination_code(&self) -> &str {
        self.value.split_once('/').map_or("", |(code, _)| code)
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for BookingReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

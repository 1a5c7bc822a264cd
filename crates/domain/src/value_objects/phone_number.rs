//! Phone number value object for Ghana mobile numbers

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated Ghana phone number
///
/// Two formats are accepted, matching what MoMo transfers use in practice:
/// - local: `0` followed by exactly 9 digits (e.g. 0598106751)
/// - international without `+`: `233` followed by exactly 9 digits
///   (e.g. 233598106751)
///
/// Whitespace is stripped before validation. Anything else (symbols,
/// `+` prefixes, dashes, wrong length) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Create a new phone number, stripping whitespace and validating
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let raw = number.into();
        let value: String = raw.split_whitespace().collect();

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidPhoneNumber(raw));
        }

        let valid = (value.len() == 10 && value.starts_with('0'))
            || (value.len() == 12 && value.starts_with("233"));
        if !valid {
            return Err(DomainError::InvalidPhoneNumber(raw));
        }

        Ok(Self { value })
    }

    /// Get the normalized number as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check if this number is in international (233...) form
    pub fn is_international(&self) -> bool {
        self.value.len() == 12
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_number_is_accepted() {
        let phone = PhoneNumber::new("0598106751").unwrap();
        assert_eq!(phone.as_str(), "0598106751");
        assert!(!phone.is_international());
    }

    #[test]
    fn international_number_is_accepted() {
        let phone = PhoneNumber::new("233598106751").unwrap();
        assert_eq!(phone.as_str(), "233598106751");
        assert!(phone.is_international());
    }

    #[test]
    fn number_with_spaces_is_normalized() {
        let phone = PhoneNumber::new("059 123 4567").unwrap();
        assert_eq!(phone.as_str(), "0591234567");
    }

    #[test]
    fn plus_prefix_is_rejected() {
        assert!(PhoneNumber::new("+233598106751").is_err());
    }

    #[test]
    fn dashes_are_rejected() {
        assert!(PhoneNumber::new("059-810-6751").is_err());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(PhoneNumber::new("059810675").is_err());
        assert!(PhoneNumber::new("05981067511").is_err());
        assert!(PhoneNumber::new("23359810675").is_err());
    }

    #[test]
    fn wrong_leading_digits_are_rejected() {
        assert!(PhoneNumber::new("1598106751").is_err());
        assert!(PhoneNumber::new("234598106751").is_err());
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("   ").is_err());
    }

    #[test]
    fn letters_are_rejected() {
        assert!(PhoneNumber::new("05981067ab").is_err());
    }

    #[test]
    fn display_format() {
        let phone = PhoneNumber::new("0598106751").unwrap();
        assert_eq!(phone.to_string(), "0598106751");
    }

    #[test]
    fn try_from_str() {
        let phone: PhoneNumber = "0598106751".try_into().unwrap();
        assert_eq!(phone.as_str(), "0598106751");
    }

    #[test]
    fn serialization_roundtrip() {
        let phone = PhoneNumber::new("233598106751").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"233598106751\"");
        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(phone, parsed);
    }
}

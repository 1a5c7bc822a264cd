//! Price value object - a non-negative GHS amount

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fare amount in Ghana cedis
///
/// Construction normalizes anything non-finite or negative to zero, so a
/// `Price` is always a finite, non-negative number. A zero price means the
/// selection is not payable. Deserialization routes through `From<f64>` so
/// the invariant also holds for decoded values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// The not-payable price
    pub const ZERO: Self = Self(0.0);

    /// Create a price, normalizing invalid amounts to zero
    pub fn new(amount: f64) -> Self {
        if amount.is_finite() && amount >= 0.0 {
            Self(amount)
        } else {
            Self::ZERO
        }
    }

    /// The raw amount in cedis
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Whether this price can actually be charged
    pub fn is_payable(&self) -> bool {
        self.0 > 0.0
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GHS {:.2}", self.0)
    }
}

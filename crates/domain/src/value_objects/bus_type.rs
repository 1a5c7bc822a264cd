//! Bus type value object - the two service tiers the fleet runs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service tier of a bus, affecting price, capacity, and reference prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusType {
    /// Standard tier, 21-seat Sprinter
    Sprinter,
    /// Premium tier, 50-seat VIP coach
    Vip,
}

impl BusType {
    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sprinter => "Sprinter",
            Self::Vip => "VIP",
        }
    }

    /// Seat capacity used to cap displayed seat numbers
    pub const fn capacity(&self) -> u32 {
        match self {
            Self::Sprinter => 21,
            Self::Vip => 50,
        }
    }

    /// Two-digit prefix used in booking references
    pub const fn reference_prefix(&self) -> &'static str {
        match self {
            Self::Sprinter => "10",
            Self::Vip => "50",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sprinter => write!(f, "sprinter"),
            Self::Vip => write!(f, "vip"),
        }
    }
}

impl std::str::FromStr for BusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sprinter" => Ok(Self::Sprinter),
            "vip" => Ok(Self::Vip),
            _ => Err(format!("invalid bus type: {s}. Use 'sprinter' or 'vip'")),
        }
    }
}

//! Destination catalog - routes, short codes, and fares
//!
//! The catalog is loaded configuration, not hardcoded route data: the
//! infrastructure layer deserializes it from the config file (with the
//! operator's current route sheet as defaults) and validates it here before
//! the service starts taking bookings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{BusType, Price};

/// One destination's short code and fares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationEntry {
    /// Short code used in booking references (e.g. `KUM`)
    pub short_code: String,
    /// Sprinter fare
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprinter_price: Option<f64>,
    /// VIP fare; absent means VIP is not offered on this route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip_price: Option<f64>,
    /// Generic fallback fare when no tier-specific fare is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
}

impl DestinationEntry {
    /// Resolve the fare for a tier
    ///
    /// Resolution order: the tier's own fare if set, else the generic
    /// fallback fare, else zero. A VIP request on a route without a VIP
    /// fare deliberately does NOT fall back to the sprinter fare.
    pub fn price_for(&self, bus_type: BusType) -> Price {
        let tier_price = match bus_type {
            BusType::Vip => self.vip_price,
            BusType::Sprinter => self.sprinter_price,
        };
        tier_price
            .or(self.base_price)
            .map_or(Price::ZERO, Price::new)
    }

    /// Whether the VIP tier can be booked on this route
    pub const fn vip_available(&self) -> bool {
        self.vip_price.is_some()
    }
}

/// Mapping from destination name to its catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationCatalog {
    entries: BTreeMap<String, DestinationEntry>,
}

impl DestinationCatalog {
    /// Build a catalog from entries, validating each one
    pub fn new(
        entries: BTreeMap<String, DestinationEntry>,
    ) -> Result<Self, DomainError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate every entry: short codes must be non-empty alphanumerics and
    /// each route needs at least one resolvable fare
    pub fn validate(&self) -> Result<(), DomainError> {
        for (destination, entry) in &self.entries {
            if entry.short_code.is_empty()
                || !entry.short_code.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(DomainError::InvalidCatalog {
                    destination: destination.clone(),
                    reason: format!("bad short code {:?}", entry.short_code),
                });
            }
            if entry.sprinter_price.is_none() && entry.base_price.is_none() {
                return Err(DomainError::InvalidCatalog {
                    destination: destination.clone(),
                    reason: "no sprinter or base fare".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Look up a destination by name
    pub fn entry(&self, destination: &str) -> Option<&DestinationEntry> {
        self.entries.get(destination)
    }

    /// Resolve the fare for a selection; unknown destinations price at zero
    pub fn price_for(&self, destination: &str, bus_type: BusType) -> Price {
        self.entry(destination)
            .map_or(Price::ZERO, |entry| entry.price_for(bus_type))
    }

    /// Iterate destinations in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DestinationEntry)> {
        self.entries.iter()
    }

    /// Number of destinations on the route sheet
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no destinations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

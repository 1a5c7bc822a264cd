//! Destination catalog configuration.
//!
//! The route sheet ships as configuration so dispatch can add routes or
//! change fares without a rebuild. Defaults carry the operator's current
//! eight routes; a `[catalog.destinations]` section in the config file
//! replaces them wholesale.

use std::collections::BTreeMap;

use domain::DomainError;
use domain::catalog::{DestinationCatalog, DestinationEntry};
use serde::{Deserialize, Serialize};

/// Catalog section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Destination name -> short code and fares
    #[serde(default = "default_destinations")]
    pub destinations: BTreeMap<String, DestinationEntry>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            destinations: default_destinations(),
        }
    }
}

impl CatalogConfig {
    /// Build the validated catalog; fails fast on a bad route sheet
    pub fn build(&self) -> Result<DestinationCatalog, DomainError> {
        DestinationCatalog::new(self.destinations.clone())
    }
}

fn entry(
    short_code: &str,
    sprinter_price: Option<f64>,
    vip_price: Option<f64>,
) -> DestinationEntry {
    DestinationEntry {
        short_code: short_code.to_string(),
        sprinter_price,
        vip_price,
        base_price: None,
    }
}

/// The operator's current route sheet
fn default_destinations() -> BTreeMap<String, DestinationEntry> {
    BTreeMap::from([
        ("Kumasi".to_string(), entry("KUM", Some(117.0), Some(150.0))),
        ("Tema".to_string(), entry("TM", Some(35.0), None)),
        ("Ashaiman".to_string(), entry("ASH", Some(35.0), None)),
        ("Madina/Adenta".to_string(), entry("MAD", Some(30.0), None)),
        ("Kaneshie".to_string(), entry("KAN", Some(25.0), None)),
        ("Koforidua".to_string(), entry("KOF", Some(60.0), Some(85.0))),
        ("Akim Oda".to_string(), entry("AOD", Some(70.0), None)),
        ("Pokuase".to_string(), entry("POK", Some(28.0), None)),
    ])
}

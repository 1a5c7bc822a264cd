//! Destination catalog handler

use axum::{Json, extract::State};
use domain::value_objects::BusType;
use serde::Serialize;

use crate::state::AppState;

/// One destination as listed to booking clients
#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    /// Destination name
    pub name: String,
    /// Short code used in references
    pub short_code: String,
    /// Sprinter fare
    pub sprinter_price: f64,
    /// VIP fare, absent when VIP is not offered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_price: Option<f64>,
    /// Whether the VIP tier can be booked
    pub vip_available: bool,
}

/// List every destination with its fares
pub async fn list_destinations(State(state): State<AppState>) -> Json<Vec<DestinationResponse>> {
    let destinations = state
        .catalog
        .iter()
        .map(|(name, entry)| DestinationResponse {
            name: name.clone(),
            short_code: entry.short_code.clone(),
            sprinter_price: entry.price_for(BusType::Sprinter).amount(),
            vip_price: entry.vip_available().then(|| entry.price_for(BusType::Vip).amount()),
            vip_available: entry.vip_available(),
        })
        .collect();

    Json(destinations)
}

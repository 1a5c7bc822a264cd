//! Spreadsheet bridge integration for DNG Booking
//!
//! The operator keeps bookings in a spreadsheet behind a small bridge
//! service with two endpoints: `POST /data` appends a row, `GET /data`
//! returns every row. This crate is the typed client for that bridge.

mod client;
mod config;
mod error;

pub use client::{HttpSheetsClient, SheetsClient};
pub use config::SheetsConfig;
pub use error::SheetsError;

//! Infrastructure layer for DNG Booking
//!
//! Configuration loading, SQLite persistence for the booking counters, and
//! adapters that implement the application ports on top of the integration
//! crates.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::SheetsBookingSink;
pub use config::AppConfig;
pub use persistence::{ConnectionPool, SqliteCounterStore, create_pool};

//! SQLite persistence for booking counters

mod connection;
mod counter_store;
mod migrations;

pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
pub use counter_store::SqliteCounterStore;
pub use migrations::run_migrations;

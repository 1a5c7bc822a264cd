//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these
//! ports.

mod booking_sink;
mod counter_store;

#[cfg(test)]
pub use booking_sink::MockBookingSinkPort;
pub use booking_sink::BookingSinkPort;
#[cfg(test)]
pub use counter_store::MockCounterStorePort;
pub use counter_store::CounterStorePort;

//! Entities - domain objects with identity and lifecycle

mod booking;

pub use booking::{Booking, BookingSource};

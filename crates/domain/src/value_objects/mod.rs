//! Value Objects - Immutable, identity-less domain primitives

mod booking_reference;
mod bus_type;
mod phone_number;
mod price;
mod seat_counts;

pub use booking_reference::BookingReference;
pub use bus_type::BusType;
pub use phone_number::PhoneNumber;
pub use price::Price;
pub use seat_counts::SeatCounts;

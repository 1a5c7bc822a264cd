//! HTTP request handlers

pub mod bookings;
pub mod destinations;
pub mod health;

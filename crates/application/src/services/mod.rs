//! Application services

mod booking_service;
pub mod payment_notice;
mod reference_service;

pub use booking_service::{
    BookingConfirmation, BookingRequest, BookingService, RemoteSave,
};
pub use reference_service::ReferenceService;

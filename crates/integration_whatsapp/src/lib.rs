//! WhatsApp payment handoff for DNG Booking
//!
//! Payments are manual MoMo transfers confirmed over WhatsApp: after
//! booking, the traveler opens a pre-filled `wa.me` link and sends the
//! operator a screenshot of the transfer. This crate builds those links and
//! the accompanying payment instructions. Delivery is WhatsApp's problem;
//! the only obligation here is accurate, correctly escaped text.

mod handoff;

pub use handoff::{HandoffConfig, HandoffError, MomoInstructions, PaymentHandoff};

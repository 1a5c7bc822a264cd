//! wa.me deep links and MoMo payment instructions

use domain::entities::Booking;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Payment handoff errors
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Payment handoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffConfig {
    /// Number travelers send the MoMo payment to, in display form
    pub momo_number: String,
    /// Operator WhatsApp number in international form (no `+`)
    pub whatsapp_number: String,
    /// Registered name on the MoMo wallet
    pub payee_name: String,
    /// Support lines listed on the confirmation
    pub support_numbers: Vec<String>,
}

/// Manual MoMo payment instructions shown with a confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomoInstructions {
    /// Ordered steps the traveler follows
    pub steps: Vec<String>,
    /// Support line summary
    pub support: String,
}

/// Builds wa.me handoff links and payment instructions
#[derive(Debug, Clone)]
pub struct PaymentHandoff {
    config: HandoffConfig,
    base: Url,
}

impl PaymentHandoff {
    /// Create a handoff builder, validating the configuration
    pub fn new(config: HandoffConfig) -> Result<Self, HandoffError> {
        if config.whatsapp_number.is_empty()
            || !config.whatsapp_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(HandoffError::Configuration(
                "whatsapp_number must be digits in international form".to_string(),
            ));
        }
        if config.momo_number.is_empty() {
            return Err(HandoffError::Configuration(
                "momo_number is required".to_string(),
            ));
        }
        if config.payee_name.is_empty() {
            return Err(HandoffError::Configuration(
                "payee_name is required".to_string(),
            ));
        }

        let base = Url::parse(&format!("https://wa.me/{}", config.whatsapp_number))
            .map_err(|e| HandoffError::Configuration(e.to_string()))?;

        Ok(Self { config, base })
    }

    /// Build the wa.me deep link carrying an escaped message payload
    ///
    /// The payload survives URL escaping intact, newlines included, so the
    /// chat opens with the full confirmation text ready to send.
    pub fn deep_link(&self, message: &str) -> String {
        let mut link = self.base.clone();
        link.query_pairs_mut().append_pair("text", message);
        link.to_string()
    }

    /// Manual payment instructions for a booking
    pub fn momo_instructions(&self, booking: &Booking) -> MomoInstructions {
        MomoInstructions {
            steps: vec![
                format!(
                    "Send {} to {} ({}).",
                    booking.price, self.config.momo_number, self.config.payee_name
                ),
                format!(
                    "Please use: {} as the payer name.",
                    booking.payer_name
                ),
                "Keep the MoMo SMS as receipt. Then send the screenshot of the MoMo \
                 confirmation message on WhatsApp."
                    .to_string(),
            ],
            support: self.config.support_numbers.join(" \u{2022} "),
        }
    }
}

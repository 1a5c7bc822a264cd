//! Integration configuration: spreadsheet bridge and MoMo handoff.

use integration_sheets::SheetsConfig;
use integration_whatsapp::HandoffConfig;
use serde::{Deserialize, Serialize};

/// Spreadsheet bridge section of the configuration
///
/// The section is optional; when it is absent the remote save is disabled
/// and bookings are only confirmed locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsAppConfig {
    /// Base URL of the bridge service
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    10
}

impl SheetsAppConfig {
    /// Convert into the integration crate's client configuration
    pub fn to_client_config(&self) -> SheetsConfig {
        SheetsConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// WhatsApp/MoMo payment handoff section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomoHandoffConfig {
    /// Number travelers send the MoMo payment to, in display form
    #[serde(default = "default_momo_display")]
    pub momo_number: String,

    /// Operator WhatsApp number in international form (no `+`)
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Registered name on the MoMo wallet
    #[serde(default = "default_payee_name")]
    pub payee_name: String,

    /// Support lines listed on the confirmation
    #[serde(default = "default_support_numbers")]
    pub support_numbers: Vec<String>,
}

fn default_momo_display() -> String {
    "0598106751".to_string()
}

fn default_whatsapp_number() -> String {
    "233598106751".to_string()
}

fn default_payee_name() -> String {
    "EMMANUEL ODURO WOOD".to_string()
}

fn default_support_numbers() -> Vec<String> {
    vec![
        "0598106751".to_string(),
        "0595223640".to_string(),
        "0246962314".to_string(),
    ]
}

impl Default for MomoHandoffConfig {
    fn default() -> Self {
        Self {
            momo_number: default_momo_display(),
            whatsapp_number: default_whatsapp_number(),
            payee_name: default_payee_name(),
            support_numbers: default_support_numbers(),
        }
    }
}

impl MomoHandoffConfig {
    /// Convert into the integration crate's handoff configuration
    pub fn to_handoff_config(&self) -> HandoffConfig {
        HandoffConfig {
            momo_number: self.momo_number.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
            payee_name: self.payee_name.clone(),
            support_numbers: self.support_numbers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheets_timeout_defaults() {
        let parsed: SheetsAppConfig =
            toml::from_str(r#"base_url = "http://localhost:3000""#).unwrap();
        assert_eq!(parsed.timeout_secs, 10);
        let client_config = parsed.to_client_config();
        assert_eq!(client_config.base_url, "http://localhost:3000");
    }

    #[test]
    fn momo_defaults_match_the_operator_wallet() {
        let config = MomoHandoffConfig::default();
        assert_eq!(config.momo_number, "0598106751");
        assert_eq!(config.whatsapp_number, "233598106751");
        assert_eq!(config.support_numbers.len(), 3);
    }

    #[test]
    fn handoff_config_conversion() {
        let handoff = MomoHandoffConfig::default().to_handoff_config();
        assert_eq!(handoff.whatsapp_number, "233598106751");
        assert_eq!(handoff.payee_name, "EMMANUEL ODURO WOOD");
    }
}

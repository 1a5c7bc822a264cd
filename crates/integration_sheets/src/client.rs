//! HTTP client for the spreadsheet bridge
//!
//! The bridge exposes `POST /data` (append one row, body `{"values": [..]}`)
//! and `GET /data` (all rows). The bridge owns the actual spreadsheet API
//! credentials; this client only speaks to the bridge.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::SheetsConfig;
use crate::error::SheetsError;

/// Trait for spreadsheet bridge clients
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// Append one row to the sheet
    async fn append_row(&self, values: &[String]) -> Result<(), SheetsError>;

    /// Read every row currently in the sheet
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, SheetsError>;

    /// Check if the bridge service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Reqwest-based spreadsheet bridge client
#[derive(Debug)]
pub struct HttpSheetsClient {
    client: Client,
    config: SheetsConfig,
}

/// Append request body
#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    values: &'a [String],
}

impl HttpSheetsClient {
    /// Create a new bridge client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &SheetsConfig) -> Result<Self, SheetsError> {
        config
            .validate()
            .map_err(SheetsError::ConnectionFailed)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("dng-booking/0.2")
            .build()
            .map_err(|e| SheetsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> SheetsError {
        if e.is_timeout() {
            SheetsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            SheetsError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl SheetsClient for HttpSheetsClient {
    #[instrument(skip(self, values), fields(columns = values.len()))]
    async fn append_row(&self, values: &[String]) -> Result<(), SheetsError> {
        let url = format!("{}/data", self.config.base_url);

        debug!(?url, "Appending booking row");

        let response = self
            .client
            .post(&url)
            .json(&AppendRequest { values })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = format!("{}/data", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SheetsError::ParseError(e.to_string()))?;

        // An empty sheet comes back as an empty body or `null`.
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Option<Vec<Vec<String>>> =
            serde_json::from_str(&body).map_err(|e| SheetsError::ParseError(e.to_string()))?;

        let rows = rows.unwrap_or_default();
        debug!(count = rows.len(), "Read booking rows");
        Ok(rows)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!("{}/data", self.config.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_request_serializes_to_bridge_shape() {
        let values = vec!["KUM/101-48213".to_string(), "Ama Serwaa".to_string()];
        let body = serde_json::to_string(&AppendRequest { values: &values }).unwrap();
        assert_eq!(body, r#"{"values":["KUM/101-48213","Ama Serwaa"]}"#);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SheetsConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(HttpSheetsClient::new(&config).is_err());
    }
}

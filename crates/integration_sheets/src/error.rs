//! Spreadsheet bridge errors

use thiserror::Error;

/// Errors from the spreadsheet bridge client
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Could not reach the bridge service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The bridge answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The bridge response could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_mentions_the_limit() {
        let err = SheetsError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "Request timed out after 10s");
    }

    #[test]
    fn request_failed_message() {
        let err = SheetsError::RequestFailed("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Request failed: HTTP 500");
    }
}

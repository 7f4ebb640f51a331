//! Email notifier configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the third-party email delivery endpoint.
///
/// The endpoint is expected to accept `POST {api_url}` with a JSON body of
/// `{"email": "...", "code": "1234"}` and answer with a 2xx status on
/// acceptance. The URL is configurable so the service can switch between a
/// local mock, a wrapped SMTP container, or a real provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Full URL of the send endpoint
    pub api_url: String,

    /// Request timeout in seconds (bounds how long a send may stall)
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("http://email-mock:3001/send"),
            request_timeout_secs: 3,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let api_url = std::env::var("EMAIL_API_URL")
            .unwrap_or_else(|_| "http://email-mock:3001/send".to_string());
        let request_timeout_secs = std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Self {
            api_url,
            request_timeout_secs,
        }
    }

    /// Create a new email configuration with the given endpoint URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }
}

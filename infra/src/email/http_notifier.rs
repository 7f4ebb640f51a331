//! HTTP email notifier implementation.
//!
//! Posts the activation code as JSON to a configurable endpoint. The
//! request carries a client-level timeout (3 seconds by default), and any
//! failure (connect error, timeout, non-success status) is reported as
//! `false`, never as an error.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use reg_core::services::registration::EmailNotifier;
use reg_shared::config::EmailConfig;
use reg_shared::utils::email::redact_email;

use crate::InfrastructureError;

/// JSON payload expected by the email endpoint
#[derive(Serialize)]
struct ActivationEmail<'a> {
    email: &'a str,
    code: &'a str,
}

/// Email notifier backed by an HTTP endpoint
pub struct HttpEmailNotifier {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailNotifier {
    /// Create a new HTTP email notifier
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env())
    }
}

#[async_trait]
impl EmailNotifier for HttpEmailNotifier {
    async fn send_activation_code(&self, email: &str, code: &str) -> bool {
        let payload = ActivationEmail { email, code };

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                debug!(
                    email = %redact_email(email),
                    status = %resp.status(),
                    event = "activation_email_sent",
                    "Email endpoint accepted activation code"
                );
                true
            }
            Ok(resp) => {
                warn!(
                    email = %redact_email(email),
                    status = %resp.status(),
                    event = "activation_email_rejected",
                    "Email endpoint returned non-success status"
                );
                false
            }
            Err(e) => {
                warn!(
                    email = %redact_email(email),
                    error = %e,
                    event = "activation_email_error",
                    "Email endpoint unreachable"
                );
                false
            }
        }
    }
}

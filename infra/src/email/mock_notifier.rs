//! Mock email notifier for development and tests.
//!
//! Logs the activation code instead of delivering it, records every send,
//! and can be switched into a failing mode to exercise outage paths.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::info;

use reg_core::services::registration::EmailNotifier;
use reg_shared::utils::email::redact_email;

/// A sent activation email, as recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub email: String,
    pub code: String,
}

/// Mock email notifier
#[derive(Default)]
pub struct MockEmailNotifier {
    sent: Mutex<Vec<SentEmail>>,
    failing: AtomicBool,
}

impl MockEmailNotifier {
    /// Create a new mock notifier that accepts every send
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock notifier that reports failure for every send
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.failing.store(true, Ordering::SeqCst);
        notifier
    }

    /// Toggle the failing mode
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All emails recorded so far
    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of recorded sends
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_activation_code(&self, email: &str, code: &str) -> bool {
        if self.failing.load(Ordering::SeqCst) {
            info!(
                email = %redact_email(email),
                event = "mock_email_failed",
                "Mock notifier simulating delivery failure"
            );
            return false;
        }

        info!(
            email = %redact_email(email),
            code = %code,
            event = "mock_email_sent",
            "Mock notifier delivering activation code"
        );

        self.sent.lock().unwrap().push(SentEmail {
            email: email.to_string(),
            code: code.to_string(),
        });
        true
    }
}

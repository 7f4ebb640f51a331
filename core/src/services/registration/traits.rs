//! Trait for the out-of-band notification channel

use async_trait::async_trait;

/// Best-effort delivery of an activation code to the account's email.
///
/// Implementations must never error and must bound their own execution
/// time: the boolean return value is the only failure signal, and a `false`
/// never affects the durable outcome of the operation that triggered the
/// send.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Deliver the activation code. `true` means the downstream channel
    /// accepted the message; `false` covers every failure (network error,
    /// timeout, non-success status).
    async fn send_activation_code(&self, email: &str, code: &str) -> bool;
}

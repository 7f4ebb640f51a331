//! Types for registration service results

use uuid::Uuid;

/// Result of a successful registration.
///
/// The activation code itself is never part of this result; it travels
/// only through the notifier (or the log fallback when delivery fails).
#[derive(Debug, Clone)]
pub struct RegisterResult {
    /// Identifier of the newly created account
    pub account_id: Uuid,
    /// Whether the notifier accepted the activation email. Diagnostic
    /// only; a `false` does not make the registration any less committed.
    pub notification_sent: bool,
}

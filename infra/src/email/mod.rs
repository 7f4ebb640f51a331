//! Email notifier module
//!
//! Best-effort delivery of activation codes to a third-party email
//! endpoint. Implementations never raise towards business logic; they
//! return `false` for every failure and bound their own execution time, so
//! a slow or dead provider cannot stall registration.

pub mod http_notifier;
pub mod mock_notifier;

pub use http_notifier::HttpEmailNotifier;
pub use mock_notifier::MockEmailNotifier;

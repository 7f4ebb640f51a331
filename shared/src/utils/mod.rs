//! Cross-cutting utility functions.

pub mod email;

pub use email::redact_email;

//! Utility modules.

/// Truncation of response bodies for logging.
pub mod log_sanitizer;

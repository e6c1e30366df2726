//! Utility modules.

/// Truncation of response bodies before they reach the logs.
pub mod log_sanitizer;

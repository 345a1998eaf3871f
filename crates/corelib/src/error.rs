//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// These are caller-input validation failures surfaced synchronously; there
/// is no retry or partial-construction state behind any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Supplied IPv6 byte sequence was not exactly 16 bytes long.
    #[error("ipv6 addresses are 16 bytes: {0}")]
    InvalidIpv6Length(usize),
    /// An encoder failed to render an endpoint.
    #[error("endpoint encoding failed: {0}")]
    Encode(String),
}

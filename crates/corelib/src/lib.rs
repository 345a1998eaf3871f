//! Core library for trace endpoint identity.
//!
//! This crate provides the fundamental abstractions for endpoint identity:
//! - Endpoint value type and builder
//! - IPv6 address classification (RFC 4291 embedded-IPv4 detection)
//! - Encoder seam toward serialization collaborators
//! - Error types

pub mod address;
pub mod codec;
pub mod endpoint;
pub mod error;

pub use address::{classify, Ipv6Class};
pub use codec::{EndpointEncoder, JsonEncoder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{Error, Result};

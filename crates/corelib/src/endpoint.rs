//! Endpoint identity values.
//!
//! An [`Endpoint`] is the network identity of a service that recorded a
//! trace event: service name, IPv4/IPv6 address, and port. Endpoints are
//! immutable once built and compare structurally, so consumers can group
//! and deduplicate events by originating service.
//!
//! Construction goes through [`EndpointBuilder`], which normalizes fields
//! as they are assigned: IPv6 addresses that merely embed an IPv4 address
//! (RFC 4291 §2.5.5.2) are routed into the IPv4 field, port zero coerces to
//! unknown, and service names fold to lower case at build time.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

use crate::address::{classify, Ipv6Class};
use crate::codec::{EndpointEncoder, JsonEncoder};
use crate::error::{Error, Result};

/// Network identity of a service recording a trace event.
///
/// # Invariants
///
/// - `service_name` is `""` (unknown) or a lower-case string.
/// - `ipv6`, when present, is never an RFC 4291 embedded-IPv4 address;
///   those are normalized into `ipv4` at construction time.
/// - `port` is never stored as zero; an unknown port is `None`.
///
/// Two endpoints are equal iff all four fields are equal; the derived hash
/// is consistent with that equality. `Deserialize` is deliberately not
/// derived so no decoded value can bypass the builder's normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    service_name: String,
    #[serde(skip_serializing_if = "Ipv4Addr::is_unspecified")]
    ipv4: Ipv4Addr,
    #[serde(skip_serializing_if = "Option::is_none")]
    ipv6: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

impl Endpoint {
    /// Starts a builder with every field unknown.
    pub fn builder() -> EndpointBuilder {
        EndpointBuilder::default()
    }

    /// Legacy construction shim from a service name and packed IPv4.
    ///
    /// `ipv4` is the address packed into a big-endian `u32` (for 1.2.3.4
    /// that is `(1 << 24) | (2 << 16) | (3 << 8) | 4`); zero means unknown.
    /// A port of zero likewise means unknown. This is a thin wrapper over
    /// [`Endpoint::builder`], which remains the preferred path.
    pub fn new(service_name: impl Into<String>, ipv4: u32, port: u16) -> Self {
        Self::builder()
            .service_name(service_name)
            .ipv4(Ipv4Addr::from(ipv4))
            .port(port)
            .build()
    }

    /// Classifier of a source or destination in lowercase, such as
    /// "zipkin-server", or `""` when unknown.
    ///
    /// This is the primary parameter for trace lookup, so it should match
    /// names in service discovery. An empty name keeps the event, but the
    /// span will not be queryable by service until a richer identity is
    /// recorded.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// IPv4 address, or `0.0.0.0` if unknown.
    pub fn ipv4(&self) -> Ipv4Addr {
        self.ipv4
    }

    /// IPv4 address packed into a big-endian `u32`, or zero if unknown.
    pub fn packed_ipv4(&self) -> u32 {
        u32::from(self.ipv4)
    }

    /// IPv6 address, or `None` if unknown.
    ///
    /// Addresses that embed an IPv4 address per RFC 4291 §2.5.5.2 are never
    /// stored here; the builder routes them into [`Endpoint::ipv4`].
    pub fn ipv6(&self) -> Option<Ipv6Addr> {
        self.ipv6
    }

    /// Port of the IP's socket, or `None` if unknown. Never zero.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns a builder seeded with this endpoint's fields, for
    /// copy-with-modification without touching the original.
    pub fn to_builder(&self) -> EndpointBuilder {
        EndpointBuilder {
            service_name: self.service_name.clone(),
            ipv4: self.ipv4,
            ipv6: self.ipv6,
            port: self.port,
        }
    }
}

impl fmt::Display for Endpoint {
    /// Renders the canonical JSON form via the built-in encoder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = JsonEncoder.encode(self).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}

/// Accumulates endpoint fields, normalizing as they are assigned.
///
/// Setters take the builder by value and return it for chaining. [`build`]
/// only reads the accumulated state, so it can be called repeatedly and
/// yields equal endpoints from unchanged state.
///
/// [`build`]: EndpointBuilder::build
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    service_name: String,
    ipv4: Ipv4Addr,
    ipv6: Option<Ipv6Addr>,
    port: Option<u16>,
}

impl Default for EndpointBuilder {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            ipv4: Ipv4Addr::UNSPECIFIED,
            ipv6: None,
            port: None,
        }
    }
}

impl EndpointBuilder {
    /// Sets the service name, stored verbatim; lower-casing happens in
    /// [`EndpointBuilder::build`].
    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// Sets the IPv4 address. Any value is legal; `0.0.0.0` means unknown.
    pub fn ipv4(mut self, ipv4: Ipv4Addr) -> Self {
        self.ipv4 = ipv4;
        self
    }

    /// Sets the IPv6 address from raw bytes, unless they encode an
    /// IPv4-mapped or IPv4-compatible address (RFC 4291 §2.5.5.2), in which
    /// case the embedded address lands in the IPv4 field and the IPv6 field
    /// is left alone.
    ///
    /// Errors with [`Error::InvalidIpv6Length`] when the slice is not 16
    /// bytes; nothing is mutated before that validation passes. The bytes
    /// are copied on store, so later caller-side mutation of the slice
    /// cannot reach a built endpoint.
    pub fn ipv6(self, octets: &[u8]) -> Result<Self> {
        let octets: &[u8; 16] = octets
            .try_into()
            .map_err(|_| Error::InvalidIpv6Length(octets.len()))?;
        Ok(self.ipv6_addr(Ipv6Addr::from(*octets)))
    }

    /// Sets the IPv6 address, routing embedded IPv4 forms into the IPv4
    /// field exactly as [`EndpointBuilder::ipv6`] does.
    pub fn ipv6_addr(mut self, ipv6: Ipv6Addr) -> Self {
        match classify(&ipv6.octets()) {
            Ipv6Class::Embedded(ipv4) => self.ipv4 = ipv4,
            Ipv6Class::Native => self.ipv6 = Some(ipv6),
        }
        self
    }

    /// Sets the port. Zero coerces to unknown.
    pub fn port(mut self, port: u16) -> Self {
        self.port = if port == 0 { None } else { Some(port) };
        self
    }

    /// Sets or clears the port. The same zero coercion as
    /// [`EndpointBuilder::port`] applies, so `Some(0)` also clears it.
    ///
    /// To copy another endpoint's port, pass [`Endpoint::port`] here as-is
    /// or go through [`Endpoint::to_builder`]; never reconstruct a zero
    /// sentinel for an absent port.
    pub fn port_opt(mut self, port: Option<u16>) -> Self {
        self.port = port.filter(|&p| p != 0);
        self
    }

    /// Builds the endpoint, folding the service name to lower case
    /// (locale-invariant; the empty unknown marker stays empty).
    pub fn build(&self) -> Endpoint {
        Endpoint {
            service_name: self.service_name.to_lowercase(),
            ipv4: self.ipv4,
            ipv6: self.ipv6,
            port: self.port,
        }
    }
}

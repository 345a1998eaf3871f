//! Encoder seam toward serialization collaborators.
//!
//! The core owns no wire format; it exposes endpoints to codecs through
//! [`EndpointEncoder`]. The built-in [`JsonEncoder`] produces the canonical
//! textual rendering and backs [`Endpoint`]'s `Display` impl.

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

/// Renders an endpoint to bytes.
///
/// Encoders are stateless and thread-safe, allowing concurrent encoding
/// without synchronization overhead.
pub trait EndpointEncoder: Send + Sync {
    /// Encodes the endpoint to its wire or display form.
    fn encode(&self, endpoint: &Endpoint) -> Result<Vec<u8>>;

    /// Returns the name of this encoder.
    fn name(&self) -> &'static str;
}

/// JSON encoder producing the canonical textual rendering.
///
/// Unknown fields are omitted: `0.0.0.0` elides `ipv4`, absent `ipv6` and
/// `port` are not written. `serviceName` is always present, `""` included.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonEncoder;

impl EndpointEncoder for JsonEncoder {
    fn encode(&self, endpoint: &Endpoint) -> Result<Vec<u8>> {
        serde_json::to_vec(endpoint).map_err(|e| Error::Encode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "JsonEncoder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_encodes_known_fields_only() {
        let endpoint = Endpoint::builder()
            .service_name("Frontend")
            .ipv4(Ipv4Addr::new(192, 168, 1, 1))
            .port(8080)
            .build();
        let json = JsonEncoder.encode(&endpoint).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"serviceName":"frontend","ipv4":"192.168.1.1","port":8080}"#
        );
    }

    #[test]
    fn test_unknown_endpoint_keeps_service_name() {
        let endpoint = Endpoint::builder().build();
        let json = JsonEncoder.encode(&endpoint).unwrap();
        assert_eq!(String::from_utf8(json).unwrap(), r#"{"serviceName":""}"#);
    }

    #[test]
    fn test_native_ipv6_rendered() {
        let endpoint = Endpoint::builder()
            .ipv6_addr("2001:db8::1".parse().unwrap())
            .build();
        let json = JsonEncoder.encode(&endpoint).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            r#"{"serviceName":"","ipv6":"2001:db8::1"}"#
        );
    }

    #[test]
    fn test_encoder_name() {
        assert_eq!(JsonEncoder.name(), "JsonEncoder");
    }
}

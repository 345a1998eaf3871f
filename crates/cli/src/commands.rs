//! CLI commands over the endpoint core.

use std::net::{IpAddr, Ipv6Addr};

use anyhow::Context;
use clap::Subcommand;
use corelib::{classify, Endpoint, EndpointEncoder, Ipv6Class, JsonEncoder};

/// Subcommands of `endpointctl`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify an IPv6 address as embedded-IPv4 or native.
    Classify {
        /// IPv6 address literal, e.g. `::ffff:192.168.1.1`
        address: Ipv6Addr,
    },
    /// Build an endpoint from its parts and print the JSON rendering.
    Build {
        /// Service name; folded to lower case.
        #[arg(long, default_value = "")]
        service_name: String,
        /// IPv4 or IPv6 address. IPv6 addresses that embed an IPv4
        /// address are normalized into the IPv4 field.
        #[arg(long)]
        ip: Option<IpAddr>,
        /// Port; zero means unknown.
        #[arg(long, default_value_t = 0)]
        port: u16,
    },
}

impl Command {
    /// Executes the command and returns its printable output.
    pub fn execute(self) -> anyhow::Result<String> {
        match self {
            Command::Classify { address } => Ok(match classify(&address.octets()) {
                Ipv6Class::Embedded(ipv4) => format!("embedded ipv4: {ipv4}"),
                Ipv6Class::Native => format!("native ipv6: {address}"),
            }),
            Command::Build {
                service_name,
                ip,
                port,
            } => {
                let mut builder = Endpoint::builder().service_name(service_name).port(port);
                match ip {
                    Some(IpAddr::V4(ipv4)) => builder = builder.ipv4(ipv4),
                    Some(IpAddr::V6(ipv6)) => builder = builder.ipv6_addr(ipv6),
                    None => {}
                }
                let json = JsonEncoder
                    .encode(&builder.build())
                    .context("rendering endpoint")?;
                Ok(String::from_utf8_lossy(&json).into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_mapped() {
        let command = Command::Classify {
            address: "::ffff:10.0.0.1".parse().unwrap(),
        };
        assert_eq!(command.execute().unwrap(), "embedded ipv4: 10.0.0.1");
    }

    #[test]
    fn test_classify_native() {
        let command = Command::Classify {
            address: "::1".parse().unwrap(),
        };
        assert_eq!(command.execute().unwrap(), "native ipv6: ::1");
    }

    #[test]
    fn test_build_normalizes() {
        let command = Command::Build {
            service_name: "Frontend".to_string(),
            ip: Some("::ffff:192.168.1.1".parse().unwrap()),
            port: 8080,
        };
        assert_eq!(
            command.execute().unwrap(),
            r#"{"serviceName":"frontend","ipv4":"192.168.1.1","port":8080}"#
        );
    }
}

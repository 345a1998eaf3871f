//! IPv6 address classification.
//!
//! RFC 4291 §2.5.5.2 defines two encodings that embed an IPv4 address in the
//! low 32 bits of an IPv6 address: IPv4-mapped (`::ffff:a.b.c.d`) and
//! IPv4-compatible (`::a.b.c.d`). Endpoints store such addresses in their
//! IPv4 field, so the builder runs every supplied IPv6 address through
//! [`classify`] before storing it.

use std::net::Ipv4Addr;

/// Classification of a 16-byte IPv6 address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Ipv6Class {
    /// The address embeds an IPv4 address per RFC 4291 §2.5.5.2.
    Embedded(Ipv4Addr),
    /// A genuine IPv6 address.
    Native,
}

/// Classifies an IPv6 address as embedded-IPv4 or native.
///
/// A single pass keeps two hypotheses alive:
///
/// - mapped: 80 unset bits, then 16 set bits (`::ffff:0:0/96`)
/// - compat: 96 unset bits (`::/96`), except `::1` which is the IPv6
///   loopback, not `0.0.0.1`
///
/// If either hypothesis survives, bytes 12-15 are the embedded address. The
/// all-zero address `::` therefore classifies as embedded `0.0.0.0`.
///
/// Pure and allocation-free; safe to call concurrently without
/// synchronization.
pub fn classify(octets: &[u8; 16]) -> Ipv6Class {
    let mut mapped = true;
    let mut compat = true;
    for (i, &val) in octets.iter().enumerate() {
        if i == 10 || i == 11 {
            // the mapped prefix carries 0xff here, the compat prefix zero
            if val == 0xff {
                compat = false;
            } else {
                mapped = false;
            }
        } else if i == 15 && val == 1 {
            // don't mistake localhost for an embedded compat address
            compat = false;
        }
        if val == 0 {
            continue;
        }
        if i < 12 {
            compat = false;
        }
        if i < 10 {
            mapped = false;
        }
    }
    if mapped || compat {
        Ipv6Class::Embedded(Ipv4Addr::new(
            octets[12], octets[13], octets[14], octets[15],
        ))
    } else {
        Ipv6Class::Native
    }
}

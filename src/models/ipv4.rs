//! IPv4 address codec and CIDR mask utilities.
//!
//! Provides strict dotted-quad parsing, integer conversion, prefix masks, and the [`Ipv4`]
//! struct for an address paired with a prefix length.

use crate::error::{CalcError, Result};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-quad IPv4 address.
///
/// Each of the four parts must be a decimal number in 0-255 written exactly the way it
/// prints, so `"01"`, `"+1"`, `" 1"` and empty parts are all rejected.
///
/// # Examples
/// ```
/// use subnet_calc::models::parse_ipv4;
/// assert_eq!(parse_ipv4("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_ipv4("1.2.3.04").is_err());
/// ```
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(CalcError::address(text));
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        *octet = parse_octet(part).ok_or_else(|| CalcError::address(text))?;
    }
    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u8 = part.parse().ok()?;
    // "0" is the only canonical form with a leading zero
    (value.to_string() == part).then_some(value)
}

/// Check whether `text` is a valid dotted-quad IPv4 address.
pub fn validate_ipv4(text: &str) -> bool {
    parse_ipv4(text).is_ok()
}

/// Pack an address into a u32, first octet in the high byte.
pub fn to_integer(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// Unpack a u32 into an address, high byte first.
pub fn from_integer(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Mask for a prefix length, saturating at /32.
fn prefix_mask(len: u8) -> u32 {
    match len {
        0 => 0,
        len if len >= MAX_LENGTH => u32::MAX,
        len => u32::MAX << (MAX_LENGTH - len),
    }
}

fn check_len(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefixLength {
            prefix: len,
            min: 0,
            max: MAX_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_len(len)?;
    Ok(prefix_mask(len))
}

/// Wildcard (inverse) mask for a prefix length.
pub fn wildcard_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Ipv4 {
    /// Pair an address with a prefix length, rejecting lengths above 32.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4> {
        check_len(mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Subnet mask for this prefix.
    pub fn netmask(&self) -> u32 {
        prefix_mask(self.mask)
    }

    /// Get the network address for this subnet, keeping the prefix.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !self.netmask())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// Number of addresses covered by this prefix.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

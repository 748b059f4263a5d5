//! IPv4 subnet calculation.
//!
//! Derives mask, network id, broadcast, host range and usable host count for an address
//! and prefix. /31 and /32 are reported as point-to-point and loopback/host subnets with
//! no usable hosts.

use crate::error::Result;
use crate::models::{parse_ipv4, Ipv4};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Addresses taken out of the usable count: network, gateway and broadcast.
const RESERVED_ADDRESSES: u64 = 3;

/// How a subnet is classified by its prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubnetKind {
    Standard,
    PointToPoint,
    Loopback,
}

impl fmt::Display for SubnetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SubnetKind::Standard => "Standard",
            SubnetKind::PointToPoint => "Point-to-Point",
            SubnetKind::Loopback => "Loopback/Host",
        };
        f.write_str(name)
    }
}

/// Inclusive range of IPv4 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub start: Ipv4Addr,
    pub end: Ipv4Addr,
}

impl AddressRange {
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> AddressRange {
        AddressRange { start, end }
    }

    /// Number of addresses in the range, 0 when `end` is before `start`.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

impl Serialize for AddressRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Result of an IPv4 subnet calculation.
///
/// Fields that do not apply to a point-to-point or host subnet are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4SubnetResult {
    pub ip_address: Ipv4Addr,
    pub prefix: u8,
    pub subnet_mask: Ipv4Addr,
    pub network_id: Option<Ipv4Addr>,
    pub broadcast_address: Option<Ipv4Addr>,
    /// Gateway address, the first address after the network id.
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub total_ip_count: u64,
    pub host_range: AddressRange,
    /// Hosts left after network, gateway and broadcast are set aside.
    pub usable_range: Option<AddressRange>,
    pub usable_count: u64,
    pub classification: SubnetKind,
}

/// Calculate subnet facts for `address` with a prefix of `prefix` bits.
///
/// # Examples
/// ```
/// use subnet_calc::processing::ipv4_subnet;
/// let result = ipv4_subnet("192.168.0.1", 24).unwrap();
/// assert_eq!(result.usable_count, 253);
/// assert_eq!(result.usable_range.unwrap().to_string(), "192.168.0.2 - 192.168.0.254");
/// ```
pub fn ipv4_subnet(address: &str, prefix: u8) -> Result<Ipv4SubnetResult> {
    let addr = parse_ipv4(address).inspect_err(|e| log::warn!("ipv4_subnet: {e}"))?;
    let cidr = Ipv4::from_parts(addr, prefix).inspect_err(|e| log::warn!("ipv4_subnet: {e}"))?;

    let network = cidr.lo();
    let broadcast = cidr.hi();
    let host_range = AddressRange::new(network, broadcast);
    let total_ip_count = host_range.len();

    let mut result = Ipv4SubnetResult {
        ip_address: addr,
        prefix,
        subnet_mask: Ipv4Addr::from(cidr.netmask()),
        network_id: None,
        broadcast_address: None,
        first_host: None,
        last_host: None,
        total_ip_count,
        host_range,
        usable_range: None,
        usable_count: 0,
        classification: SubnetKind::Standard,
    };

    match prefix {
        31 => {
            result.classification = SubnetKind::PointToPoint;
            result.last_host = Some(Ipv4Addr::from(u32::from(broadcast) - 1));
        }
        32 => {
            result.classification = SubnetKind::Loopback;
        }
        _ => {
            // prefix <= 30 leaves at least four addresses, so none of these wrap
            let network_bits = u32::from(network);
            let last_host = Ipv4Addr::from(u32::from(broadcast) - 1);
            result.network_id = Some(network);
            result.broadcast_address = Some(broadcast);
            result.first_host = Some(Ipv4Addr::from(network_bits + 1));
            result.last_host = Some(last_host);
            result.usable_range = Some(AddressRange::new(
                Ipv4Addr::from(network_bits + 2),
                last_host,
            ));
            result.usable_count = total_ip_count.saturating_sub(RESERVED_ADDRESSES);
        }
    }

    log::debug!(
        "ipv4_subnet({cidr}) kind={} range={} usable={}",
        result.classification,
        result.host_range,
        result.usable_count
    );
    Ok(result)
}

//! Subnet calculation engines.
//!
//! - [`subnet`] - IPv4 subnet facts and usable host range
//! - [`cidr`] - IPv4 CIDR facts relative to the classful default
//! - [`ipv6_subnet`] - IPv6 network, gateway and range

mod cidr;
mod ipv6_subnet;
mod subnet;

// Re-export public functions
pub use cidr::{ipv4_cidr, octet_block, Ipv4CidrResult, OctetBlock};
pub use ipv6_subnet::{ipv6_subnet, Ipv6SubnetResult};
pub use subnet::{ipv4_subnet, AddressRange, Ipv4SubnetResult, SubnetKind};

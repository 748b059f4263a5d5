//! Legacy (classful) IPv4 address classes.
//!
//! Read-only metadata for classes A through E: example addresses, default prefixes and the
//! reference facts shown next to the subnet calculator.

use crate::error::CalcError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Historical IPv4 address class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LegacyClass {
    A,
    B,
    C,
    D,
    E,
}

/// Example address and default prefix for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefaults {
    pub example_address: Ipv4Addr,
    pub default_prefix: u8,
}

/// Reference facts about a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub class: LegacyClass,
    /// First and last address of the class range.
    pub range: (Ipv4Addr, Ipv4Addr),
    /// Classful netmask, `None` for multicast and reserved space.
    pub default_mask: Option<Ipv4Addr>,
    pub approx_hosts: Option<&'static str>,
    pub usage: &'static str,
    /// Leading bit pattern that identifies the class.
    pub leading_bits: &'static str,
}

const CLASS_INFO: [ClassInfo; 5] = [
    ClassInfo {
        class: LegacyClass::A,
        range: (Ipv4Addr::new(1, 0, 0, 0), Ipv4Addr::new(126, 255, 255, 255)),
        default_mask: Some(Ipv4Addr::new(255, 0, 0, 0)),
        approx_hosts: Some("about 16.77 million"),
        usage: "large carriers, global enterprises",
        leading_bits: "0",
    },
    ClassInfo {
        class: LegacyClass::B,
        range: (Ipv4Addr::new(128, 0, 0, 0), Ipv4Addr::new(191, 255, 255, 255)),
        default_mask: Some(Ipv4Addr::new(255, 255, 0, 0)),
        approx_hosts: Some("about 65,000"),
        usage: "universities, mid-sized companies",
        leading_bits: "10",
    },
    ClassInfo {
        class: LegacyClass::C,
        range: (Ipv4Addr::new(192, 0, 0, 0), Ipv4Addr::new(223, 255, 255, 255)),
        default_mask: Some(Ipv4Addr::new(255, 255, 255, 0)),
        approx_hosts: Some("about 254"),
        usage: "small organisations, home networks",
        leading_bits: "110",
    },
    ClassInfo {
        class: LegacyClass::D,
        range: (Ipv4Addr::new(224, 0, 0, 0), Ipv4Addr::new(239, 255, 255, 255)),
        default_mask: None,
        approx_hosts: None,
        usage: "multicast",
        leading_bits: "1110",
    },
    ClassInfo {
        class: LegacyClass::E,
        range: (Ipv4Addr::new(240, 0, 0, 0), Ipv4Addr::new(255, 255, 255, 255)),
        default_mask: None,
        approx_hosts: None,
        usage: "reserved for research",
        leading_bits: "1111",
    },
];

impl LegacyClass {
    pub const ALL: [LegacyClass; 5] = [
        LegacyClass::A,
        LegacyClass::B,
        LegacyClass::C,
        LegacyClass::D,
        LegacyClass::E,
    ];

    /// Class of an address, judged by its leading bits.
    pub fn of(addr: Ipv4Addr) -> LegacyClass {
        match addr.octets()[0] {
            0..=127 => LegacyClass::A,
            128..=191 => LegacyClass::B,
            192..=223 => LegacyClass::C,
            224..=239 => LegacyClass::D,
            _ => LegacyClass::E,
        }
    }

    /// Example address and default prefix used to seed the calculator.
    pub fn defaults(self) -> ClassDefaults {
        let (example_address, default_prefix) = match self {
            LegacyClass::A => (Ipv4Addr::new(10, 0, 0, 1), 8),
            LegacyClass::B => (Ipv4Addr::new(172, 16, 0, 1), 16),
            LegacyClass::C => (Ipv4Addr::new(192, 168, 0, 1), 24),
            LegacyClass::D => (Ipv4Addr::new(224, 0, 0, 1), 4),
            LegacyClass::E => (Ipv4Addr::new(240, 0, 0, 1), 4),
        };
        ClassDefaults {
            example_address,
            default_prefix,
        }
    }

    pub fn info(self) -> &'static ClassInfo {
        &CLASS_INFO[self as usize]
    }
}

/// Classful default prefix for a first octet.
///
/// 0, 127 and everything from 224 up have no classful default.
pub fn legacy_default_prefix(first_octet: u8) -> Option<u8> {
    match first_octet {
        1..=126 => Some(8),
        128..=191 => Some(16),
        192..=223 => Some(24),
        _ => None,
    }
}

impl FromStr for LegacyClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(LegacyClass::A),
            "B" => Ok(LegacyClass::B),
            "C" => Ok(LegacyClass::C),
            "D" => Ok(LegacyClass::D),
            "E" => Ok(LegacyClass::E),
            _ => Err(CalcError::InvalidAddressClass(s.to_string())),
        }
    }
}

impl fmt::Display for LegacyClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            LegacyClass::A => "A",
            LegacyClass::B => "B",
            LegacyClass::C => "C",
            LegacyClass::D => "D",
            LegacyClass::E => "E",
        };
        f.write_str(letter)
    }
}

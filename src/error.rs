//! Error types for address calculations.

use serde::Serialize;
use thiserror::Error;

/// Errors returned by the codecs and engines.
///
/// Every engine entry point converts bad input into one of these variants instead of
/// panicking, so a caller can render a neutral "invalid input" state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed IPv4 or IPv6 literal.
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    /// Prefix length outside the valid range for the address family.
    #[error("Invalid prefix length: /{prefix} (must be {min}-{max})")]
    InvalidPrefixLength { prefix: u8, min: u8, max: u8 },

    /// Arithmetic result does not fit the address width.
    #[error("Address arithmetic overflowed: {0}")]
    FormatOverflow(String),

    /// Unknown legacy class letter.
    #[error("Invalid address class: {0} (must be A-E)")]
    InvalidAddressClass(String),
}

/// Tag for a [`CalcError`], without the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidAddressFormat,
    InvalidPrefixLength,
    FormatOverflow,
    InvalidAddressClass,
}

impl CalcError {
    /// The kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidAddressFormat(_) => ErrorKind::InvalidAddressFormat,
            CalcError::InvalidPrefixLength { .. } => ErrorKind::InvalidPrefixLength,
            CalcError::FormatOverflow(_) => ErrorKind::FormatOverflow,
            CalcError::InvalidAddressClass(_) => ErrorKind::InvalidAddressClass,
        }
    }

    pub(crate) fn address(text: &str) -> CalcError {
        CalcError::InvalidAddressFormat(text.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CalcError>;

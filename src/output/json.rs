//! JSON output for calculation results.

use crate::error::{CalcError, ErrorKind};
use crate::models::{ClassDefaults, ClassInfo};
use crate::processing::{Ipv4CidrResult, OctetBlock};
use serde::Serialize;

/// CIDR result together with its octet block.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CidrReport<'a> {
    #[serde(flatten)]
    pub result: &'a Ipv4CidrResult,
    pub octet_block: &'a OctetBlock,
}

/// Class defaults together with the class reference facts.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClassReport<'a> {
    #[serde(flatten)]
    pub defaults: &'a ClassDefaults,
    pub info: &'a ClassInfo,
}

#[derive(Serialize, Debug)]
struct InvalidInput {
    error: ErrorKind,
    message: String,
}

/// Pretty-printed JSON for any result.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// JSON body reported for rejected input.
pub fn error_json(err: &CalcError) -> Result<String, serde_json::Error> {
    to_json(&InvalidInput {
        error: err.kind(),
        message: err.to_string(),
    })
}

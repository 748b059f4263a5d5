//! Command-line interface.
//!
//! Parses arguments with clap, runs the matching calculation and renders the result.

use crate::config::{Config, OutputFormat};
use crate::error::CalcError;
use crate::models::LegacyClass;
use crate::output::{self, CidrReport, ClassReport};
use crate::processing::{ipv4_cidr, ipv4_subnet, ipv6_subnet, octet_block};
use clap::{Args, Parser, Subcommand};
use regex::Regex;
use std::error::Error;
use std::sync::OnceLock;

/// Regex for splitting `address[/prefix]` input.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^\s*([^/\s]+)\s*(?:/\s*(\d+))?\s*$").expect("Invalid Regex")
    })
}

#[derive(Debug, Parser)]
#[command(name = "subnet-calc", version, about = "IPv4 / IPv6 subnet and CIDR calculator")]
pub struct Cli {
    /// Output format (overrides SUBNET_CALC_FORMAT)
    #[arg(long, short, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// IPv4 subnet: mask, network, broadcast and usable hosts
    Subnet(AddressArgs),
    /// IPv4 CIDR: wildcard mask, classful subnet count and route
    Cidr(AddressArgs),
    /// IPv6 subnet: expanded form, network, gateway and range
    Ipv6(AddressArgs),
    /// Legacy class defaults and reference facts
    Class {
        /// Class letter, A to E
        class: String,
    },
}

#[derive(Debug, Args)]
pub struct AddressArgs {
    /// Address, optionally followed by /prefix
    pub address: String,

    /// Prefix length, overrides a /prefix given with the address
    #[arg(long, short)]
    pub prefix: Option<u8>,
}

/// Split `address[/prefix]` into its parts.
pub fn split_address(input: &str) -> Result<(String, Option<u8>), CalcError> {
    let caps = get_address_regex()
        .captures(input)
        .ok_or_else(|| CalcError::InvalidAddressFormat(input.to_string()))?;
    let address = caps[1].to_string();
    let prefix = match caps.get(2) {
        Some(m) => Some(
            m.as_str()
                .parse::<u8>()
                .map_err(|_| CalcError::InvalidAddressFormat(input.to_string()))?,
        ),
        None => None,
    };
    log::trace!("split_address({input:?}) -> {address} {prefix:?}");
    Ok((address, prefix))
}

impl AddressArgs {
    /// Address and prefix, falling back to `default_prefix`.
    pub fn resolve(&self, default_prefix: u8) -> Result<(String, u8), CalcError> {
        let (address, inline) = split_address(&self.address)?;
        Ok((address, self.prefix.or(inline).unwrap_or(default_prefix)))
    }
}

/// Run the parsed command and return the text to print.
pub fn run(cli: &Cli, config: &Config) -> Result<String, Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.format);
    log::info!("run {:?} format={format:?}", cli.command);

    let text = match &cli.command {
        Command::Subnet(args) => {
            let (address, prefix) = args.resolve(config.ipv4_prefix)?;
            let result = ipv4_subnet(&address, prefix)?;
            match format {
                OutputFormat::Csv => output::render_rows(&output::subnet_rows(&result)),
                OutputFormat::Json => output::to_json(&result)?,
            }
        }
        Command::Cidr(args) => {
            let (address, prefix) = args.resolve(config.ipv4_prefix)?;
            let result = ipv4_cidr(&address, prefix)?;
            let block = octet_block(&address, prefix)?;
            match format {
                OutputFormat::Csv => output::render_rows(&output::cidr_rows(&result, &block)),
                OutputFormat::Json => output::to_json(&CidrReport {
                    result: &result,
                    octet_block: &block,
                })?,
            }
        }
        Command::Ipv6(args) => {
            let (address, prefix) = args.resolve(config.ipv6_prefix)?;
            let result = ipv6_subnet(&address, prefix)?;
            match format {
                OutputFormat::Csv => output::render_rows(&output::ipv6_rows(&result)),
                OutputFormat::Json => output::to_json(&result)?,
            }
        }
        Command::Class { class } => {
            let class: LegacyClass = class.parse()?;
            let defaults = crate::legacy_class_defaults(class);
            match format {
                OutputFormat::Csv => {
                    output::render_rows(&output::class_rows(&defaults, class.info()))
                }
                OutputFormat::Json => output::to_json(&ClassReport {
                    defaults: &defaults,
                    info: class.info(),
                })?,
            }
        }
    };
    Ok(text)
}

/// Neutral message for rejected input, in the requested format.
pub fn render_invalid(err: &CalcError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => output::error_json(err)
            .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", err.kind())),
        OutputFormat::Csv => format!("invalid input ({:?}): {err}", err.kind()),
    }
}

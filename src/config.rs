//! Runtime configuration.
//!
//! Defaults are compile-time constants; each can be overridden by an environment variable
//! (a `.env` file is loaded by the binary before [`Config::from_env`] runs).

use crate::models::ipv6;
use clap::ValueEnum;
use std::str::FromStr;

/// Prefix used for IPv4 input without `/nn`.
pub const DEFAULT_IPV4_PREFIX: u8 = 24;
/// Prefix used for IPv6 input without `/nn`.
pub const DEFAULT_IPV6_PREFIX: u8 = 64;
/// log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Width of the label column in CSV output.
pub const LABEL_WIDTH: usize = 18;
/// Width of the value column in CSV output.
pub const VALUE_WIDTH: usize = 44;

pub const ENV_IPV4_PREFIX: &str = "SUBNET_CALC_IPV4_PREFIX";
pub const ENV_IPV6_PREFIX: &str = "SUBNET_CALC_IPV6_PREFIX";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ipv4_prefix: u8,
    pub ipv6_prefix: u8,
    pub log_config: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ipv4_prefix: DEFAULT_IPV4_PREFIX,
            ipv6_prefix: DEFAULT_IPV6_PREFIX,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Bad values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(prefix) = parse_var(&lookup, ENV_IPV4_PREFIX, |p: &u8| {
            *p <= crate::models::ipv4::MAX_LENGTH
        }) {
            config.ipv4_prefix = prefix;
        }
        if let Some(prefix) = parse_var(&lookup, ENV_IPV6_PREFIX, |p: &u8| {
            (1..=ipv6::MAX_LENGTH).contains(p)
        }) {
            config.ipv6_prefix = prefix;
        }
        if let Some(format) = parse_var(&lookup, ENV_FORMAT, |_: &OutputFormat| true) {
            config.format = format;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }
        log::debug!("config: {config:?}");
        config
    }
}

fn parse_var<T, F, V>(lookup: &F, key: &str, valid: V) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    V: Fn(&T) -> bool,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => Some(value),
        _ => {
            log::warn!("Ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

/// Path of the log4rs configuration, read before logging is up.
pub fn log_config_path() -> String {
    std::env::var(ENV_LOG_CONFIG)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string())
}

//! Service configuration read from the environment.
//!
//! `main` loads an optional `.env` file with `dotenv` before calling
//! [`AppConfig::from_env`]. The grievance core itself reads no environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::AppError;

pub const HOST_VAR: &str = "GRIEVANCE_HOST";
pub const PORT_VAR: &str = "GRIEVANCE_PORT";
pub const LOG_FORMAT_VAR: &str = "GRIEVANCE_LOG_FORMAT";

const DEFAULT_PORT: u16 = 8000;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "{} must be pretty, json or bunyan, got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment, falling back to defaults
    /// for unset variables. Set-but-malformed values are errors.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = match env::var(HOST_VAR) {
            Ok(value) => value.trim().parse::<IpAddr>()?,
            Err(_) => defaults.host,
        };

        let port = match env::var(PORT_VAR) {
            Ok(value) => value.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("{} must be a port number: {}", PORT_VAR, e))
            })?,
            Err(_) => defaults.port,
        };

        let log_format = match env::var(LOG_FORMAT_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Directory holding the browser bundle under `pkg/`.
    pub site_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: IpAddr::V4(Ipv4Addr::LOCALHOST), port: DEFAULT_PORT, site_root: PathBuf::from(DEFAULT_SITE_ROOT) }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `JANUS_BIND`: listen address, default `127.0.0.1`
    /// - `PORT`: default 8000
    /// - `JANUS_SITE_ROOT`: default `target/site`
    ///
    /// # Errors
    ///
    /// Returns an error if `JANUS_BIND` or `PORT` is set but malformed.
    pub fn from_env() -> Result<Self, ServerError> {
        let bind = parse_bind(std::env::var("JANUS_BIND").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = std::env::var("JANUS_SITE_ROOT").map_or_else(|_| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        Ok(Self { bind, port, site_root })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse_bind(raw: Option<&str>) -> Result<IpAddr, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::ConfigParse(format!("invalid JANUS_BIND: {value}"))),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::ConfigParse(format!("invalid PORT: {value}"))),
    }
}

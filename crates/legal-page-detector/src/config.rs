use std::net::SocketAddr;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to serve MCP on. `None` serves a single session on stdio.
    pub tcp_listen_addr: Option<SocketAddr>,
}

impl Config {
    /// Optional:
    /// - `MCP_TCP_LISTEN_ADDR`: socket address such as "127.0.0.1:7800"
    pub fn from_env() -> Result<Self, AppError> {
        let tcp_listen_addr = parse_listen_addr(std::env::var("MCP_TCP_LISTEN_ADDR").ok())?;
        Ok(Self { tcp_listen_addr })
    }
}

fn parse_listen_addr(raw: Option<String>) -> Result<Option<SocketAddr>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<SocketAddr>().map(Some).map_err(|e| {
        AppError::Config(format!("MCP_TCP_LISTEN_ADDR '{trimmed}' is not a socket address: {e}"))
    })
}

//! Configuration schema types

use crate::error::{ProxyError, Result};
use hourglass_core::{parse_seed_list, EmptyBlockListInput};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete proxy configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub blocklist: BlocklistConfig,
}

impl Config {
    /// Initial block-list members: a `--block` flag wins over the config
    /// file, and starting with nothing to block is refused
    pub fn initial_hosts(&self, flag: Option<&str>) -> std::result::Result<Vec<String>, EmptyBlockListInput> {
        if let Some(raw) = flag {
            return parse_seed_list(raw);
        }
        if self.blocklist.hosts.is_empty() {
            return Err(EmptyBlockListInput);
        }
        Ok(self.blocklist.hosts.clone())
    }
}

/// Listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.bind, self.port);
        addr.parse()
            .map_err(|source| ProxyError::ListenAddr { addr, source })
    }
}

/// Block window boundaries in kitchen time, e.g. `9:00AM`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_start")]
    pub start: String,
    #[serde(default = "default_window_end")]
    pub end: String,
}

fn default_window_start() -> String {
    hourglass_core::window::DEFAULT_START.to_string()
}

fn default_window_end() -> String {
    hourglass_core::window::DEFAULT_END.to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start: default_window_start(),
            end: default_window_end(),
        }
    }
}

/// Hosts blocked from startup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlocklistConfig {
    #[serde(default)]
    pub hosts: Vec<String>,
}

//! Error types for proxy operations

use hourglass_core::{EmptyBlockListInput, WindowConfigError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProxyError>;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Failed to load config from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid listen address {addr:?}: {source}")]
    ListenAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error(transparent)]
    Window(#[from] WindowConfigError),

    #[error(transparent)]
    EmptyBlockList(#[from] EmptyBlockListInput),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

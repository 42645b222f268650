//! Forward HTTP proxy that blocks listed hosts during a daily time window

pub mod clock;
pub mod config;
pub mod error;
pub mod proxy;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use config::{Config, ConfigLoader};
pub use error::{ProxyError, Result};
pub use proxy::{ProxyServer, ProxyServerConfig};

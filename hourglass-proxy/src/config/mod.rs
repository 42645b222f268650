//! Configuration management for the proxy daemon

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{BlocklistConfig, Config, ServerConfig, WindowConfig};

//! HTTP proxy server and request routing

pub mod handler;
pub mod server;

pub use server::{ProxyServer, ProxyServerConfig};

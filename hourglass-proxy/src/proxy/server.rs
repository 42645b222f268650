use crate::clock::Clock;
use crate::error::Result;
use crate::proxy::handler;
use hourglass_core::AdmissionEngine;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info};

/// Forward proxy server configuration
#[derive(Clone)]
pub struct ProxyServerConfig {
    /// Address to listen on
    pub listen: SocketAddr,
    /// Admission engine consulted for every proxied request
    pub engine: AdmissionEngine,
    /// Source of the current moment
    pub clock: Arc<dyn Clock>,
    /// Outbound client used to fetch permitted requests
    pub client: reqwest::Client,
}

/// Forward HTTP proxy server
pub struct ProxyServer {
    config: ProxyServerConfig,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl ProxyServer {
    /// Bind a listener on the configured address
    pub async fn bind(config: ProxyServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(config.listen).await?;
        let local_addr = listener.local_addr()?;

        info!(
            "Proxy listening on http://{} ({} blocked hosts, window {})",
            local_addr,
            config.engine.list().len(),
            config.engine.window(),
        );

        Ok(Self {
            config,
            listener,
            local_addr,
        })
    }

    /// Address the listener is bound to; useful when binding port 0
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until the process exits
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            debug!("Client connected: {}", peer);

            let config = self.config.clone();

            // Serve each connection on its own task
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req| handler::route(req, config.clone()));

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("Connection from {} ended: {}", peer, e);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use hourglass_core::{BlockList, BlockWindow};

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let config = ProxyServerConfig {
            listen: "127.0.0.1:0".parse().unwrap(),
            engine: AdmissionEngine::new(
                BlockList::new(),
                BlockWindow::configure("", "").unwrap(),
            ),
            clock: Arc::new(SystemClock),
            client: reqwest::Client::new(),
        };

        let server = ProxyServer::bind(config).await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
    }
}

//! Forward HTTP proxy daemon with a time-windowed block list

use anyhow::{Context, Result};
use clap::Parser;
use hourglass_core::{AdmissionEngine, BlockList, BlockWindow};
use hourglass_proxy::{ConfigLoader, ProxyServer, ProxyServerConfig, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hourglass-proxy")]
#[command(about = "Forward HTTP proxy that blocks listed hosts during a daily window")]
struct Args {
    /// Port to listen on
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Comma-separated hosts to block, e.g. reddit.com,twitter.com
    #[arg(long)]
    block: Option<String>,

    /// Start of the block window in kitchen time, e.g. 9:00AM
    #[arg(long)]
    block_start_time: Option<String>,

    /// End of the block window in kitchen time, e.g. 5:00PM
    #[arg(long)]
    block_end_time: Option<String>,

    /// Config file path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let env_filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration, flags win over file values
    let mut config = ConfigLoader::load_or_default(args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(start) = args.block_start_time {
        config.window.start = start;
    }
    if let Some(end) = args.block_end_time {
        config.window.end = end;
    }

    let window = BlockWindow::configure(&config.window.start, &config.window.end)
        .context("Refusing to start with an unusable block window")?;

    let hosts = config
        .initial_hosts(args.block.as_deref())
        .context("Supply hosts via --block or the [blocklist] config section")?;

    let list = BlockList::new();
    for host in &hosts {
        list.add(host);
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("hourglass-proxy/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build the outbound HTTP client")?;

    let server_config = ProxyServerConfig {
        listen: config.server.listen_addr()?,
        engine: AdmissionEngine::new(list, window),
        clock: Arc::new(SystemClock),
        client,
    };

    let server = ProxyServer::bind(server_config).await?;
    server.serve().await.map_err(Into::into)
}

//! R3ACH Proposal API server.
//!
//! A small HTTP service for the R3ACH marketing-proposal tool: read
//! endpoints over cached Supabase collections with layered fallback data,
//! and a generation endpoint that renders a templated markdown proposal
//! locally or forwards the job to an external automation webhook.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use r3ach_api::config::load_config;
use r3ach_api::observability::init_tracing;
use r3ach_api::{DataGateway, HttpServer};

#[derive(Debug, Parser)]
#[command(name = "r3ach-api", about = "R3ACH proposal API server")]
struct Args {
    /// Path to a TOML config file. Environment variables overlay it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address from config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        supabase_configured = config.supabase.is_configured(),
        webhook_configured = config.webhook.is_configured(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let gateway = DataGateway::new(&config)?;
    let server = HttpServer::new(config, gateway);

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

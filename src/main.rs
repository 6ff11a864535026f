use anyhow::{Context, Result};
use clap::Parser;
use lookup_aggregator::{AggregatorConfig, LookupServer, SystemResolver};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn setup_tracing() {
    // Check if we should enable tokio-console
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
        info!("tokio-console enabled on port 6669");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,lookup_aggregator=debug,tower_http=info")
    });
    fmt().with_env_filter(env_filter).with_target(true).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    setup_tracing();

    let config = AggregatorConfig::parse();
    let resolver = Arc::new(SystemResolver::from_system_conf());
    let server = LookupServer::from_config(&config, resolver)?;
    let app = server.router();

    println!("\nLookup Aggregator starting");
    println!("HTTP: http://{}", config.bind_addr);
    println!("\nEndpoints:");
    println!("- GET /       banner");
    println!("- GET /health liveness probe");
    println!("- GET /api    num, aadhar, pan, email, ip, username");
    println!("\nConfiguration:");
    println!("- Default phone region: {}", config.default_region);
    println!("- Developer: {}", config.developer);
    match &config.carrier_data {
        Some(path) => println!("- Carrier data: built-in + {}", path.display()),
        None => println!("- Carrier data: built-in"),
    }

    let cancellation_token = CancellationToken::new();

    // Handle shutdown signal
    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Shutdown signal received, stopping server...");
        shutdown_token.cancel();
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    let shutdown = cancellation_token.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Clean shutdown complete");

    Ok(())
}

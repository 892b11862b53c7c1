//! REST API server for state lookups
//!
//! Usage:
//!   ./target/release/api_server [options]
//!
//! Options:
//!   --port PORT    Port to listen on (default: 8080)
//!   --bind ADDR    Address to bind (default: 0.0.0.0)
//!
//! REST endpoints:
//!   GET /api/v1/health                      - Health check
//!   GET /api/v1/states                      - All states
//!   GET /api/v1/states/:code                - Single state
//!   GET /api/v1/lookup/name?name=X          - Code for a state name
//!   GET /api/v1/lookup/coords?lat=X&lon=Y   - Nearest state to a point

use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use us_states::{api, StateDirectory};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve US state lookups over HTTP")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: IpAddr,
}

fn print_banner(addr: &SocketAddr, states: usize) {
    println!("============================================================");
    println!("              US STATES LOOKUP API SERVER");
    println!("============================================================");
    println!();
    println!("  Address:  http://{}/api/v1/", addr);
    println!("  States:   {}", states);
    println!();
    println!("REST Endpoints:");
    println!("  GET /api/v1/health                  Health check");
    println!("  GET /api/v1/states                  All states");
    println!("  GET /api/v1/states/:code            Single state");
    println!("  GET /api/v1/lookup/name?name=X      Code by name");
    println!("  GET /api/v1/lookup/coords?lat=&lon= Nearest state");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.bind, args.port);

    let directory = Arc::new(StateDirectory::new());
    print_banner(&addr, directory.len());

    let app = api::create_router(directory);

    tracing::info!("Starting REST server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

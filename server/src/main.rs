//! Payroll backend entry point

use std::net::SocketAddr;

use clap::Parser;

use server::{
    services::{GeminiReportGenerator, MemoryStore, NoOpAuthenticator},
    Server, ServerResult,
};

const DEFAULT_PORT: u16 = 3001;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Payroll management backend")]
struct Args {
    /// Port for the HTTP server; falls back to the PORT environment variable
    #[arg(long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env values never override variables already set in the environment
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    shared::logging::init_tracing(Some(&args.log_level));

    let port = args
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);
    let bind_address = SocketAddr::from(([0, 0, 0, 0], port));

    if std::env::var("API_KEY").is_err() {
        tracing::warn!("API_KEY is not set; report generation will fail until it is configured");
    }

    let server = Server::new(
        bind_address,
        MemoryStore::new(),
        NoOpAuthenticator,
        GeminiReportGenerator::new(),
    );

    server.run().await
}

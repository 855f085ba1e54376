// ABOUTME: Server binary wiring configuration, storage, and the HTTP API together
// ABOUTME: Explicit startup sequence: config, logging, database migration, serve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tare Server Binary
//!
//! Starts the weight tracking API: loads environment configuration, opens
//! the record store (running its idempotent migration once, here, at
//! startup), and serves the router until interrupted.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tare::{
    clock::SystemClock, config::environment::ServerConfig,
    database_plugins::factory::Database, logging, resources::ServerResources, routes,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "tare-server")]
#[command(about = "Tare - single-user weight tracking service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;
    info!("starting tare-server");
    info!("{}", config.summary());

    // Schema creation happens exactly here, not lazily inside request
    // handlers.
    let database = Database::new(&config.database_url).await?;

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        database,
        Arc::new(SystemClock),
        config,
    ));
    let app = routes::router(&resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
        return;
    }
    info!("shutdown signal received");
}

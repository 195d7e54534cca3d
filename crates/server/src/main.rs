// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use anyhow::Context;
use auction_rest_api::{
    app, logging::{self, LoggingConfig}, metrics, state::AppState,
};
use auction_rest_api_config::{AuctionApiConfig, Args};
use axum::{ServiceExt, extract::Request};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();

    let config = if Path::new(&args.env_file).exists() {
        AuctionApiConfig::from_env_file(&args.env_file)
    } else {
        AuctionApiConfig::from_env()
    }
    .context("Invalid configuration")?;

    logging::init_with_config(LoggingConfig::from(&config.log))?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix);
    }

    let addr = format!("{}:{}", config.express.bind_host, config.express.port);
    let rpc_url = config.sui.rpc_url.clone();
    let package_id = config.sui.package_id.clone();

    let state = AppState::new(config).context("Failed to create Sui RPC client")?;
    let app = NormalizePathLayer::trim_trailing_slash().layer(app::create_app(state));

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Sui RPC: {}", rpc_url);
    tracing::info!("Auction package: {}", package_id);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

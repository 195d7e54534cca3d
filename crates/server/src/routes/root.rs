// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root endpoint handler.

use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};

const REPOSITORY: &str = "https://github.com/paritytech/auction-rest-api";

/// Handler for GET /
///
/// Returns API metadata and a list of all available routes.
pub async fn root_handler(State(state): State<AppState>) -> Json<Value> {
    let routes = state.route_registry.routes();

    Json(json!({
        "docs": REPOSITORY,
        "github": REPOSITORY,
        "version": env!("CARGO_PKG_VERSION"),
        "listen": format!("{}:{}", state.config.express.bind_host, state.config.express.port),
        "packageId": state.parser.package_id(),
        "routes": routes
    }))
}

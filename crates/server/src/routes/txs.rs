// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::txs,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/txs/creates",
            "get",
            get(txs::get_txs_creates),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/txs/bids",
            "get",
            get(txs::get_txs_bids),
        )
        .route_registered(registry, API_VERSION, "/txs/{digest}", "get", get(txs::get_tx))
}

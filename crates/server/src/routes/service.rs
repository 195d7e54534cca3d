// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Endpoints describing the service itself rather than chain state.

use axum::{Router, routing::get};

use crate::{
    handlers::{health, version},
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, API_VERSION, "/health", "get", get(health::get_health))
        .route_registered(registry, API_VERSION, "/version", "get", get(version::get_version))
}

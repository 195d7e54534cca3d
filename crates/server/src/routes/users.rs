// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::users,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(registry, API_VERSION, "/users/{owner}", "get", get(users::get_user))
        .route_registered(
            registry,
            API_VERSION,
            "/users/{owner}/items",
            "get",
            get(users::get_user_items),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/users/{owner}/auctions",
            "get",
            get(users::get_user_auctions),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/users/{owner}/bids",
            "get",
            get(users::get_user_bids),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/users/{owner}/recent",
            "get",
            get(users::get_user_recent),
        )
}

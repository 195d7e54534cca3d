// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, routing::get};

use crate::{
    handlers::auctions,
    routes::{API_VERSION, RegisterRoute, RouteRegistry},
    state::AppState,
};

pub fn routes(registry: &RouteRegistry) -> Router<AppState> {
    Router::new()
        .route_registered(
            registry,
            API_VERSION,
            "/auctions",
            "get",
            get(auctions::get_auctions),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/auctions/{auctionId}",
            "get",
            get(auctions::get_auction),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/auctions/{auctionId}/items",
            "get",
            get(auctions::get_auction_items),
        )
        .route_registered(
            registry,
            API_VERSION,
            "/auctions/{auctionId}/txs",
            "get",
            get(auctions::get_auction_txs),
        )
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};

use crate::{
    logging::http_logger_middleware,
    metrics::metrics_middleware,
    routes::{self, API_VERSION},
    state::AppState,
};

/// Builds the full router: `/` and the metrics endpoints at the top level,
/// every API route under `/v1`.
pub fn create_app(state: AppState) -> Router {
    let registry = &state.route_registry;

    let api = Router::new()
        .merge(routes::service::routes(registry))
        .merge(routes::auctions::routes(registry))
        .merge(routes::txs::routes(registry))
        .merge(routes::items::routes(registry))
        .merge(routes::users::routes(registry))
        .merge(routes::transaction::routes(registry));

    let mut app = Router::new()
        .route("/", get(routes::root::root_handler))
        .nest(API_VERSION, api);

    if state.config.metrics.enabled {
        app = app
            .merge(routes::metrics::routes(registry))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                metrics_middleware,
            ));
    }

    app.layer(RequestBodyLimitLayer::new(
        state.config.express.request_limit,
    ))
    .layer(CorsLayer::permissive())
    .layer(middleware::from_fn(http_logger_middleware))
    .with_state(state)
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

use crate::state::AppState;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

lazy_static! {
    /// Path parameters collapsed into placeholders so that route labels stay bounded.
    static ref ROUTE_PATTERNS: Vec<(Regex, &'static str)> = [
        (r"^/v1/auctions/0x[0-9a-fA-F]+(/items|/txs)?$", "/v1/auctions/{auctionId}${1}"),
        (r"^/v1/items/0x[0-9a-fA-F]+$", "/v1/items/{itemId}"),
        (r"^/v1/users/0x[0-9a-fA-F]+(/items)?$", "/v1/users/{owner}${1}"),
        (r"^/v1/txs/[1-9A-HJ-NP-Za-km-z]{32,44}$", "/v1/txs/{digest}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("route pattern is valid"), replacement)
    })
    .collect();
}

/// Normalize a request path by replacing parameters with placeholders.
/// Example: /v1/items/0x12ab -> /v1/items/{itemId}
///
/// If include_query_params is true and query_string is provided, parameter
/// names are appended sorted, with placeholder values:
/// /v1/auctions/{auctionId}/txs?limit=<?>&order=<?>
pub(crate) fn normalize_route(
    path: &str,
    query_string: Option<&str>,
    include_query_params: bool,
) -> String {
    let mut normalized = path.to_string();
    if let Some((re, replacement)) = ROUTE_PATTERNS.iter().find(|(re, _)| re.is_match(path)) {
        normalized = re.replace(path, *replacement).to_string();
    }

    if include_query_params
        && let Some(query) = query_string
        && !query.is_empty()
    {
        let mut params: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.split('=').next())
            .filter(|name| !name.is_empty())
            .collect();
        params.sort_unstable();
        params.dedup();

        let query_params = params
            .iter()
            .map(|name| format!("{}=<?>", name))
            .collect::<Vec<_>>()
            .join("&");

        normalized = format!("{}?{}", normalized, query_params);
    }

    normalized
}

/// Metrics middleware for tracking HTTP requests
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let include_query_params = state.config.metrics.include_queryparams;
    let query_string = req.uri().query().map(str::to_string);

    // Matched paths already carry placeholders; only the query needs adding
    let route = match &matched_path {
        Some(matched) => normalize_route(matched.as_str(), query_string.as_deref(), include_query_params),
        None => normalize_route(&path, query_string.as_deref(), include_query_params),
    };

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    // Buffer the body to measure it, then hand it back unchanged
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route_parameters() {
        let cases = [
            ("/v1/auctions/0xabc123", "/v1/auctions/{auctionId}"),
            ("/v1/auctions/0xabc123/items", "/v1/auctions/{auctionId}/items"),
            ("/v1/auctions/0xABC/txs", "/v1/auctions/{auctionId}/txs"),
            ("/v1/items/0x1", "/v1/items/{itemId}"),
            ("/v1/users/0x2/items", "/v1/users/{owner}/items"),
            (
                "/v1/txs/4mTwGkKGCzMTnPwkCQaHXKJwNfPTfnD2U3ZQKGfQfPzP",
                "/v1/txs/{digest}",
            ),
            ("/v1/txs/creates", "/v1/txs/creates"),
            ("/v1/health", "/v1/health"),
        ];

        for (path, expected) in cases {
            assert_eq!(normalize_route(path, None, false), expected, "path {}", path);
        }
    }

    #[test]
    fn test_normalize_route_query_params() {
        assert_eq!(
            normalize_route("/v1/txs/bids", Some("order=ascending&limit=5&limit=6"), true),
            "/v1/txs/bids?limit=<?>&order=<?>"
        );
        assert_eq!(
            normalize_route("/v1/txs/bids", Some("limit=5"), false),
            "/v1/txs/bids"
        );
        assert_eq!(normalize_route("/v1/txs/bids", Some(""), true), "/v1/txs/bids");
    }
}

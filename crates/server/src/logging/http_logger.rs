// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Emits one `http` target event per request at a level picked by status class.
macro_rules! log_request {
    ($level:ident, $method:expr, $path:expr, $status:expr, $duration_ms:expr) => {
        tracing::$level!(
            target: "http",
            method = %$method,
            path = %$path,
            status = $status,
            duration_ms = $duration_ms,
            "{} {} {} {}ms",
            $method,
            $path,
            $status,
            $duration_ms
        )
    };
}

/// HTTP logger middleware.
///
/// Logs `METHOD /path?query STATUS DURATIONms` under target `http`: at debug
/// for 2xx/3xx, warn for 4xx and error for 5xx. With the `http` log level
/// every request shows up; otherwise only failures do.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    match status {
        200..=399 => log_request!(debug, method, path, status, duration_ms),
        400..=499 => log_request!(warn, method, path, status, duration_ms),
        _ => log_request!(error, method, path, status, duration_ms),
    }

    response
}

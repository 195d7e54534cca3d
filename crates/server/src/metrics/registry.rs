// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::{Mutex, Once};
use thiserror::Error;

/// Label value of the decode outcome counter for records that are not auction actions.
pub const UNRECOGNIZED: &str = "unrecognized";

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized")]
    NotInitialized,

    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Encoded metrics are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);
    static ref INIT_ONCE: Once = Once::new();

    // Created without registering to the default registry
    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref DECODE_OUTCOMES: CounterVec = CounterVec::new(
        Opts::new(
            "decode_outcomes",
            "Transaction records decoded, by auction action or unrecognized"
        ),
        &["kind"]
    )
    .expect("Failed to create decode_outcomes counter");
}

/// Registers every metric with a registry whose names carry `prefix`.
/// Only the first call has an effect.
pub fn init(prefix: &str) {
    INIT_ONCE.call_once(|| {
        let prefix = (!prefix.is_empty()).then(|| prefix.to_string());
        let registry =
            Registry::new_custom(prefix, None).expect("Failed to create Prometheus registry");

        registry
            .register(Box::new(HTTP_REQUESTS.clone()))
            .expect("Failed to register http_requests");

        registry
            .register(Box::new(HTTP_REQUEST_SUCCESS.clone()))
            .expect("Failed to register http_request_success");

        registry
            .register(Box::new(HTTP_REQUEST_ERROR.clone()))
            .expect("Failed to register http_request_error");

        registry
            .register(Box::new(REQUEST_DURATION_SECONDS.clone()))
            .expect("Failed to register request_duration_seconds");

        registry
            .register(Box::new(RESPONSE_SIZE_BYTES.clone()))
            .expect("Failed to register response_size_bytes");

        registry
            .register(Box::new(DECODE_OUTCOMES.clone()))
            .expect("Failed to register decode_outcomes");

        if let Ok(mut slot) = REGISTRY.lock() {
            *slot = Some(registry);
        }
    });
}

/// Counts one decode attempt under the action's name, or [`UNRECOGNIZED`].
pub fn record_decode(kind: Option<&str>) {
    DECODE_OUTCOMES
        .with_label_values(&[kind.unwrap_or(UNRECOGNIZED)])
        .inc();
}

/// All registered metric families.
pub fn gather_metric_families() -> Result<Vec<MetricFamily>, MetricsError> {
    let guard = REGISTRY.lock().map_err(|_| MetricsError::NotInitialized)?;
    let registry = guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    Ok(registry.gather())
}

/// All registered metrics in Prometheus text format.
pub fn gather_metrics() -> Result<String, MetricsError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, http::StatusCode, response::IntoResponse};
use prometheus::proto::{MetricFamily, MetricType};
use serde_json::{Value, json};

use crate::metrics::{self, MetricsError};

fn gather_failed(err: MetricsError) -> axum::response::Response {
    let status = match err {
        MetricsError::NotInitialized => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({
        "error": format!("Failed to gather metrics: {err}"),
    }));
    (status, body).into_response()
}

/// Handler for Prometheus metrics endpoint (text format)
pub async fn get_metrics() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(text) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(err) => gather_failed(err),
    }
}

fn family_to_json(family: &MetricFamily) -> Value {
    let metrics: Vec<Value> = family
        .get_metric()
        .iter()
        .map(|m| {
            let labels: Vec<Value> = m
                .get_label()
                .iter()
                .map(|l| json!({"name": l.get_name(), "value": l.get_value()}))
                .collect();

            let value = match family.get_field_type() {
                MetricType::COUNTER => json!(m.get_counter().get_value()),
                MetricType::GAUGE => json!(m.get_gauge().get_value()),
                MetricType::HISTOGRAM => {
                    let h = m.get_histogram();
                    json!({
                        "sample_count": h.get_sample_count(),
                        "sample_sum": h.get_sample_sum(),
                    })
                }
                _ => Value::Null,
            };

            json!({"labels": labels, "value": value})
        })
        .collect();

    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": metrics,
    })
}

/// Handler for metrics in JSON format
pub async fn get_metrics_json() -> impl IntoResponse {
    match metrics::gather_metric_families() {
        Ok(families) => {
            let body: Vec<Value> = families.iter().map(family_to_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => gather_failed(err),
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),
}

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    ///
    /// Env: AUCTION_METRICS_ENABLED
    /// Default: false
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: AUCTION_METRICS_PROM_PREFIX
    /// Default: auction_rest_api
    pub prometheus_prefix: String,

    /// Include query parameters in route labels
    ///
    /// Env: AUCTION_METRICS_INCLUDE_QUERYPARAMS
    /// Default: false
    pub include_queryparams: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: "auction_rest_api".to_string(),
            include_queryparams: false,
        }
    }
}

/// Prometheus names must match `[a-zA-Z_:][a-zA-Z0-9_:]*`.
fn is_valid_prometheus_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == ':')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == ':')
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), MetricsError> {
        if !is_valid_prometheus_name(&self.prometheus_prefix) {
            return Err(MetricsError::InvalidPrometheusPrefix(
                self.prometheus_prefix.clone(),
            ));
        }

        Ok(())
    }
}

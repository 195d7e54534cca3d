// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load env file '{path}': {source}")]
    EnvFileError {
        path: String,
        #[source]
        source: dotenv::Error,
    },

    #[error("Failed to parse JSON setting: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Configuration validation failed: {0}")]
    ValidateError(String),

    #[error("Metrics configuration error: {0}")]
    MetricsError(#[from] crate::metrics::MetricsError),
}

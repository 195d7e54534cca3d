// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment-driven configuration for the auction REST API.
//!
//! Every setting is read from an `AUCTION_`-prefixed variable, optionally
//! seeded from an env file, and validated before the server starts.

mod args;
mod error;
mod express;
mod log;
mod metrics;
mod sui;

pub use args::Args;
pub use error::ConfigError;
pub use express::ExpressConfig;
pub use log::LogConfig;
pub use metrics::{MetricsConfig, MetricsError};
pub use sui::{DEFAULT_RPC_URL, SuiConfig, normalize_object_id};

use serde::Deserialize;
use std::collections::HashMap;
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;

const ENV_PREFIX: &str = "AUCTION_";

/// Validates that a string is a valid host (IP address or hostname)
pub(crate) fn is_valid_host(host: &str) -> bool {
    if IpAddr::from_str(host).is_ok() {
        return true;
    }

    // RFC 1123 hostname
    if host.is_empty() || host.len() > 253 {
        return false;
    }

    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Flat view of the environment, one field per variable.
#[derive(Debug, Default, Deserialize)]
struct EnvVars {
    express_bind_host: Option<String>,
    express_port: Option<u16>,
    express_request_limit: Option<usize>,

    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,

    sui_rpc_url: Option<String>,
    sui_package_id: Option<String>,
    sui_registry_id: Option<String>,
    sui_request_timeout_ms: Option<u64>,
    sui_max_concurrent_requests: Option<usize>,
    sui_error_messages: Option<String>,

    metrics_enabled: Option<bool>,
    metrics_prom_prefix: Option<String>,
    metrics_include_queryparams: Option<bool>,
}

impl From<EnvVars> for AuctionApiConfig {
    fn from(env: EnvVars) -> Self {
        let express = ExpressConfig::default();
        let log = LogConfig::default();
        let sui = SuiConfig::default();
        let metrics = MetricsConfig::default();

        Self {
            express: ExpressConfig {
                bind_host: env.express_bind_host.unwrap_or(express.bind_host),
                port: env.express_port.unwrap_or(express.port),
                request_limit: env.express_request_limit.unwrap_or(express.request_limit),
            },
            log: LogConfig {
                level: env.log_level.unwrap_or(log.level),
                json: env.log_json.unwrap_or(log.json),
                strip_ansi: env.log_strip_ansi.unwrap_or(log.strip_ansi),
                write: env.log_write.unwrap_or(log.write),
                write_path: env.log_write_path.unwrap_or(log.write_path),
                write_max_file_size: env
                    .log_write_max_file_size
                    .unwrap_or(log.write_max_file_size),
                write_max_files: env.log_write_max_files.unwrap_or(log.write_max_files),
            },
            sui: SuiConfig {
                rpc_url: env.sui_rpc_url.unwrap_or(sui.rpc_url),
                package_id: env.sui_package_id.unwrap_or(sui.package_id),
                registry_id: env.sui_registry_id.filter(|id| !id.is_empty()),
                request_timeout_ms: env
                    .sui_request_timeout_ms
                    .unwrap_or(sui.request_timeout_ms),
                max_concurrent_requests: env
                    .sui_max_concurrent_requests
                    .unwrap_or(sui.max_concurrent_requests),
                error_messages: sui.error_messages,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled.unwrap_or(metrics.enabled),
                prometheus_prefix: env.metrics_prom_prefix.unwrap_or(metrics.prometheus_prefix),
                include_queryparams: env
                    .metrics_include_queryparams
                    .unwrap_or(metrics.include_queryparams),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuctionApiConfig {
    pub express: ExpressConfig,
    pub log: LogConfig,
    pub sui: SuiConfig,
    pub metrics: MetricsConfig,
}

impl AuctionApiConfig {
    /// Loads and validates the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvVars>()?;
        Self::from_env_vars(env)
    }

    /// Loads `path` into the process environment, then reads the
    /// configuration. Variables already set take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_env()
    }

    /// Reads the configuration from explicit `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvVars>(vars)?;
        Self::from_env_vars(env)
    }

    fn from_env_vars(mut env: EnvVars) -> Result<Self, ConfigError> {
        let error_messages = env
            .sui_error_messages
            .take()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| serde_json::from_str::<HashMap<String, String>>(&raw))
            .transpose()?;

        let mut config = Self::from(env);
        if let Some(error_messages) = error_messages {
            config.sui.error_messages = error_messages;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validates every section, normalizing Sui ids in place.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.express.validate()?;
        self.log.validate()?;
        self.sui.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::collections::HashMap;
use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://fullnode.mainnet.sui.io:443";

#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// Sui full node JSON-RPC endpoint
    ///
    /// Env: AUCTION_SUI_RPC_URL
    /// Default: https://fullnode.mainnet.sui.io:443
    pub rpc_url: String,

    /// Id of the package that publishes the `auction` and `user` modules
    ///
    /// Env: AUCTION_SUI_PACKAGE_ID (required)
    pub package_id: String,

    /// Id of the shared user registry object
    ///
    /// Env: AUCTION_SUI_REGISTRY_ID
    pub registry_id: Option<String>,

    /// Timeout for a single RPC request
    ///
    /// Env: AUCTION_SUI_REQUEST_TIMEOUT_MS
    /// Default: 30000
    pub request_timeout_ms: u64,

    /// Maximum number of RPC requests in flight for one API call
    ///
    /// Env: AUCTION_SUI_MAX_CONCURRENT_REQUESTS
    /// Default: 10
    pub max_concurrent_requests: usize,

    /// Custom text for failed transactions, keyed by auction error name
    /// (e.g. `E_AUCTION_HAS_ENDED`) or by the whole raw message
    ///
    /// Env: AUCTION_SUI_ERROR_MESSAGES (JSON object)
    pub error_messages: HashMap<String, String>,
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            package_id: String::new(),
            registry_id: None,
            request_timeout_ms: 30_000,
            max_concurrent_requests: 10,
            error_messages: HashMap::new(),
        }
    }
}

/// Validates an object or package id and returns it as `0x` plus 64
/// lowercase hex digits.
pub fn normalize_object_id(field: &str, id: &str) -> Result<String, ConfigError> {
    let hex = id.strip_prefix("0x").ok_or_else(|| {
        ConfigError::ValidateError(format!("{field} '{id}' must start with 0x"))
    })?;

    if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::ValidateError(format!(
            "{field} '{id}' must be 0x followed by 1 to 64 hex digits"
        )));
    }

    Ok(format!("0x{:0>64}", hex.to_ascii_lowercase()))
}

impl SuiConfig {
    /// Validates the section and normalizes its ids in place.
    pub(crate) fn validate(&mut self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.rpc_url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid Sui RPC url '{}': {}", self.rpc_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidateError(format!(
                "Sui RPC url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.package_id.is_empty() {
            return Err(ConfigError::ValidateError(
                "AUCTION_SUI_PACKAGE_ID is required".to_string(),
            ));
        }
        self.package_id = normalize_object_id("Package id", &self.package_id)?;

        self.registry_id = self
            .registry_id
            .as_deref()
            .map(|id| normalize_object_id("Registry id", id))
            .transpose()?;

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Sui request timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::ValidateError(
                "Sui max concurrent requests must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

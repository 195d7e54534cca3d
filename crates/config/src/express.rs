// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct ExpressConfig {
    /// Host to bind the HTTP server to
    ///
    /// Env: AUCTION_EXPRESS_BIND_HOST
    /// Default: 127.0.0.1
    pub bind_host: String,

    /// Port to bind the HTTP server to
    ///
    /// Env: AUCTION_EXPRESS_PORT
    /// Default: 8080
    pub port: u16,

    /// Maximum request body size in bytes
    ///
    /// Env: AUCTION_EXPRESS_REQUEST_LIMIT
    /// Default: 512000
    pub request_limit: usize,
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_limit() -> usize {
    512_000
}

impl ExpressConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !crate::is_valid_host(&self.bind_host) {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bind host '{}'",
                self.bind_host
            )));
        }

        if self.port == 0 {
            return Err(ConfigError::ValidateError(
                "Express port cannot be 0".to_string(),
            ));
        }

        if self.request_limit == 0 {
            return Err(ConfigError::ValidateError(
                "Express request limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpressConfig {
    fn default() -> Self {
        Self {
            bind_host: default_bind_host(),
            port: default_port(),
            request_limit: default_request_limit(),
        }
    }
}

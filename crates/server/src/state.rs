// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use std::time::Duration;

use auction_decoder::AuctionTxParser;
use auction_rest_api_config::AuctionApiConfig;

use crate::cache::UserIdCache;
use crate::routes::RouteRegistry;
use crate::rpc::{RpcError, SuiRpc, SuiRpcClient};

#[derive(Clone)]
pub struct AppState {
    pub config: AuctionApiConfig,
    pub rpc: Arc<dyn SuiRpc>,
    pub parser: Arc<AuctionTxParser>,
    pub user_ids: UserIdCache,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// Builds the state around a JSON-RPC client for the configured node.
    pub fn new(config: AuctionApiConfig) -> Result<Self, RpcError> {
        let rpc = SuiRpcClient::new(
            &config.sui.rpc_url,
            Duration::from_millis(config.sui.request_timeout_ms),
        )?;
        Ok(Self::with_rpc(config, Arc::new(rpc)))
    }

    /// Builds the state around any node implementation.
    pub fn with_rpc(config: AuctionApiConfig, rpc: Arc<dyn SuiRpc>) -> Self {
        let parser = Arc::new(AuctionTxParser::new(config.sui.package_id.clone()));
        Self {
            config,
            rpc,
            parser,
            user_ids: UserIdCache::new(),
            route_registry: RouteRegistry::new(),
        }
    }
}

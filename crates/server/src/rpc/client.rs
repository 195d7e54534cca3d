// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use async_trait::async_trait;
use auction_decoder::{ObjectResponse, TransactionBlockResponse};
use jsonrpsee::core::ClientError;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{object_data_options, tx_response_options};
use super::{
    DevInspectResponse, DryRunResponse, Order, OwnedFilter, Page, RpcError, SuiRpc, TxFilter,
};

/// JSON-RPC over HTTP client for a Sui full node.
pub struct SuiRpcClient {
    client: HttpClient,
}

impl SuiRpcClient {
    pub fn new(url: &str, request_timeout: Duration) -> Result<Self, RpcError> {
        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(url)
            .map_err(|err| RpcError::Connect {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        Ok(Self { client })
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: ArrayParams,
    ) -> Result<R, RpcError> {
        tracing::trace!(method, "Sui RPC request");
        self.client
            .request(method, params)
            .await
            .map_err(|err| client_error(method, err))
    }
}

fn client_error(method: &'static str, err: ClientError) -> RpcError {
    match err {
        ClientError::Call(obj) => RpcError::Call {
            method,
            code: obj.code(),
            message: obj.message().to_string(),
        },
        ClientError::RequestTimeout => RpcError::Timeout { method },
        ClientError::ParseError(err) => RpcError::Decode {
            method,
            message: err.to_string(),
        },
        other => RpcError::Transport {
            method,
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl SuiRpc for SuiRpcClient {
    async fn get_transaction_block(
        &self,
        digest: String,
    ) -> Result<TransactionBlockResponse, RpcError> {
        self.call(
            "sui_getTransactionBlock",
            rpc_params![digest, tx_response_options()],
        )
        .await
    }

    async fn query_transaction_blocks(
        &self,
        filter: TxFilter,
        cursor: Option<String>,
        limit: Option<u32>,
        order: Order,
    ) -> Result<Page<TransactionBlockResponse>, RpcError> {
        let query = json!({
            "filter": filter,
            "options": tx_response_options(),
        });
        self.call(
            "suix_queryTransactionBlocks",
            rpc_params![query, cursor, limit, order.is_descending()],
        )
        .await
    }

    async fn multi_get_objects(&self, ids: Vec<String>) -> Result<Vec<ObjectResponse>, RpcError> {
        self.call(
            "sui_multiGetObjects",
            rpc_params![ids, object_data_options()],
        )
        .await
    }

    async fn get_owned_objects(
        &self,
        owner: String,
        filter: OwnedFilter,
        cursor: Option<String>,
        limit: Option<u32>,
    ) -> Result<Page<ObjectResponse>, RpcError> {
        let query = json!({
            "filter": filter,
            "options": object_data_options(),
        });
        self.call(
            "suix_getOwnedObjects",
            rpc_params![owner, query, cursor, limit],
        )
        .await
    }

    async fn dry_run_transaction_block(
        &self,
        tx_bytes: String,
    ) -> Result<DryRunResponse, RpcError> {
        self.call("sui_dryRunTransactionBlock", rpc_params![tx_bytes])
            .await
    }

    async fn dev_inspect_transaction_block(
        &self,
        sender: String,
        tx_bytes: String,
    ) -> Result<DevInspectResponse, RpcError> {
        self.call(
            "sui_devInspectTransactionBlock",
            rpc_params![sender, tx_bytes],
        )
        .await
    }
}

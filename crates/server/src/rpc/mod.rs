// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access to a Sui full node.
//!
//! Handlers only see the [`SuiRpc`] trait, so they can be exercised against a
//! stub node in tests. [`SuiRpcClient`] is the JSON-RPC over HTTP implementation.

mod client;
pub mod types;

pub use client::SuiRpcClient;
pub use types::{DevInspectResponse, DryRunResponse, Order, OwnedFilter, Page, TxFilter};

use async_trait::async_trait;
use auction_decoder::{ObjectResponse, TransactionBlockResponse};
use thiserror::Error;

use crate::utils::run_with_concurrency_collect;

/// Largest id list `sui_multiGetObjects` accepts in one request.
pub const MAX_OBJECTS_PER_REQUEST: usize = 50;

/// JSON-RPC error code for invalid method parameters.
pub const INVALID_PARAMS_CODE: i32 = -32602;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Failed to create RPC client for '{url}': {message}")]
    Connect { url: String, message: String },

    #[error("{method} failed: node returned error {code}: {message}")]
    Call {
        method: &'static str,
        code: i32,
        message: String,
    },

    #[error("{method} timed out")]
    Timeout { method: &'static str },

    #[error("{method} failed: {message}")]
    Transport {
        method: &'static str,
        message: String,
    },

    #[error("{method} returned an unexpected response: {message}")]
    Decode {
        method: &'static str,
        message: String,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuiRpc: Send + Sync + 'static {
    /// `sui_getTransactionBlock` with input, effects and object changes.
    async fn get_transaction_block(
        &self,
        digest: String,
    ) -> Result<TransactionBlockResponse, RpcError>;

    /// `suix_queryTransactionBlocks` with input, effects and object changes.
    async fn query_transaction_blocks(
        &self,
        filter: TxFilter,
        cursor: Option<String>,
        limit: Option<u32>,
        order: Order,
    ) -> Result<Page<TransactionBlockResponse>, RpcError>;

    /// `sui_multiGetObjects` with content, display and type. At most
    /// [`MAX_OBJECTS_PER_REQUEST`] ids; see [`multi_get_objects_chunked`].
    async fn multi_get_objects(&self, ids: Vec<String>) -> Result<Vec<ObjectResponse>, RpcError>;

    /// `suix_getOwnedObjects` with content, display and type.
    async fn get_owned_objects(
        &self,
        owner: String,
        filter: OwnedFilter,
        cursor: Option<String>,
        limit: Option<u32>,
    ) -> Result<Page<ObjectResponse>, RpcError>;

    /// `sui_dryRunTransactionBlock` over base64 transaction bytes.
    async fn dry_run_transaction_block(&self, tx_bytes: String)
    -> Result<DryRunResponse, RpcError>;

    /// `sui_devInspectTransactionBlock` over a base64 `TransactionKind`, run
    /// as `sender` without signatures or gas.
    async fn dev_inspect_transaction_block(
        &self,
        sender: String,
        tx_bytes: String,
    ) -> Result<DevInspectResponse, RpcError>;
}

/// Fetches any number of objects, [`MAX_OBJECTS_PER_REQUEST`] per request with
/// at most `max_concurrent` requests in flight. Responses follow the order of `ids`.
pub async fn multi_get_objects_chunked(
    rpc: &dyn SuiRpc,
    ids: &[String],
    max_concurrent: usize,
) -> Result<Vec<ObjectResponse>, RpcError> {
    let chunks = ids
        .chunks(MAX_OBJECTS_PER_REQUEST)
        .map(|chunk| rpc.multi_get_objects(chunk.to_vec()));

    let pages = run_with_concurrency_collect(max_concurrent.max(1), chunks).await?;
    Ok(pages.into_iter().flatten().collect())
}

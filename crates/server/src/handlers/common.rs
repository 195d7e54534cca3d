// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query parameters, response envelopes and fetch helpers shared by handlers.

use auction_decoder::{AuctionTx, ObjectResponse, TransactionBlockResponse, normalize_address};
use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::rpc::{Order, Page, RpcError, multi_get_objects_chunked};
use crate::state::AppState;

/// Largest page size the node serves.
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Query parameters for transaction history endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TxPageParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub order: Order,
}

/// Query parameters for object listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ObjectPageParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

/// Checks a requested page size against `1..=MAX_PAGE_LIMIT`.
pub fn validate_limit(limit: Option<u32>) -> Result<Option<u32>, String> {
    match limit {
        Some(limit) if limit == 0 || limit > MAX_PAGE_LIMIT => Err(format!(
            "limit must be between 1 and {}, got {}",
            MAX_PAGE_LIMIT, limit
        )),
        other => Ok(other),
    }
}

/// Checks that `owner` is a Sui address and returns its 32-byte form, so every
/// spelling of one address maps to the same user.
pub fn normalize_owner(owner: &str) -> Result<String, String> {
    let hex = owner.strip_prefix("0x").unwrap_or(owner);
    if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("'{owner}' is not a Sui address"));
    }
    Ok(normalize_address(hex))
}

/// One page of results with the node's cursor for the next one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
}

impl<T> PageResponse<T> {
    /// Maps every item of `page`, dropping those `f` rejects. The cursor still
    /// points past the whole page, so dropped items are never refetched.
    pub fn filter_map<U>(page: Page<U>, f: impl FnMut(U) -> Option<T>) -> Self {
        Self {
            data: page.data.into_iter().filter_map(f).collect(),
            next_cursor: page.next_cursor,
            has_next_page: page.has_next_page,
        }
    }
}

/// Decodes every record of a page with `decode`, counting each outcome.
/// Records that are not the expected action are dropped.
pub fn decode_page(
    page: Page<TransactionBlockResponse>,
    decode: impl Fn(&TransactionBlockResponse) -> Option<AuctionTx>,
) -> PageResponse<AuctionTx> {
    PageResponse::filter_map(page, |record| {
        let decoded = decode(&record);
        metrics::record_decode(decoded.as_ref().map(AuctionTx::kind));
        if decoded.is_none() {
            tracing::debug!(digest = %record.digest, "Dropping record that is not an auction action");
        }
        decoded
    })
}

/// Fetches object snapshots in the order of `ids`, chunked and with the
/// configured parallelism.
pub async fn fetch_objects(
    state: &AppState,
    ids: &[String],
) -> Result<Vec<ObjectResponse>, RpcError> {
    multi_get_objects_chunked(
        state.rpc.as_ref(),
        ids,
        state.config.sui.max_concurrent_requests,
    )
    .await
}

/// Fetches a single object snapshot.
pub async fn fetch_object(state: &AppState, id: &str) -> Result<ObjectResponse, RpcError> {
    let mut objects = state.rpc.multi_get_objects(vec![id.to_string()]).await?;
    if objects.is_empty() {
        return Err(RpcError::Decode {
            method: "sui_multiGetObjects",
            message: format!("no response for object {}", id),
        });
    }
    Ok(objects.swap_remove(0))
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::AuctionTx;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::metrics;
use crate::rpc::RpcError;
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetTxError {
    #[error("Failed to fetch transaction")]
    RpcFailed(#[source] RpcError),
}

impl IntoResponse for GetTxError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetTxError::RpcFailed(err) => utils::rpc_error_to_status(err),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct TxResponse {
    pub digest: String,
    /// The auction action the transaction performed, or `null`.
    pub event: Option<AuctionTx>,
}

/// Handler for GET /txs/{digest}
///
/// Fetches one transaction and decodes it. A transaction that is not an
/// auction action is not an error: `event` is `null`.
pub async fn get_tx(
    State(state): State<AppState>,
    Path(digest): Path<String>,
) -> Result<Json<TxResponse>, GetTxError> {
    let record = state
        .rpc
        .get_transaction_block(digest)
        .await
        .map_err(GetTxError::RpcFailed)?;

    let event = state.parser.parse_auction_tx(&record);
    metrics::record_decode(event.as_ref().map(AuctionTx::kind));

    Ok(Json(TxResponse {
        digest: record.digest,
        event,
    }))
}

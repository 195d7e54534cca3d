// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::AuctionTx;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::{PageResponse, TxPageParams, decode_page, validate_limit};
use crate::rpc::{RpcError, TxFilter};
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetAuctionTxsError {
    #[error("{0}")]
    InvalidLimit(String),

    #[error("Failed to query auction transactions")]
    RpcFailed(#[source] RpcError),
}

impl IntoResponse for GetAuctionTxsError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetAuctionTxsError::InvalidLimit(message) => (StatusCode::BAD_REQUEST, message.clone()),
            GetAuctionTxsError::RpcFailed(err) => utils::rpc_error_to_status(err),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Handler for GET /auctions/{auctionId}/txs
///
/// Returns one page of the transactions that changed the auction, decoded.
/// Records that are not auction actions are dropped from `data`.
pub async fn get_auction_txs(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
    Query(params): Query<TxPageParams>,
) -> Result<Json<PageResponse<AuctionTx>>, GetAuctionTxsError> {
    let limit = validate_limit(params.limit).map_err(GetAuctionTxsError::InvalidLimit)?;

    let page = state
        .rpc
        .query_transaction_blocks(
            TxFilter::ChangedObject(auction_id),
            params.cursor,
            limit,
            params.order,
        )
        .await
        .map_err(GetAuctionTxsError::RpcFailed)?;

    Ok(Json(decode_page(page, |record| {
        state.parser.parse_auction_tx(record)
    })))
}

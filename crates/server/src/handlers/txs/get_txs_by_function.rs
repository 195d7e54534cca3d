// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{AuctionTx, TransactionBlockResponse};
use auction_decoder::decoders::{ADMIN_CREATES_AUCTION, ANYONE_BIDS, AUCTION_MODULE};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::{PageResponse, TxPageParams, decode_page, validate_limit};
use crate::rpc::{Page, RpcError, TxFilter};
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetTxsError {
    #[error("{0}")]
    InvalidLimit(String),

    #[error("Failed to query {function} transactions")]
    RpcFailed {
        function: &'static str,
        #[source]
        source: RpcError,
    },
}

impl IntoResponse for GetTxsError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetTxsError::InvalidLimit(message) => (StatusCode::BAD_REQUEST, message.clone()),
            GetTxsError::RpcFailed { source, .. } => utils::rpc_error_to_status(source),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

async fn query_function(
    state: &AppState,
    function: &'static str,
    params: TxPageParams,
) -> Result<Page<TransactionBlockResponse>, GetTxsError> {
    let limit = validate_limit(params.limit).map_err(GetTxsError::InvalidLimit)?;

    let filter = TxFilter::MoveFunction {
        package: state.parser.package_id().to_string(),
        module: AUCTION_MODULE.to_string(),
        function: function.to_string(),
    };

    state
        .rpc
        .query_transaction_blocks(filter, params.cursor, limit, params.order)
        .await
        .map_err(|source| GetTxsError::RpcFailed { function, source })
}

/// Handler for GET /txs/creates
///
/// Returns one page of auction creations, newest first unless `order=ascending`.
pub async fn get_txs_creates(
    State(state): State<AppState>,
    Query(params): Query<TxPageParams>,
) -> Result<Json<PageResponse<AuctionTx>>, GetTxsError> {
    let page = query_function(&state, ADMIN_CREATES_AUCTION, params).await?;
    Ok(Json(decode_page(page, |record| {
        state
            .parser
            .admin_creates_auction(record)
            .map(AuctionTx::AdminCreatesAuction)
    })))
}

/// Handler for GET /txs/bids
///
/// Returns one page of bids across all auctions.
pub async fn get_txs_bids(
    State(state): State<AppState>,
    Query(params): Query<TxPageParams>,
) -> Result<Json<PageResponse<AuctionTx>>, GetTxsError> {
    let page = query_function(&state, ANYONE_BIDS, params).await?;
    Ok(Json(decode_page(page, |record| {
        state.parser.anyone_bids(record).map(AuctionTx::AnyoneBids)
    })))
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{SuiItem, parse_item};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::{ObjectPageParams, PageResponse, normalize_owner, validate_limit};
use crate::rpc::{OwnedFilter, RpcError};
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetUserItemsError {
    #[error("{0}")]
    InvalidLimit(String),

    #[error("{0}")]
    InvalidOwner(String),

    #[error("Failed to fetch owned objects")]
    RpcFailed(#[source] RpcError),
}

impl IntoResponse for GetUserItemsError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetUserItemsError::InvalidLimit(message) | GetUserItemsError::InvalidOwner(message) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            GetUserItemsError::RpcFailed(err) => utils::rpc_error_to_status(err),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Handler for GET /users/{owner}/items
///
/// Returns one page of the owner's objects that could be put up for auction:
/// coins are excluded, as is anything without public transfer.
pub async fn get_user_items(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    Query(params): Query<ObjectPageParams>,
) -> Result<Json<PageResponse<SuiItem>>, GetUserItemsError> {
    let owner = normalize_owner(&owner).map_err(GetUserItemsError::InvalidOwner)?;
    let limit = validate_limit(params.limit).map_err(GetUserItemsError::InvalidLimit)?;

    let page = state
        .rpc
        .get_owned_objects(owner, OwnedFilter::not_coins(), params.cursor, limit)
        .await
        .map_err(GetUserItemsError::RpcFailed)?;

    Ok(Json(PageResponse::filter_map(page, |resp| {
        parse_item(&resp).ok().filter(|item| item.has_public_transfer)
    })))
}

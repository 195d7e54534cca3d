// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{ObjectParseError, SuiItem, parse_item};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::fetch_object;
use crate::rpc::RpcError;
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetItemError {
    #[error("Failed to fetch item")]
    RpcFailed(#[source] RpcError),

    #[error("Item {id}: {source}")]
    ParseFailed {
        id: String,
        #[source]
        source: ObjectParseError,
    },
}

impl IntoResponse for GetItemError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetItemError::RpcFailed(err) => utils::rpc_error_to_status(err),
            GetItemError::ParseFailed { source, .. } => {
                (utils::object_error_to_status(source), self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Handler for GET /items/{itemId}
///
/// Returns any object as an item: its type and display metadata.
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<SuiItem>, GetItemError> {
    let resp = fetch_object(&state, &item_id)
        .await
        .map_err(GetItemError::RpcFailed)?;

    let item = parse_item(&resp).map_err(|source| GetItemError::ParseFailed {
        id: item_id,
        source,
    })?;

    Ok(Json(item))
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::history::{decode_auctions_page, decode_bids_page, decode_recent};
use auction_decoder::{
    HistoryError, HistoryPage, HistoryQuery, ObjectRef, RecentHistory, ReturnValue, UserAuction,
    UserBid,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use super::resolve_user_id;
use crate::handlers::common::{MAX_PAGE_LIMIT, fetch_object, normalize_owner, validate_limit};
use crate::rpc::{Order, RpcError};
use crate::state::AppState;
use crate::utils;

/// Query parameters for a user's auctions or bids.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HistoryParams {
    /// Index to resume from, as returned in `nextCursor`.
    pub cursor: Option<u64>,
    pub limit: Option<u32>,
    #[serde(default)]
    pub order: Order,
}

/// Query parameters for a user's most recent auctions and bids.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecentParams {
    pub limit_created: Option<u32>,
    pub limit_bids: Option<u32>,
}

#[derive(Debug, Error)]
pub enum GetUserHistoryError {
    #[error("{0}")]
    InvalidParam(String),

    #[error("Owner {0} has no user object")]
    NoUser(String),

    #[error("Failed to read user history")]
    RpcFailed(#[source] RpcError),

    #[error("User {id}: {source}")]
    UserObject {
        id: String,
        #[source]
        source: HistoryError,
    },

    #[error("{function} failed: {message}")]
    InspectFailed {
        function: &'static str,
        message: String,
    },

    #[error("{function} returned unexpected values: {source}")]
    DecodeFailed {
        function: &'static str,
        #[source]
        source: HistoryError,
    },
}

impl IntoResponse for GetUserHistoryError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetUserHistoryError::InvalidParam(message) => (StatusCode::BAD_REQUEST, message.clone()),
            GetUserHistoryError::NoUser(_) => (StatusCode::NOT_FOUND, self.to_string()),
            GetUserHistoryError::RpcFailed(err) => utils::rpc_error_to_status(err),
            GetUserHistoryError::UserObject { .. }
            | GetUserHistoryError::InspectFailed { .. }
            | GetUserHistoryError::DecodeFailed { .. } => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

fn page_limit(limit: Option<u32>) -> Result<u64, GetUserHistoryError> {
    let limit = validate_limit(limit).map_err(GetUserHistoryError::InvalidParam)?;
    Ok(u64::from(limit.unwrap_or(MAX_PAGE_LIMIT)))
}

/// Runs `query` against the owner's user object and returns what the getter
/// returned.
async fn inspect_user(
    state: &AppState,
    owner: &str,
    query: HistoryQuery,
) -> Result<Vec<ReturnValue>, GetUserHistoryError> {
    let owner = normalize_owner(owner).map_err(GetUserHistoryError::InvalidParam)?;

    let user_id = resolve_user_id(state, &owner)
        .await
        .map_err(GetUserHistoryError::RpcFailed)?
        .ok_or_else(|| GetUserHistoryError::NoUser(owner.clone()))?;

    let resp = fetch_object(state, &user_id)
        .await
        .map_err(GetUserHistoryError::RpcFailed)?;

    let user_object = |source| GetUserHistoryError::UserObject {
        id: user_id.clone(),
        source,
    };
    let user_ref = ObjectRef::from_response(&resp).map_err(user_object)?;
    let tx_bytes = query
        .to_tx_bytes(state.parser.package_id(), &user_ref)
        .map_err(user_object)?;

    tracing::debug!(%owner, function = query.function(), "Inspecting user history");
    state
        .rpc
        .dev_inspect_transaction_block(owner, tx_bytes)
        .await
        .map_err(GetUserHistoryError::RpcFailed)?
        .into_return_values()
        .map_err(|message| GetUserHistoryError::InspectFailed {
            function: query.function(),
            message,
        })
}

/// Cursor, limit and direction of a paged read.
fn paged_query(params: &HistoryParams) -> Result<(u64, u64, bool), GetUserHistoryError> {
    let ascending = !params.order.is_descending();
    let cursor = params
        .cursor
        .unwrap_or_else(|| HistoryQuery::first_cursor(ascending));
    Ok((cursor, page_limit(params.limit)?, ascending))
}

/// Handler for GET /users/{owner}/auctions
///
/// Returns one page of the auctions the owner created, newest first unless
/// `order=ascending`.
pub async fn get_user_auctions(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryPage<UserAuction>>, GetUserHistoryError> {
    let (cursor, limit, ascending) = paged_query(&params)?;
    let query = HistoryQuery::AuctionsCreated {
        cursor,
        limit,
        ascending,
    };

    let values = inspect_user(&state, &owner, query).await?;
    decode_auctions_page(&values)
        .map(Json)
        .map_err(|source| GetUserHistoryError::DecodeFailed {
            function: query.function(),
            source,
        })
}

/// Handler for GET /users/{owner}/bids
///
/// Returns one page of the bids the owner placed.
pub async fn get_user_bids(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryPage<UserBid>>, GetUserHistoryError> {
    let (cursor, limit, ascending) = paged_query(&params)?;
    let query = HistoryQuery::BidsPlaced {
        cursor,
        limit,
        ascending,
    };

    let values = inspect_user(&state, &owner, query).await?;
    decode_bids_page(&values)
        .map(Json)
        .map_err(|source| GetUserHistoryError::DecodeFailed {
            function: query.function(),
            source,
        })
}

/// Handler for GET /users/{owner}/recent
///
/// Returns the newest auctions and bids of the owner together with how many
/// of each there are.
pub async fn get_user_recent(
    State(state): State<AppState>,
    Path(owner): Path<String>,
    Query(params): Query<RecentParams>,
) -> Result<Json<RecentHistory>, GetUserHistoryError> {
    let query = HistoryQuery::Recent {
        limit_created: page_limit(params.limit_created)?,
        limit_bids: page_limit(params.limit_bids)?,
    };

    let values = inspect_user(&state, &owner, query).await?;
    decode_recent(&values)
        .map(Json)
        .map_err(|source| GetUserHistoryError::DecodeFailed {
            function: query.function(),
            source,
        })
}

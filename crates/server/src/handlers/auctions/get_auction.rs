// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{AuctionObj, ObjectParseError, ObjectResponse, ParsedObject};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::{fetch_object, fetch_objects};
use crate::rpc::RpcError;
use crate::state::AppState;
use crate::utils;

/// Most auctions one request may ask for.
pub const MAX_AUCTION_IDS: usize = 200;

#[derive(Debug, Error)]
pub enum GetAuctionError {
    #[error("Query parameter `ids` must list at least one auction id")]
    NoIds,

    #[error("At most {MAX_AUCTION_IDS} auction ids may be requested, got {0}")]
    TooManyIds(usize),

    #[error("Failed to fetch auctions")]
    RpcFailed(#[source] RpcError),

    #[error("Auction {id}: {source}")]
    ParseFailed {
        id: String,
        #[source]
        source: ObjectParseError,
    },

    #[error("Object {id} is not an auction of this package, it is a {kind}")]
    NotAnAuction { id: String, kind: &'static str },
}

impl IntoResponse for GetAuctionError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetAuctionError::NoIds | GetAuctionError::TooManyIds(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            GetAuctionError::RpcFailed(err) => utils::rpc_error_to_status(err),
            GetAuctionError::ParseFailed { source, .. } => {
                (utils::object_error_to_status(source), self.to_string())
            }
            GetAuctionError::NotAnAuction { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuctionsQueryParams {
    /// Comma-separated auction ids.
    pub ids: String,
}

fn parse_ids(ids: &str) -> Result<Vec<String>, GetAuctionError> {
    let ids: Vec<String> = ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    match ids.len() {
        0 => Err(GetAuctionError::NoIds),
        n if n > MAX_AUCTION_IDS => Err(GetAuctionError::TooManyIds(n)),
        _ => Ok(ids),
    }
}

/// Maps a snapshot onto an auction of the configured package.
pub(crate) fn parse_auction(
    state: &AppState,
    id: &str,
    resp: &ObjectResponse,
) -> Result<AuctionObj, GetAuctionError> {
    let parsed = state
        .parser
        .parse_object(resp)
        .map_err(|source| GetAuctionError::ParseFailed {
            id: id.to_string(),
            source,
        })?;

    match parsed {
        ParsedObject::Auction(auction) => Ok(auction),
        ParsedObject::User(_) => Err(GetAuctionError::NotAnAuction {
            id: id.to_string(),
            kind: "user",
        }),
        ParsedObject::Item(_) => Err(GetAuctionError::NotAnAuction {
            id: id.to_string(),
            kind: "item",
        }),
    }
}

/// Handler for GET /auctions/{auctionId}
///
/// Returns the current state of one auction.
pub async fn get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<Json<AuctionObj>, GetAuctionError> {
    let resp = fetch_object(&state, &auction_id)
        .await
        .map_err(GetAuctionError::RpcFailed)?;

    Ok(Json(parse_auction(&state, &auction_id, &resp)?))
}

/// Handler for GET /auctions?ids=a,b
///
/// Returns the state of several auctions, in the order requested. Fails if
/// any of them cannot be loaded.
pub async fn get_auctions(
    State(state): State<AppState>,
    Query(params): Query<AuctionsQueryParams>,
) -> Result<Json<Vec<AuctionObj>>, GetAuctionError> {
    let ids = parse_ids(&params.ids)?;
    let objects = fetch_objects(&state, &ids)
        .await
        .map_err(GetAuctionError::RpcFailed)?;

    let missing = ObjectResponse::default();
    let auctions = ids
        .iter()
        .enumerate()
        .map(|(idx, id)| parse_auction(&state, id, objects.get(idx).unwrap_or(&missing)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(auctions))
}

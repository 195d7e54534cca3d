// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{AuctionObj, SuiItem, parse_item};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use super::get_auction::{GetAuctionError, parse_auction};
use crate::handlers::common::{fetch_object, fetch_objects};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AuctionItemsResponse {
    pub auction: AuctionObj,
    pub items: Vec<SuiItem>,
}

/// Handler for GET /auctions/{auctionId}/items
///
/// Returns the auction together with snapshots of the items it holds. Items
/// that no longer resolve to an object are left out.
pub async fn get_auction_items(
    State(state): State<AppState>,
    Path(auction_id): Path<String>,
) -> Result<Json<AuctionItemsResponse>, GetAuctionError> {
    let resp = fetch_object(&state, &auction_id)
        .await
        .map_err(GetAuctionError::RpcFailed)?;
    let auction = parse_auction(&state, &auction_id, &resp)?;

    let objects = fetch_objects(&state, &auction.item_addrs)
        .await
        .map_err(GetAuctionError::RpcFailed)?;

    let items = auction
        .item_addrs
        .iter()
        .zip(objects.iter())
        .filter_map(|(id, resp)| match parse_item(resp) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::debug!(auction = %auction_id, item = %id, error = %err, "Skipping unreadable item");
                None
            }
        })
        .collect();

    Ok(Json(AuctionItemsResponse { auction, items }))
}

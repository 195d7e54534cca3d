// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Auction state, items and history.

mod get_auction;
mod get_auction_items;
mod get_auction_txs;

pub use get_auction::{AuctionsQueryParams, GetAuctionError, get_auction, get_auctions};
pub use get_auction_items::{AuctionItemsResponse, get_auction_items};
pub use get_auction_txs::{GetAuctionTxsError, get_auction_txs};

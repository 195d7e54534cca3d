// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Users, the items they own and their auction history.

mod get_user;
mod get_user_history;
mod get_user_items;

pub use get_user::{GetUserError, UserResponse, get_user, resolve_user_id};
pub use get_user_history::{
    GetUserHistoryError, HistoryParams, RecentParams, get_user_auctions, get_user_bids,
    get_user_recent,
};
pub use get_user_items::{GetUserItemsError, get_user_items};

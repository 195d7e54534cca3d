// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! REST API over the English-auction package on Sui.
//!
//! Auction and user objects are read from a full node and parsed; transaction
//! history is decoded into auction actions with [`auction_decoder`].

pub mod app;
pub mod cache;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod routes;
pub mod rpc;
pub mod state;
pub mod utils;

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod auctions;
pub mod items;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod service;
pub mod transaction;
pub mod txs;
pub mod users;

pub use registry::{API_VERSION, RegisterRoute, RouteInfo, RouteRegistry};

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod auctions;
pub mod common;
pub mod health;
pub mod items;
pub mod metrics;
pub mod transaction;
pub mod txs;
pub mod users;
pub mod version;

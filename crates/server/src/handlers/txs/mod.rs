// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded auction transactions.

mod get_tx;
mod get_txs_by_function;

pub use get_tx::{GetTxError, TxResponse, get_tx};
pub use get_txs_by_function::{GetTxsError, get_txs_bids, get_txs_creates};

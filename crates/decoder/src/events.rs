// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed auction actions recovered from transactions.

use num::BigUint;
use serde::{Serialize, Serializer};

/// Fields shared by every decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxMeta {
    pub digest: String,
    /// Milliseconds; 0 when the node did not report a timestamp.
    pub timestamp: u64,
    pub sender: String,
}

/// A decoded call with its payload under `inputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tx<I> {
    #[serde(flatten)]
    pub meta: TxMeta,
    pub inputs: I,
}

/// An `auction::admin_creates_auction` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxAdminCreatesAuction {
    #[serde(flatten)]
    pub meta: TxMeta,
    /// Id of the auction object the transaction created.
    pub auction_id: String,
    pub inputs: AdminCreatesAuctionInputs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminCreatesAuctionInputs {
    pub type_coin: String,
    pub name: String,
    pub description: String,
    pub item_addrs: Vec<String>,
    pub pay_addr: String,
    pub begin_delay_ms: u64,
    pub duration_ms: u64,
    #[serde(serialize_with = "serialize_biguint")]
    pub minimum_bid: BigUint,
    pub minimum_increase_bps: u64,
    pub extension_period_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnyoneBidsInputs {
    pub type_coin: String,
    pub auction_addr: String,
    #[serde(serialize_with = "serialize_biguint")]
    pub amount: BigUint,
}

/// Payload of the actions that only name the auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuctionRefInputs {
    pub type_coin: String,
    pub auction_addr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSetsPayAddrInputs {
    pub type_coin: String,
    pub auction_addr: String,
    pub pay_addr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnyoneSendsItemToWinnerInputs {
    pub type_coin: String,
    pub type_item: String,
    pub auction_addr: String,
    pub item_addr: String,
}

pub type TxAnyoneBids = Tx<AnyoneBidsInputs>;
pub type TxAdminAcceptsBid = Tx<AuctionRefInputs>;
pub type TxAdminCancelsAuction = Tx<AuctionRefInputs>;
pub type TxAdminSetsPayAddr = Tx<AdminSetsPayAddrInputs>;
pub type TxAnyonePaysFunds = Tx<AuctionRefInputs>;
pub type TxAnyoneSendsItemToWinner = Tx<AnyoneSendsItemToWinnerInputs>;

/// Any auction action. Serializes with a `kind` tag named after the Move function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuctionTx {
    AdminCreatesAuction(TxAdminCreatesAuction),
    AnyoneBids(TxAnyoneBids),
    AdminAcceptsBid(TxAdminAcceptsBid),
    AdminCancelsAuction(TxAdminCancelsAuction),
    AdminSetsPayAddr(TxAdminSetsPayAddr),
    AnyonePaysFunds(TxAnyonePaysFunds),
    AnyoneSendsItemToWinner(TxAnyoneSendsItemToWinner),
}

impl AuctionTx {
    /// Name of the Move function behind this action.
    pub fn kind(&self) -> &'static str {
        match self {
            AuctionTx::AdminCreatesAuction(_) => "admin_creates_auction",
            AuctionTx::AnyoneBids(_) => "anyone_bids",
            AuctionTx::AdminAcceptsBid(_) => "admin_accepts_bid",
            AuctionTx::AdminCancelsAuction(_) => "admin_cancels_auction",
            AuctionTx::AdminSetsPayAddr(_) => "admin_sets_pay_addr",
            AuctionTx::AnyonePaysFunds(_) => "anyone_pays_funds",
            AuctionTx::AnyoneSendsItemToWinner(_) => "anyone_sends_item_to_winner",
        }
    }

    pub fn meta(&self) -> &TxMeta {
        match self {
            AuctionTx::AdminCreatesAuction(tx) => &tx.meta,
            AuctionTx::AnyoneBids(tx) => &tx.meta,
            AuctionTx::AdminAcceptsBid(tx)
            | AuctionTx::AdminCancelsAuction(tx)
            | AuctionTx::AnyonePaysFunds(tx) => &tx.meta,
            AuctionTx::AdminSetsPayAddr(tx) => &tx.meta,
            AuctionTx::AnyoneSendsItemToWinner(tx) => &tx.meta,
        }
    }

    /// The auction the action applies to.
    pub fn auction_addr(&self) -> &str {
        match self {
            AuctionTx::AdminCreatesAuction(tx) => &tx.auction_id,
            AuctionTx::AnyoneBids(tx) => &tx.inputs.auction_addr,
            AuctionTx::AdminAcceptsBid(tx)
            | AuctionTx::AdminCancelsAuction(tx)
            | AuctionTx::AnyonePaysFunds(tx) => &tx.inputs.auction_addr,
            AuctionTx::AdminSetsPayAddr(tx) => &tx.inputs.auction_addr,
            AuctionTx::AnyoneSendsItemToWinner(tx) => &tx.inputs.auction_addr,
        }
    }
}

/// Amounts are rendered as decimal strings so JSON consumers never lose precision.
pub(crate) fn serialize_biguint<S: Serializer>(
    value: &BigUint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! One decoding rule per auction action.
//!
//! Every rule follows the same steps: resolve the matched call's inputs,
//! require the exact arity the Move function takes, look up the correlated
//! object change when the action needs one, and assemble the typed event.
//! Any failed step yields `None`.

use num::BigUint;

use crate::effects::{self, ChangeKind, TypeMatch};
use crate::events::{
    AdminCreatesAuctionInputs, AdminSetsPayAddrInputs, AnyoneBidsInputs,
    AnyoneSendsItemToWinnerInputs, AuctionRefInputs, Tx, TxAdminAcceptsBid,
    TxAdminCancelsAuction, TxAdminCreatesAuction, TxAdminSetsPayAddr, TxAnyoneBids,
    TxAnyonePaysFunds, TxAnyoneSendsItemToWinner, TxMeta,
};
use crate::matcher::{self, CallTarget, OperationShape};
use crate::operation::{CallArg, MoveCall, Operation};
use crate::record::{ObjectChangeRecord, TransactionBlockResponse, TxData};
use crate::resolve::resolve_inputs;
use crate::tx_error::normalize_address;

pub const AUCTION_MODULE: &str = "auction";
pub const USER_MODULE: &str = "user";

pub const ADMIN_CREATES_AUCTION: &str = "admin_creates_auction";
pub const ANYONE_BIDS: &str = "anyone_bids";
pub const ADMIN_ACCEPTS_BID: &str = "admin_accepts_bid";
pub const ADMIN_CANCELS_AUCTION: &str = "admin_cancels_auction";
pub const ADMIN_SETS_PAY_ADDR: &str = "admin_sets_pay_addr";
pub const ANYONE_PAYS_FUNDS: &str = "anyone_pays_funds";
pub const ANYONE_SENDS_ITEM_TO_WINNER: &str = "anyone_sends_item_to_winner";

/// The shared `0x2::clock::Clock` object.
pub const CLOCK_OBJECT_ID: &str = "0x6";

fn is_clock(id: &str) -> bool {
    normalize_address(id) == normalize_address(CLOCK_OBJECT_ID)
}

/// Decodes transactions on the `auction` module of one deployed package.
///
/// Holds no state besides the package id, so a single instance can be shared
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionTxParser {
    package_id: String,
    auction_type_prefix: String,
    user_type: String,
}

/// A parsed record plus the response it came from.
pub(crate) struct DecodeContext<'a> {
    pub resp: &'a TransactionBlockResponse,
    pub data: &'a TxData,
}

impl<'a> DecodeContext<'a> {
    pub fn new(resp: &'a TransactionBlockResponse, data: &'a TxData) -> Self {
        Self { resp, data }
    }

    fn meta(&self) -> TxMeta {
        TxMeta {
            digest: self.resp.digest.clone(),
            timestamp: self.resp.timestamp(),
            sender: self.data.sender.clone(),
        }
    }

    /// Resolved inputs of `call`, or `None` unless there are exactly `arity`.
    fn inputs_with_arity(&self, call: &MoveCall, arity: usize) -> Option<Vec<&'a CallArg>> {
        let inputs = resolve_inputs(call.args(), &self.data.inputs);
        if inputs.len() != arity {
            tracing::debug!(
                digest = %self.resp.digest,
                function = %call.function,
                expected = arity,
                actual = inputs.len(),
                "Rejecting call with unexpected input count"
            );
            return None;
        }
        Some(inputs)
    }
}

impl AuctionTxParser {
    pub fn new(package_id: impl Into<String>) -> Self {
        let package_id = package_id.into();
        Self {
            auction_type_prefix: format!("{package_id}::{AUCTION_MODULE}::Auction<"),
            user_type: format!("{package_id}::{USER_MODULE}::User"),
            package_id,
        }
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// Type prefix shared by every `Auction<T>` instantiation.
    pub fn auction_type_prefix(&self) -> &str {
        &self.auction_type_prefix
    }

    pub fn user_type(&self) -> &str {
        &self.user_type
    }

    pub fn target<'a>(&'a self, function: &'a str) -> CallTarget<'a> {
        CallTarget {
            package: &self.package_id,
            module: AUCTION_MODULE,
            function,
        }
    }

    // === per-action decoders ===

    /// Decodes an `admin_creates_auction` transaction.
    pub fn admin_creates_auction(
        &self,
        resp: &TransactionBlockResponse,
    ) -> Option<TxAdminCreatesAuction> {
        self.decode_single(resp, ADMIN_CREATES_AUCTION, decode_admin_creates_auction)
    }

    /// Decodes an `anyone_bids` transaction. Assumes the block holds a single bid.
    pub fn anyone_bids(&self, resp: &TransactionBlockResponse) -> Option<TxAnyoneBids> {
        self.decode_single(resp, ANYONE_BIDS, decode_anyone_bids)
    }

    pub fn admin_accepts_bid(&self, resp: &TransactionBlockResponse) -> Option<TxAdminAcceptsBid> {
        self.decode_single(resp, ADMIN_ACCEPTS_BID, decode_admin_accepts_bid)
    }

    pub fn admin_cancels_auction(
        &self,
        resp: &TransactionBlockResponse,
    ) -> Option<TxAdminCancelsAuction> {
        self.decode_single(resp, ADMIN_CANCELS_AUCTION, decode_admin_cancels_auction)
    }

    pub fn admin_sets_pay_addr(
        &self,
        resp: &TransactionBlockResponse,
    ) -> Option<TxAdminSetsPayAddr> {
        self.decode_single(resp, ADMIN_SETS_PAY_ADDR, decode_admin_sets_pay_addr)
    }

    pub fn anyone_pays_funds(&self, resp: &TransactionBlockResponse) -> Option<TxAnyonePaysFunds> {
        self.decode_single(resp, ANYONE_PAYS_FUNDS, decode_anyone_pays_funds)
    }

    pub fn anyone_sends_item_to_winner(
        &self,
        resp: &TransactionBlockResponse,
    ) -> Option<TxAnyoneSendsItemToWinner> {
        self.decode_single(
            resp,
            ANYONE_SENDS_ITEM_TO_WINNER,
            decode_anyone_sends_item_to_winner,
        )
    }

    fn decode_single<T>(
        &self,
        resp: &TransactionBlockResponse,
        function: &str,
        decode: fn(&AuctionTxParser, &DecodeContext<'_>, &MoveCall) -> Option<T>,
    ) -> Option<T> {
        let data = parse_record(resp)?;
        let ctx = DecodeContext::new(resp, &data);
        let call = matcher::find_call(&data.operations, &self.target(function))?;
        decode(self, &ctx, call)
    }

    // === object extractors ===

    /// The `Auction` object created by the transaction, if any.
    pub fn extract_auction_created<'a>(
        &self,
        resp: &'a TransactionBlockResponse,
    ) -> Option<&'a ObjectChangeRecord> {
        effects::find_object_change(
            resp.object_changes(),
            ChangeKind::Created,
            TypeMatch::Prefix(&self.auction_type_prefix),
        )
    }

    /// The `Auction` object mutated by the transaction, if any.
    pub fn extract_auction_mutated<'a>(
        &self,
        resp: &'a TransactionBlockResponse,
    ) -> Option<&'a ObjectChangeRecord> {
        effects::find_object_change(
            resp.object_changes(),
            ChangeKind::Mutated,
            TypeMatch::Prefix(&self.auction_type_prefix),
        )
    }

    /// The `User` object created or mutated by the transaction, if any.
    pub fn extract_user_changed<'a>(
        &self,
        resp: &'a TransactionBlockResponse,
    ) -> Option<&'a ObjectChangeRecord> {
        effects::find_object_change(
            resp.object_changes(),
            ChangeKind::CreatedOrMutated,
            TypeMatch::Exact(&self.user_type),
        )
    }
}

/// Parses the strict record view, logging why a record is unusable.
pub(crate) fn parse_record(resp: &TransactionBlockResponse) -> Option<TxData> {
    TxData::from_response(resp)
        .map_err(|err| {
            tracing::debug!(digest = %resp.digest, error = %err, "Skipping malformed transaction record");
        })
        .ok()
}

fn type_coin(call: &MoveCall) -> Option<String> {
    call.type_arg(0).map(str::to_string)
}

pub(crate) fn decode_admin_creates_auction(
    parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAdminCreatesAuction> {
    let inputs = ctx.inputs_with_arity(call, 10)?;
    let created = parser.extract_auction_created(ctx.resp)?;

    Some(TxAdminCreatesAuction {
        meta: ctx.meta(),
        auction_id: created.object_id.clone(),
        inputs: AdminCreatesAuctionInputs {
            type_coin: type_coin(call)?,
            name: inputs[0].value()?,
            description: inputs[1].value()?,
            item_addrs: inputs[2].value()?,
            pay_addr: inputs[3].value()?,
            begin_delay_ms: inputs[4].value()?,
            duration_ms: inputs[5].value()?,
            minimum_bid: inputs[6].value()?,
            minimum_increase_bps: inputs[7].value()?,
            extension_period_ms: inputs[8].value()?,
        },
    })
}

/// The bid amount is not an argument of the bid call: it is the input of the
/// `SplitCoins` that produced the payment coin, found in the same pass.
///
/// Wallets pass the user request as a result and the clock as the last input,
/// so the auction is the last resolved input that is not the clock.
pub(crate) fn decode_anyone_bids(
    parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    _call: &MoveCall,
) -> Option<TxAnyoneBids> {
    let found = matcher::dual_pass(
        &ctx.data.operations,
        &OperationShape::SplitCoins,
        &OperationShape::Call(parser.target(ANYONE_BIDS)),
    );

    let mut amount: Option<BigUint> = None;
    for op in found.first {
        let Operation::SplitCoins(_, amounts) = op else {
            continue;
        };
        let split_inputs = resolve_inputs(amounts, &ctx.data.inputs);
        if split_inputs.len() != 1 {
            return None;
        }
        amount = Some(split_inputs[0].value()?);
    }

    let mut bid: Option<(String, String)> = None;
    for op in found.second {
        let Some(call) = op.as_move_call().filter(|call| call.is_complete()) else {
            continue;
        };
        let bid_inputs = ctx.inputs_with_arity(call, 2)?;
        let auction_addr = bid_inputs
            .iter()
            .rev()
            .filter_map(|input| input.value::<String>())
            .find(|id| !is_clock(id))?;
        bid = Some((type_coin(call)?, auction_addr));
    }

    let (amount, (type_coin, auction_addr)) = match (amount, bid) {
        (Some(amount), Some(bid)) => (amount, bid),
        _ => return None,
    };

    Some(Tx {
        meta: ctx.meta(),
        inputs: AnyoneBidsInputs {
            type_coin,
            auction_addr,
            amount,
        },
    })
}

fn decode_auction_ref(ctx: &DecodeContext<'_>, call: &MoveCall) -> Option<Tx<AuctionRefInputs>> {
    let inputs = ctx.inputs_with_arity(call, 2)?;
    Some(Tx {
        meta: ctx.meta(),
        inputs: AuctionRefInputs {
            type_coin: type_coin(call)?,
            auction_addr: inputs[0].value()?,
        },
    })
}

pub(crate) fn decode_admin_accepts_bid(
    _parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAdminAcceptsBid> {
    decode_auction_ref(ctx, call)
}

pub(crate) fn decode_admin_cancels_auction(
    parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAdminCancelsAuction> {
    let tx = decode_auction_ref(ctx, call)?;
    parser.extract_auction_mutated(ctx.resp)?;
    Some(tx)
}

pub(crate) fn decode_admin_sets_pay_addr(
    parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAdminSetsPayAddr> {
    let inputs = ctx.inputs_with_arity(call, 3)?;
    parser.extract_auction_mutated(ctx.resp)?;

    Some(Tx {
        meta: ctx.meta(),
        inputs: AdminSetsPayAddrInputs {
            type_coin: type_coin(call)?,
            auction_addr: inputs[0].value()?,
            pay_addr: inputs[1].value()?,
        },
    })
}

pub(crate) fn decode_anyone_pays_funds(
    _parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAnyonePaysFunds> {
    decode_auction_ref(ctx, call)
}

pub(crate) fn decode_anyone_sends_item_to_winner(
    _parser: &AuctionTxParser,
    ctx: &DecodeContext<'_>,
    call: &MoveCall,
) -> Option<TxAnyoneSendsItemToWinner> {
    let inputs = ctx.inputs_with_arity(call, 3)?;

    Some(Tx {
        meta: ctx.meta(),
        inputs: AnyoneSendsItemToWinnerInputs {
            type_coin: type_coin(call)?,
            type_item: call.type_arg(1)?.to_string(),
            auction_addr: inputs[0].value()?,
            item_addr: inputs[1].value()?,
        },
    })
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Routing a transaction record to the decoder of the action it performs.

use crate::decoders::{
    ADMIN_ACCEPTS_BID, ADMIN_CANCELS_AUCTION, ADMIN_CREATES_AUCTION, ADMIN_SETS_PAY_ADDR,
    ANYONE_BIDS, ANYONE_PAYS_FUNDS, ANYONE_SENDS_ITEM_TO_WINNER, AUCTION_MODULE, AuctionTxParser,
    DecodeContext, decode_admin_accepts_bid, decode_admin_cancels_auction,
    decode_admin_creates_auction, decode_admin_sets_pay_addr, decode_anyone_bids,
    decode_anyone_pays_funds, decode_anyone_sends_item_to_winner, parse_record,
};
use crate::events::AuctionTx;
use crate::matcher;
use crate::operation::MoveCall;
use crate::record::TransactionBlockResponse;

type DecodeFn = fn(&AuctionTxParser, &DecodeContext<'_>, &MoveCall) -> Option<AuctionTx>;

/// One row of the dispatch table: an `auction` function and its decoder.
pub(crate) struct DispatchEntry {
    pub function: &'static str,
    decode: DecodeFn,
}

impl DispatchEntry {
    fn matches(&self, call: &MoveCall) -> bool {
        call.function == self.function
    }
}

/// Functions the dispatcher recognises. Order only matters for documentation:
/// the dispatcher follows the order of calls in the record, not this table.
pub(crate) static DISPATCH_TABLE: [DispatchEntry; 7] = [
    DispatchEntry {
        function: ADMIN_CREATES_AUCTION,
        decode: |parser, ctx, call| {
            decode_admin_creates_auction(parser, ctx, call).map(AuctionTx::AdminCreatesAuction)
        },
    },
    DispatchEntry {
        function: ANYONE_BIDS,
        decode: |parser, ctx, call| decode_anyone_bids(parser, ctx, call).map(AuctionTx::AnyoneBids),
    },
    DispatchEntry {
        function: ADMIN_ACCEPTS_BID,
        decode: |parser, ctx, call| {
            decode_admin_accepts_bid(parser, ctx, call).map(AuctionTx::AdminAcceptsBid)
        },
    },
    DispatchEntry {
        function: ADMIN_CANCELS_AUCTION,
        decode: |parser, ctx, call| {
            decode_admin_cancels_auction(parser, ctx, call).map(AuctionTx::AdminCancelsAuction)
        },
    },
    DispatchEntry {
        function: ADMIN_SETS_PAY_ADDR,
        decode: |parser, ctx, call| {
            decode_admin_sets_pay_addr(parser, ctx, call).map(AuctionTx::AdminSetsPayAddr)
        },
    },
    DispatchEntry {
        function: ANYONE_PAYS_FUNDS,
        decode: |parser, ctx, call| {
            decode_anyone_pays_funds(parser, ctx, call).map(AuctionTx::AnyonePaysFunds)
        },
    },
    DispatchEntry {
        function: ANYONE_SENDS_ITEM_TO_WINNER,
        decode: |parser, ctx, call| {
            decode_anyone_sends_item_to_winner(parser, ctx, call)
                .map(AuctionTx::AnyoneSendsItemToWinner)
        },
    },
];

/// Names of the `auction` functions that decode into an [`AuctionTx`].
pub fn known_functions() -> impl Iterator<Item = &'static str> {
    DISPATCH_TABLE.iter().map(|entry| entry.function)
}

impl AuctionTxParser {
    /// Decodes whichever auction action the transaction performs.
    ///
    /// Walks the operations once. Calls into the `auction` module with an
    /// unknown function are skipped; the first call to a known function
    /// decides the outcome, even if its decoder rejects the record. When a
    /// record holds several actions (settlement pays funds and sends items in
    /// one block) only the first is returned; use the per-action decoders to
    /// reach the others.
    pub fn parse_auction_tx(&self, resp: &TransactionBlockResponse) -> Option<AuctionTx> {
        let data = parse_record(resp)?;
        let ctx = DecodeContext::new(resp, &data);

        for call in matcher::module_calls(&data.operations, self.package_id(), AUCTION_MODULE) {
            let Some(entry) = DISPATCH_TABLE.iter().find(|entry| entry.matches(call)) else {
                tracing::trace!(function = %call.function, "Skipping auction call with no decoder");
                continue;
            };

            let decoded = (entry.decode)(self, &ctx, call);
            if decoded.is_none() {
                tracing::debug!(
                    digest = %resp.digest,
                    function = entry.function,
                    "Matched auction call failed to decode"
                );
            }
            return decoded;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;
    use serde_json::json;

    fn settlement_record() -> TransactionBlockResponse {
        record(
            vec![object_input("0xauction"), object_input(CLOCK), pure(json!("0xitem"))],
            vec![
                auction_call(
                    ANYONE_PAYS_FUNDS,
                    vec![SUI],
                    vec![json!({"Input": 0}), json!({"Input": 1})],
                ),
                auction_call(
                    ANYONE_SENDS_ITEM_TO_WINNER,
                    vec![SUI, "0xnft::nft::Nft"],
                    vec![json!({"Input": 0}), json!({"Input": 2}), json!({"Input": 1})],
                ),
            ],
            vec![],
        )
    }

    #[test]
    fn test_table_covers_every_action_once() {
        let mut functions: Vec<_> = known_functions().collect();
        assert_eq!(functions.len(), 7);
        functions.sort_unstable();
        functions.dedup();
        assert_eq!(functions.len(), 7);
    }

    #[test]
    fn test_settlement_dispatches_to_first_action() {
        let resp = settlement_record();

        let tx = parser().parse_auction_tx(&resp).unwrap();
        assert_eq!(tx.kind(), ANYONE_PAYS_FUNDS);
        assert_eq!(tx.auction_addr(), "0xauction");

        // the second half stays reachable through its own decoder
        let sent = parser().anyone_sends_item_to_winner(&resp).unwrap();
        assert_eq!(sent.inputs.item_addr, "0xitem");
    }

    #[test]
    fn test_first_structural_match_short_circuits() {
        // admin_accepts_bid with a missing input, followed by a valid pays_funds
        let resp = record(
            vec![object_input("0xauction"), object_input(CLOCK)],
            vec![
                auction_call(ADMIN_ACCEPTS_BID, vec![SUI], vec![json!({"Input": 0})]),
                auction_call(
                    ANYONE_PAYS_FUNDS,
                    vec![SUI],
                    vec![json!({"Input": 0}), json!({"Input": 1})],
                ),
            ],
            vec![],
        );
        assert!(parser().parse_auction_tx(&resp).is_none());
    }

    #[test]
    fn test_unknown_auction_functions_are_skipped() {
        let resp = record(
            vec![object_input("0xauction"), pure(json!("0xitem")), object_input(CLOCK)],
            vec![
                auction_call(
                    "admin_adds_item",
                    vec![SUI, "0xnft::nft::Nft"],
                    vec![json!({"Input": 0}), json!({"Input": 1})],
                ),
                auction_call(
                    ADMIN_ACCEPTS_BID,
                    vec![SUI],
                    vec![json!({"Input": 0}), json!({"Input": 2})],
                ),
            ],
            vec![],
        );

        let tx = parser().parse_auction_tx(&resp).unwrap();
        assert_eq!(tx.kind(), ADMIN_ACCEPTS_BID);
    }

    #[test]
    fn test_records_without_auction_calls_are_unrecognized() {
        let resp = record(
            vec![pure(json!("1000"))],
            vec![
                split_coins(vec![json!({"Input": 0})]),
                move_call("0x2", "transfer", "public_transfer", vec![SUI], vec![]),
                move_call("0xother", AUCTION_MODULE, ANYONE_BIDS, vec![SUI], vec![]),
            ],
            vec![],
        );

        assert!(parser().parse_auction_tx(&resp).is_none());
        assert!(parser().parse_auction_tx(&resp).is_none());
    }

    #[test]
    fn test_malformed_record_is_unrecognized() {
        let resp = TransactionBlockResponse {
            digest: DIGEST.to_string(),
            transaction: Some(json!({"data": {"sender": SENDER}})),
            ..Default::default()
        };
        assert!(parser().parse_auction_tx(&resp).is_none());
    }

    #[test]
    fn test_dispatch_decodes_zero_bid() {
        let resp = record(
            vec![object_input("0xuserobj"), object_input("0xauction"), pure(json!("0"))],
            vec![
                split_coins(vec![json!({"Input": 2})]),
                auction_call(
                    ANYONE_BIDS,
                    vec![SUI],
                    vec![json!({"Input": 0}), json!({"Input": 1}), json!({"Result": 0})],
                ),
                move_call(PACKAGE, "user", "destroy_user_request", vec![], vec![json!({"Result": 1})]),
            ],
            vec![],
        );

        let Some(AuctionTx::AnyoneBids(tx)) = parser().parse_auction_tx(&resp) else {
            panic!("expected a bid");
        };
        assert_eq!(tx.inputs.amount, num::BigUint::from(0u8));
        assert_eq!(tx.inputs.auction_addr, "0xauction");
    }
}

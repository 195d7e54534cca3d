// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end decoding tests over complete `SuiTransactionBlockResponse` JSON.
//!
//! Every record is built the way a full node renders it, then fed through the
//! public API only: the dispatcher and the per-action decoders.

#[cfg(test)]
mod tests {
    use auction_decoder::{AuctionTx, AuctionTxParser, TransactionBlockResponse};
    use num::BigUint;
    use rstest::rstest;
    use serde_json::{Value, json};

    const PACKAGE: &str = "0x5d7d8b2f0c1e4a3b9f6e7d8c9b0a1f2e3d4c5b6a79881726354453627180916a";
    const SUI: &str = "0x2::sui::SUI";
    const NFT: &str = "0xabc::nft::Nft";

    // ========================================================================
    // Record builders
    // ========================================================================

    fn response(inputs: Vec<Value>, transactions: Vec<Value>, changes: Vec<Value>) -> TransactionBlockResponse {
        serde_json::from_value(json!({
            "digest": "4mTwGkKGCzMTnPwkCQaHXKJwNfPTfnD2U3ZQKGfQfPzP",
            "transaction": {
                "data": {
                    "messageVersion": "v1",
                    "transaction": {
                        "kind": "ProgrammableTransaction",
                        "inputs": inputs,
                        "transactions": transactions
                    },
                    "sender": "0xbidder",
                    "gasData": {"owner": "0xbidder", "price": "750", "budget": "10000000"}
                },
                "txSignatures": ["AA=="]
            },
            "objectChanges": changes,
            "timestampMs": "1718000000000",
            "checkpoint": "48000000"
        }))
        .unwrap()
    }

    fn pure(value: Value) -> Value {
        json!({"type": "pure", "value": value})
    }

    fn shared(id: &str) -> Value {
        json!({"type": "object", "objectType": "sharedObject", "objectId": id, "initialSharedVersion": "3", "mutable": true})
    }

    fn input(idx: u16) -> Value {
        json!({"Input": idx})
    }

    fn call(function: &str, type_args: &[&str], args: Vec<Value>) -> Value {
        json!({"MoveCall": {
            "package": PACKAGE,
            "module": "auction",
            "function": function,
            "type_arguments": type_args,
            "arguments": args
        }})
    }

    fn owned(id: &str) -> Value {
        json!({"type": "object", "objectType": "immOrOwnedObject", "objectId": id, "version": "12", "digest": "HxXbKqUMv5ycSr7kfzbp9nVbBMqjQmVHeaZJT5mGCe8s"})
    }

    fn user_call(function: &str, args: Vec<Value>) -> Value {
        json!({"MoveCall": {
            "package": PACKAGE,
            "module": "user",
            "function": function,
            "type_arguments": [],
            "arguments": args
        }})
    }

    /// Operations of a bid as a wallet builds it. Inputs are the amount, the
    /// user object or registry, then the auction handles.
    fn bid_operations(request: &str, auction_handles: Vec<Value>) -> Vec<Value> {
        let mut args = vec![json!({"Result": 1})];
        args.extend(auction_handles);
        args.insert(2.min(args.len()), json!({"NestedResult": [0, 0]}));

        vec![
            split(0),
            user_call(request, vec![input(1)]),
            call("anyone_bids", &[SUI], args),
            user_call("destroy_user_request", vec![json!({"Result": 2})]),
        ]
    }

    fn split(amount_input: u16) -> Value {
        json!({"SplitCoins": ["GasCoin", [input(amount_input)]]})
    }

    fn change(kind: &str, object_type: String, id: &str) -> Value {
        json!({"type": kind, "sender": "0xbidder", "objectType": object_type, "objectId": id, "version": "9", "digest": "d"})
    }

    fn auction_type() -> String {
        format!("{PACKAGE}::auction::Auction<{SUI}>")
    }

    /// A well-formed record for `function` whose call has `arity` input handles
    /// (plus one result handle where the real transaction passes one).
    fn action_record(function: &str, arity: usize) -> TransactionBlockResponse {
        let handles = |n: usize, offset: u16| (0..n).map(|i| input(offset + i as u16)).collect::<Vec<_>>();

        match function {
            "admin_creates_auction" => {
                let inputs = vec![
                    pure(json!("Rare Sword")),
                    pure(json!("Sharp")),
                    pure(json!(["0xitem"])),
                    pure(json!("0xpay")),
                    pure(json!("0")),
                    pure(json!("86400000")),
                    pure(json!("1000")),
                    pure(json!("500")),
                    pure(json!("900000")),
                    shared("0x6"),
                    pure(json!("extra")),
                ];
                let mut args = vec![json!({"Result": 0})];
                args.extend(handles(arity, 0));
                response(
                    inputs,
                    vec![call(function, &[SUI], args)],
                    vec![change("created", auction_type(), "0xnewauction")],
                )
            }
            "anyone_bids" => {
                let inputs = vec![
                    pure(json!("2500")),
                    owned("0xuser"),
                    shared("0xauction"),
                    shared("0x6"),
                    pure(json!("x")),
                ];
                response(
                    inputs,
                    bid_operations("existing_user_request", handles(arity, 2)),
                    vec![change("mutated", auction_type(), "0xauction")],
                )
            }
            "anyone_sends_item_to_winner" => {
                let inputs = vec![shared("0xauction"), pure(json!("0xitem")), shared("0x6"), pure(json!("x"))];
                response(
                    inputs,
                    vec![call(function, &[SUI, NFT], handles(arity, 0))],
                    vec![],
                )
            }
            _ => {
                let inputs = vec![shared("0xauction"), pure(json!("0xpay")), shared("0x6"), pure(json!("x"))];
                response(
                    inputs,
                    vec![call(function, &[SUI], handles(arity, 0))],
                    vec![change("mutated", auction_type(), "0xauction")],
                )
            }
        }
    }

    fn parser() -> AuctionTxParser {
        AuctionTxParser::new(PACKAGE)
    }

    // ========================================================================
    // Arity boundaries
    // ========================================================================

    #[rstest]
    #[case::creates("admin_creates_auction", 10)]
    #[case::bids("anyone_bids", 2)]
    #[case::accepts("admin_accepts_bid", 2)]
    #[case::cancels("admin_cancels_auction", 2)]
    #[case::sets_pay_addr("admin_sets_pay_addr", 3)]
    #[case::pays_funds("anyone_pays_funds", 2)]
    #[case::sends_item("anyone_sends_item_to_winner", 3)]
    fn test_exact_arity_is_required(#[case] function: &str, #[case] arity: usize) {
        let decoded = parser().parse_auction_tx(&action_record(function, arity));
        assert_eq!(decoded.map(|tx| tx.kind()), Some(function));

        assert!(parser().parse_auction_tx(&action_record(function, arity - 1)).is_none());
        assert!(parser().parse_auction_tx(&action_record(function, arity + 1)).is_none());
    }

    #[rstest]
    #[case::creates("admin_creates_auction", 10)]
    #[case::cancels("admin_cancels_auction", 2)]
    #[case::sets_pay_addr("admin_sets_pay_addr", 3)]
    fn test_correlated_effect_is_required(#[case] function: &str, #[case] arity: usize) {
        let mut resp = action_record(function, arity);
        resp.object_changes = Some(vec![]);
        assert!(parser().parse_auction_tx(&resp).is_none());
    }

    #[rstest]
    #[case::bids("anyone_bids", 2)]
    #[case::accepts("admin_accepts_bid", 2)]
    #[case::pays_funds("anyone_pays_funds", 2)]
    fn test_correlated_effect_is_optional(#[case] function: &str, #[case] arity: usize) {
        let mut resp = action_record(function, arity);
        resp.object_changes = None;
        assert!(parser().parse_auction_tx(&resp).is_some());
    }

    // ========================================================================
    // Bids
    // ========================================================================

    #[test]
    fn test_bid_example_end_to_end() {
        let resp = response(
            vec![shared("0xuser"), pure(json!("0xAA")), shared("0x6"), pure(json!("500"))],
            vec![
                split(3),
                call("anyone_bids", &[SUI], vec![input(0), input(1), json!({"Result": 0})]),
            ],
            vec![],
        );

        let tx = parser().parse_auction_tx(&resp).unwrap();
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["kind"], "anyone_bids");
        assert_eq!(value["inputs"]["auction_addr"], "0xAA");
        assert_eq!(value["inputs"]["amount"], "500");
        assert_eq!(value["inputs"]["type_coin"], SUI);
        assert_eq!(value["timestamp"], 1_718_000_000_000u64);
        assert_eq!(value["sender"], "0xbidder");
    }

    #[rstest]
    #[case::existing_user("existing_user_request", owned("0xuser"), "0x6")]
    #[case::new_user("new_user_request", shared("0xregistry"), "0x6")]
    #[case::long_clock_id(
        "existing_user_request",
        owned("0xuser"),
        "0x0000000000000000000000000000000000000000000000000000000000000006"
    )]
    fn test_wallet_bid_names_the_auction(#[case] request: &str, #[case] user: Value, #[case] clock: &str) {
        let resp = response(
            vec![pure(json!("2500")), user, shared("0xauction"), shared(clock)],
            bid_operations(request, vec![input(2), input(3)]),
            vec![
                change("mutated", auction_type(), "0xauction"),
                change("mutated", format!("{PACKAGE}::user::User"), "0xuser"),
            ],
        );

        let Some(AuctionTx::AnyoneBids(tx)) = parser().parse_auction_tx(&resp) else {
            panic!("expected a bid");
        };
        assert_eq!(tx.inputs.auction_addr, "0xauction");
        assert_eq!(tx.inputs.amount, BigUint::from(2500u32));
        assert_eq!(parser().anyone_bids(&resp).unwrap(), tx);
    }

    #[test]
    fn test_bid_amount_is_order_independent() {
        let inputs = vec![
            pure(json!("18446744073709551616")),
            owned("0xuser"),
            shared("0xauction"),
            shared("0x6"),
        ];
        let split_first = bid_operations("existing_user_request", vec![input(2), input(3)]);
        let mut split_last = split_first.clone();
        let split_op = split_last.remove(0);
        split_last.push(split_op);

        let expected = BigUint::from(u64::MAX) + 1u8;
        for operations in [split_first, split_last] {
            let tx = parser().anyone_bids(&response(inputs.clone(), operations, vec![])).unwrap();
            assert_eq!(tx.inputs.amount, expected);
            assert_eq!(tx.inputs.auction_addr, "0xauction");
        }
    }

    #[test]
    fn test_bid_requires_split_and_call() {
        let inputs = vec![pure(json!("10")), owned("0xuser"), shared("0xauction"), shared("0x6")];

        let mut no_split = bid_operations("existing_user_request", vec![input(2), input(3)]);
        no_split.remove(0);
        assert!(parser().parse_auction_tx(&response(inputs.clone(), no_split, vec![])).is_none());

        let no_call = vec![split(0)];
        assert!(parser().parse_auction_tx(&response(inputs, no_call, vec![])).is_none());
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    #[test]
    fn test_settlement_record_yields_pays_funds_only() {
        let resp = response(
            vec![shared("0xauction"), shared("0x6"), pure(json!("0xitem"))],
            vec![
                call("anyone_pays_funds", &[SUI], vec![input(0), input(1)]),
                call("anyone_sends_item_to_winner", &[SUI, NFT], vec![input(0), input(2), input(1)]),
            ],
            vec![],
        );

        assert!(matches!(
            parser().parse_auction_tx(&resp),
            Some(AuctionTx::AnyonePaysFunds(_))
        ));
        assert!(parser().anyone_sends_item_to_winner(&resp).is_some());
    }

    #[test]
    fn test_creation_is_deterministic_and_carries_created_id() {
        let resp = action_record("admin_creates_auction", 10);

        let first = parser().parse_auction_tx(&resp).unwrap();
        let second = parser().parse_auction_tx(&resp).unwrap();
        assert_eq!(first, second);

        let AuctionTx::AdminCreatesAuction(tx) = first else {
            panic!("expected a creation");
        };
        let created = parser().extract_auction_created(&resp).unwrap();
        assert_eq!(tx.auction_id, created.object_id);
        assert_eq!(tx.inputs.minimum_bid, BigUint::from(1000u32));
    }

    #[test]
    fn test_non_auction_record_is_unrecognized() {
        let resp = response(
            vec![pure(json!("100")), pure(json!("0xfriend"))],
            vec![
                split(0),
                json!({"TransferObjects": [[{"NestedResult": [0, 0]}], input(1)]}),
            ],
            vec![change("created", "0x2::coin::Coin<0x2::sui::SUI>".to_string(), "0xcoin")],
        );

        assert!(parser().parse_auction_tx(&resp).is_none());
        assert!(parser().parse_auction_tx(&resp).is_none());
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = std::sync::Arc::new(parser());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = parser.clone();
                std::thread::spawn(move || {
                    parser
                        .parse_auction_tx(&action_record("admin_accepts_bid", 2))
                        .map(|tx| tx.kind())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("admin_accepts_bid"));
        }
    }
}

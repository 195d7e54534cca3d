// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builders for transaction records used across the unit tests.

use serde_json::{Value, json};

use crate::decoders::AuctionTxParser;
use crate::record::{ObjectChange, ObjectChangeRecord, TransactionBlockResponse};

pub const PACKAGE: &str = "0xpkg";
pub const SUI: &str = "0x2::sui::SUI";
pub const CLOCK: &str = "0x6";
pub const DIGEST: &str = "8ZtqnZ7Va7ySUGXUGDtRi4ckCtQnsi3Jhqy1fvjpHbwL";
pub const SENDER: &str = "0xsender";
pub const TIMESTAMP: u64 = 1_700_000_000_000;

pub fn parser() -> AuctionTxParser {
    AuctionTxParser::new(PACKAGE)
}

pub fn pure(value: Value) -> Value {
    json!({"type": "pure", "value": value})
}

pub fn object_input(id: &str) -> Value {
    json!({"type": "object", "objectType": "sharedObject", "objectId": id})
}

pub fn owned_input(id: &str) -> Value {
    json!({
        "type": "object",
        "objectType": "immOrOwnedObject",
        "objectId": id,
        "version": "7",
        "digest": "9pR4sWxkVjq3PZzB1mZbH3tBLkJ4GzdNq2Qv7p1oYhTf"
    })
}

pub fn move_call(
    package: &str,
    module: &str,
    function: &str,
    type_arguments: Vec<&str>,
    arguments: Vec<Value>,
) -> Value {
    json!({
        "MoveCall": {
            "package": package,
            "module": module,
            "function": function,
            "type_arguments": type_arguments,
            "arguments": arguments
        }
    })
}

pub fn auction_call(function: &str, type_arguments: Vec<&str>, arguments: Vec<Value>) -> Value {
    move_call(PACKAGE, "auction", function, type_arguments, arguments)
}

pub fn user_call(function: &str, arguments: Vec<Value>) -> Value {
    move_call(PACKAGE, "user", function, vec![], arguments)
}

/// Arguments of `anyone_bids` as a wallet builds them: the user request
/// result, the auction input, the paid coin and the clock input.
pub fn bid_args(auction_input: u16, clock_input: u16) -> Vec<Value> {
    vec![
        json!({"Result": 1}),
        json!({"Input": auction_input}),
        json!({"NestedResult": [0, 0]}),
        json!({"Input": clock_input}),
    ]
}

pub fn split_coins(amounts: Vec<Value>) -> Value {
    json!({"SplitCoins": ["GasCoin", amounts]})
}

fn change_record(object_type: &str, object_id: &str) -> ObjectChangeRecord {
    ObjectChangeRecord {
        object_type: object_type.to_string(),
        object_id: object_id.to_string(),
        sender: Some(SENDER.to_string()),
        version: Some("42".to_string()),
        digest: None,
    }
}

pub fn created(object_type: &str, object_id: &str) -> ObjectChange {
    ObjectChange::Created(change_record(object_type, object_id))
}

pub fn mutated(object_type: &str, object_id: &str) -> ObjectChange {
    ObjectChange::Mutated(change_record(object_type, object_id))
}

pub fn record(
    inputs: Vec<Value>,
    operations: Vec<Value>,
    object_changes: Vec<ObjectChange>,
) -> TransactionBlockResponse {
    TransactionBlockResponse {
        digest: DIGEST.to_string(),
        transaction: Some(json!({
            "data": {
                "messageVersion": "v1",
                "sender": SENDER,
                "transaction": {
                    "kind": "ProgrammableTransaction",
                    "inputs": inputs,
                    "transactions": operations
                }
            }
        })),
        object_changes: Some(object_changes),
        timestamp_ms: Some(TIMESTAMP.to_string()),
        ..Default::default()
    }
}

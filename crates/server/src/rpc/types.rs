// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Request and response shapes of the Sui JSON-RPC methods we call.

use auction_decoder::{ObjectChange, ReturnValue, TransactionBlockResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Struct type of coin objects, excluded from owned item listings.
pub const COIN_STRUCT_TYPE: &str = "0x2::coin::Coin";

/// Ordering of a transaction query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Ascending,
    #[default]
    Descending,
}

impl Order {
    pub fn is_descending(self) -> bool {
        self == Order::Descending
    }
}

/// Filter for `suix_queryTransactionBlocks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TxFilter {
    /// Transactions that created, mutated or deleted the object.
    ChangedObject(String),
    /// Transactions calling a Move function.
    MoveFunction {
        package: String,
        module: String,
        function: String,
    },
}

/// Filter for `suix_getOwnedObjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OwnedFilter {
    StructType(String),
    MatchNone(Vec<OwnedFilter>),
}

impl OwnedFilter {
    /// Everything except coins.
    pub fn not_coins() -> Self {
        OwnedFilter::MatchNone(vec![OwnedFilter::StructType(COIN_STRUCT_TYPE.to_string())])
    }
}

/// One page of a cursor-paginated query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            next_cursor: None,
            has_next_page: false,
        }
    }
}

/// Options needed to decode a transaction: its input, effects and object changes.
pub fn tx_response_options() -> Value {
    json!({
        "showInput": true,
        "showEffects": true,
        "showObjectChanges": true,
    })
}

/// Options needed to parse an object into an auction, user or item.
pub fn object_data_options() -> Value {
    json!({
        "showContent": true,
        "showDisplay": true,
        "showType": true,
    })
}

/// Result of `sui_dryRunTransactionBlock`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunResponse {
    #[serde(default)]
    pub effects: Value,
    /// The transaction data, shaped like `transaction.data` of an executed record.
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub object_changes: Option<Vec<ObjectChange>>,
}

impl DryRunResponse {
    /// The execution error reported in the effects, if execution failed.
    pub fn failure(&self) -> Option<String> {
        let status = self.effects.get("status")?;
        if status.get("status").and_then(Value::as_str) == Some("success") {
            return None;
        }
        Some(
            status
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Transaction execution failed")
                .to_string(),
        )
    }

    /// Reshapes the simulation into an executed-transaction record so it can be
    /// decoded like one. There is no timestamp for a transaction that never ran.
    pub fn into_record(self) -> TransactionBlockResponse {
        let digest = self
            .effects
            .get("transactionDigest")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        TransactionBlockResponse {
            digest,
            transaction: self.input.map(|data| json!({ "data": data })),
            effects: Some(self.effects),
            object_changes: self.object_changes,
            ..Default::default()
        }
    }
}

/// Result of `sui_devInspectTransactionBlock`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevInspectResponse {
    #[serde(default)]
    pub effects: Value,
    #[serde(default)]
    pub results: Option<Vec<DevInspectResult>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outputs of one command of an inspected transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevInspectResult {
    #[serde(default)]
    pub return_values: Vec<ReturnValue>,
}

impl DevInspectResponse {
    /// Values returned by the first command, or the reason execution failed.
    pub fn into_return_values(self) -> Result<Vec<ReturnValue>, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.results
            .and_then(|results| results.into_iter().next())
            .map(|result| result.return_values)
            .ok_or_else(|| "No results for the inspected call".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_serialize_as_node_expects() {
        let changed = serde_json::to_value(TxFilter::ChangedObject("0xa".to_string())).unwrap();
        assert_eq!(changed, json!({"ChangedObject": "0xa"}));

        let func = serde_json::to_value(TxFilter::MoveFunction {
            package: "0xpkg".to_string(),
            module: "auction".to_string(),
            function: "anyone_bids".to_string(),
        })
        .unwrap();
        assert_eq!(
            func,
            json!({"MoveFunction": {"package": "0xpkg", "module": "auction", "function": "anyone_bids"}})
        );

        let owned = serde_json::to_value(OwnedFilter::not_coins()).unwrap();
        assert_eq!(owned, json!({"MatchNone": [{"StructType": "0x2::coin::Coin"}]}));
    }

    #[test]
    fn test_page_tolerates_missing_cursor() {
        let page: Page<Value> = serde_json::from_value(json!({"data": [1, 2]})).unwrap();
        assert_eq!(page.data.len(), 2);
        assert!(page.next_cursor.is_none());
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_dry_run_failure() {
        let failed: DryRunResponse = serde_json::from_value(json!({
            "effects": {"status": {"status": "failure", "error": "MoveAbort(..., 5015)"}}
        }))
        .unwrap();
        assert_eq!(failed.failure().as_deref(), Some("MoveAbort(..., 5015)"));

        let ok: DryRunResponse = serde_json::from_value(json!({
            "effects": {"status": {"status": "success"}, "transactionDigest": "abc"},
            "input": {"sender": "0xs"},
            "objectChanges": []
        }))
        .unwrap();
        assert!(ok.failure().is_none());

        let record = ok.into_record();
        assert_eq!(record.digest, "abc");
        assert_eq!(record.transaction, Some(json!({"data": {"sender": "0xs"}})));
        assert_eq!(record.timestamp(), 0);
    }

    #[test]
    fn test_dev_inspect_return_values() {
        let ok: DevInspectResponse = serde_json::from_value(json!({
            "effects": {"status": {"status": "success"}},
            "results": [{"returnValues": [[[1], "bool"], [[2, 0, 0, 0, 0, 0, 0, 0], "u64"]]}]
        }))
        .unwrap();
        let values = ok.into_return_values().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], ReturnValue(vec![1], "bool".to_string()));

        let failed: DevInspectResponse = serde_json::from_value(json!({
            "effects": {"status": {"status": "failure"}},
            "error": "MoveAbort(..., 1)"
        }))
        .unwrap();
        assert_eq!(failed.into_return_values().unwrap_err(), "MoveAbort(..., 1)");

        let empty: DevInspectResponse = serde_json::from_value(json!({"results": []})).unwrap();
        assert!(empty.into_return_values().is_err());
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executed transaction records.
//!
//! [`TransactionBlockResponse`] mirrors what the node returns and is lenient on
//! purpose: the transaction body is kept as raw JSON so that a record the
//! decoders cannot make sense of still deserializes. [`TxData`] is the strict
//! view the decoders work on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::operation::{CallArg, Operation};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Transaction block response has no transaction data")]
    MissingTransaction,

    #[error("Transaction is not a programmable transaction")]
    NotProgrammable,

    #[error("Malformed transaction data: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Operation must be an object with exactly one key")]
    OperationShape,

    #[error("Malformed {kind} operation: {source}")]
    Operation {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// An executed transaction as returned by `sui_getTransactionBlock` and
/// `suix_queryTransactionBlocks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_changes: Option<Vec<ObjectChange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<String>,
}

impl TransactionBlockResponse {
    /// Execution timestamp in milliseconds; 0 when the node did not report one.
    pub fn timestamp(&self) -> u64 {
        self.timestamp_ms
            .as_deref()
            .and_then(|ts| ts.parse().ok())
            .unwrap_or(0)
    }

    pub fn object_changes(&self) -> &[ObjectChange] {
        self.object_changes.as_deref().unwrap_or_default()
    }
}

/// A side effect on an object, as listed in `objectChanges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectChange {
    Created(ObjectChangeRecord),
    Mutated(ObjectChangeRecord),
    /// Published, transferred, deleted, wrapped: never correlated.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectChangeRecord {
    pub object_type: String,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// The parts of a programmable transaction the decoders need.
#[derive(Debug, Clone, PartialEq)]
pub struct TxData {
    pub sender: String,
    pub inputs: Vec<CallArg>,
    pub operations: Vec<Operation>,
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    data: TransactionDataV1,
}

#[derive(Deserialize)]
struct TransactionDataV1 {
    sender: String,
    transaction: TransactionKind,
}

#[derive(Deserialize)]
#[serde(tag = "kind")]
enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct ProgrammableTransaction {
    inputs: Vec<CallArg>,
    transactions: Vec<Operation>,
}

impl TxData {
    pub fn from_response(resp: &TransactionBlockResponse) -> Result<Self, RecordError> {
        let transaction = resp
            .transaction
            .as_ref()
            .ok_or(RecordError::MissingTransaction)?;

        let envelope =
            TransactionEnvelope::deserialize(transaction).map_err(RecordError::Malformed)?;

        match envelope.data.transaction {
            TransactionKind::ProgrammableTransaction(ptb) => Ok(TxData {
                sender: envelope.data.sender,
                inputs: ptb.inputs,
                operations: ptb.transactions,
            }),
            TransactionKind::Other => Err(RecordError::NotProgrammable),
        }
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Programmable transaction building blocks as reported by the Sui JSON-RPC.
//!
//! A programmable transaction is an ordered list of [`Operation`]s plus a side
//! table of [`CallArg`] inputs. Operations never embed literals; they refer to
//! inputs (or to results of earlier operations) through [`Argument`] handles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::RecordError;

/// A handle used by an operation to reference a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    /// The coin used to pay for gas.
    GasCoin,
    /// An entry of the input side table.
    Input(u16),
    /// The result of an earlier operation.
    Result(u16),
    /// One element of a tuple returned by an earlier operation.
    NestedResult(u16, u16),
}

impl Argument {
    /// Index into the input side table, if this handle points there.
    pub fn input_index(&self) -> Option<usize> {
        match self {
            Argument::Input(idx) => Some(usize::from(*idx)),
            _ => None,
        }
    }
}

/// An entry of the input side table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CallArg {
    /// A BCS-serializable literal, rendered by the node as JSON.
    Pure {
        #[serde(rename = "valueType", default, skip_serializing_if = "Option::is_none")]
        value_type: Option<String>,
        value: Value,
    },
    /// A reference to an on-chain object.
    Object {
        #[serde(rename = "objectId")]
        object_id: String,
        #[serde(rename = "objectType", default, skip_serializing_if = "Option::is_none")]
        object_type: Option<String>,
    },
}

/// A call into a Move function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    pub package: String,
    pub module: String,
    pub function: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<Argument>>,
}

impl MoveCall {
    /// Argument handles, empty when the node omitted them.
    pub fn args(&self) -> &[Argument] {
        self.arguments.as_deref().unwrap_or_default()
    }

    /// The type argument at `idx`, if present.
    pub fn type_arg(&self, idx: usize) -> Option<&str> {
        self.type_arguments
            .as_ref()
            .and_then(|types| types.get(idx))
            .map(String::as_str)
    }

    /// Whether both the argument and type-argument lists were reported.
    pub fn is_complete(&self) -> bool {
        self.arguments.is_some() && self.type_arguments.is_some()
    }
}

/// One step of a programmable transaction.
///
/// Only the two shapes the auction decoders care about are modelled; every
/// other command is kept as [`Operation::Other`] with its kind name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub enum Operation {
    MoveCall(MoveCall),
    /// `SplitCoins(coin, amounts)`: produces one new coin per amount.
    SplitCoins(Argument, Vec<Argument>),
    Other(String),
}

impl Operation {
    pub fn as_move_call(&self) -> Option<&MoveCall> {
        match self {
            Operation::MoveCall(call) => Some(call),
            _ => None,
        }
    }
}

impl TryFrom<Map<String, Value>> for Operation {
    type Error = RecordError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut entries = map.into_iter();
        let (kind, body) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => return Err(RecordError::OperationShape),
        };

        match kind.as_str() {
            "MoveCall" => serde_json::from_value(body)
                .map(Operation::MoveCall)
                .map_err(|source| RecordError::Operation {
                    kind: "MoveCall",
                    source,
                }),
            "SplitCoins" => serde_json::from_value::<(Argument, Vec<Argument>)>(body)
                .map(|(coin, amounts)| Operation::SplitCoins(coin, amounts))
                .map_err(|source| RecordError::Operation {
                    kind: "SplitCoins",
                    source,
                }),
            _ => Ok(Operation::Other(kind)),
        }
    }
}

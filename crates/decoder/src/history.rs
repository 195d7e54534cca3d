// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Auctions created and bids placed by one user.
//!
//! The history lives in table vectors inside the `user::User` object, which the
//! node does not render. It is read by dev-inspecting a call to one of the
//! `user` module getters and decoding the BCS values it returns.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use num::BigUint;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decoders::USER_MODULE;
use crate::events::serialize_biguint;
use crate::objects::ObjectResponse;
use crate::tx_error::normalize_address;

pub const GET_AUCTIONS_CREATED: &str = "get_auctions_created";
pub const GET_BIDS_PLACED: &str = "get_bids_placed";
pub const GET_AUCTIONS_AND_BIDS: &str = "get_auctions_and_bids";

/// Cursor that starts a descending read at the newest entry.
pub const NEWEST_CURSOR: u64 = 9_007_199_254_740_991;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("'{0}' is not a Sui address")]
    InvalidAddress(String),

    #[error("User object is missing its {0}")]
    MissingObjectRef(&'static str),

    #[error("Invalid object version '{0}'")]
    InvalidVersion(String),

    #[error("Invalid object digest '{0}'")]
    InvalidDigest(String),

    #[error("Failed to encode transaction: {0}")]
    Encode(#[source] bcs::Error),

    #[error("Expected {expected} return values, got {actual}")]
    ReturnCount { expected: usize, actual: usize },

    #[error("Return value {index} is not a {expected}: {source}")]
    ReturnValue {
        index: usize,
        expected: &'static str,
        #[source]
        source: bcs::Error,
    },
}

/// Parses a Sui address into its 32 bytes, accepting short forms like `0x6`.
pub fn address_bytes(addr: &str) -> Result<[u8; 32], HistoryError> {
    let invalid = || HistoryError::InvalidAddress(addr.to_string());
    let hex = addr.strip_prefix("0x").unwrap_or(addr);
    if hex.is_empty() || hex.len() > 64 {
        return Err(invalid());
    }

    let normalized = normalize_address(hex);
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(&normalized[2..], &mut bytes).map_err(|_| invalid())?;
    Ok(bytes)
}

fn address_string(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Version and digest that pin an owned object as a transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub object_id: [u8; 32],
    pub version: u64,
    pub digest: Vec<u8>,
}

impl ObjectRef {
    /// Reads the reference from a fetched object snapshot.
    pub fn from_response(resp: &ObjectResponse) -> Result<Self, HistoryError> {
        let data = resp
            .data
            .as_ref()
            .ok_or(HistoryError::MissingObjectRef("data"))?;
        let version = data
            .version
            .as_deref()
            .ok_or(HistoryError::MissingObjectRef("version"))?;
        let digest = data
            .digest
            .as_deref()
            .ok_or(HistoryError::MissingObjectRef("digest"))?;

        let digest_bytes = bs58::decode(digest)
            .into_vec()
            .ok()
            .filter(|bytes| bytes.len() == 32)
            .ok_or_else(|| HistoryError::InvalidDigest(digest.to_string()))?;

        Ok(Self {
            object_id: address_bytes(&data.object_id)?,
            version: version
                .parse()
                .map_err(|_| HistoryError::InvalidVersion(version.to_string()))?,
            digest: digest_bytes,
        })
    }
}

/// One read of a user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryQuery {
    AuctionsCreated {
        cursor: u64,
        limit: u64,
        ascending: bool,
    },
    BidsPlaced {
        cursor: u64,
        limit: u64,
        ascending: bool,
    },
    /// The newest entries of both lists, with their totals.
    Recent { limit_created: u64, limit_bids: u64 },
}

impl HistoryQuery {
    /// Cursor to start from when the caller gives none.
    pub fn first_cursor(ascending: bool) -> u64 {
        if ascending { 0 } else { NEWEST_CURSOR }
    }

    pub fn function(&self) -> &'static str {
        match self {
            HistoryQuery::AuctionsCreated { .. } => GET_AUCTIONS_CREATED,
            HistoryQuery::BidsPlaced { .. } => GET_BIDS_PLACED,
            HistoryQuery::Recent { .. } => GET_AUCTIONS_AND_BIDS,
        }
    }

    fn pure_args(&self) -> Result<Vec<Vec<u8>>, bcs::Error> {
        match *self {
            HistoryQuery::AuctionsCreated {
                cursor,
                limit,
                ascending,
            }
            | HistoryQuery::BidsPlaced {
                cursor,
                limit,
                ascending,
            } => Ok(vec![
                bcs::to_bytes(&cursor)?,
                bcs::to_bytes(&limit)?,
                bcs::to_bytes(&ascending)?,
            ]),
            HistoryQuery::Recent {
                limit_created,
                limit_bids,
            } => Ok(vec![
                bcs::to_bytes(&NEWEST_CURSOR)?,
                bcs::to_bytes(&NEWEST_CURSOR)?,
                bcs::to_bytes(&limit_created)?,
                bcs::to_bytes(&limit_bids)?,
                bcs::to_bytes(&false)?,
            ]),
        }
    }

    /// Base64 BCS `TransactionKind` that calls the getter on `user`, as
    /// `sui_devInspectTransactionBlock` expects it.
    pub fn to_tx_bytes(&self, package_id: &str, user: &ObjectRef) -> Result<String, HistoryError> {
        let mut inputs = vec![CallArg::Object(ObjectArg::ImmOrOwnedObject((
            user.object_id,
            user.version,
            user.digest.clone(),
        )))];
        inputs.extend(
            self.pure_args()
                .map_err(HistoryError::Encode)?
                .into_iter()
                .map(CallArg::Pure),
        );

        let arguments = (0..inputs.len() as u16).map(Argument::Input).collect();
        let call = ProgrammableMoveCall {
            package: address_bytes(package_id)?,
            module: USER_MODULE.to_string(),
            function: self.function().to_string(),
            type_arguments: Vec::new(),
            arguments,
        };

        let kind = TransactionKind::ProgrammableTransaction(ProgrammableTransaction {
            inputs,
            commands: vec![Command::MoveCall(Box::new(call))],
        });
        let bytes = bcs::to_bytes(&kind).map_err(HistoryError::Encode)?;
        Ok(STANDARD.encode(bytes))
    }
}

// === transaction wire types ===
//
// Variant order follows the node's enums, since BCS encodes the index.

#[derive(Serialize)]
enum TransactionKind {
    ProgrammableTransaction(ProgrammableTransaction),
}

#[derive(Serialize)]
struct ProgrammableTransaction {
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

#[derive(Serialize)]
enum CallArg {
    Pure(Vec<u8>),
    Object(ObjectArg),
}

#[derive(Serialize)]
enum ObjectArg {
    ImmOrOwnedObject(([u8; 32], u64, Vec<u8>)),
}

#[derive(Serialize)]
enum Command {
    MoveCall(Box<ProgrammableMoveCall>),
}

/// Never constructed: history getters take no type arguments.
#[derive(Serialize)]
enum TypeTag {}

#[derive(Serialize)]
struct ProgrammableMoveCall {
    package: [u8; 32],
    module: String,
    function: String,
    type_arguments: Vec<TypeTag>,
    arguments: Vec<Argument>,
}

#[derive(Serialize)]
enum Argument {
    #[allow(dead_code)]
    GasCoin,
    Input(u16),
}

// === return values ===

/// One `[bytes, type]` pair of a dev-inspect `returnValues` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnValue(pub Vec<u8>, pub String);

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
struct RawUserAuction {
    auction_addr: [u8; 32],
    time: u64,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
struct RawUserBid {
    auction_addr: [u8; 32],
    time: u64,
    amount: u64,
}

/// An auction the user created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAuction {
    pub auction_addr: String,
    pub time: u64,
}

/// A bid the user placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserBid {
    pub auction_addr: String,
    pub time: u64,
    #[serde(serialize_with = "serialize_biguint")]
    pub amount: BigUint,
}

impl From<RawUserAuction> for UserAuction {
    fn from(raw: RawUserAuction) -> Self {
        Self {
            auction_addr: address_string(&raw.auction_addr),
            time: raw.time,
        }
    }
}

impl From<RawUserBid> for UserBid {
    fn from(raw: RawUserBid) -> Self {
        Self {
            auction_addr: address_string(&raw.auction_addr),
            time: raw.time,
            amount: BigUint::from(raw.amount),
        }
    }
}

/// One page of a history list. `next_cursor` is the index to resume from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage<T> {
    pub data: Vec<T>,
    pub has_next_page: bool,
    pub next_cursor: u64,
}

/// A history page plus the length of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountedPage<T> {
    pub total: u64,
    #[serde(flatten)]
    pub page: HistoryPage<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentHistory {
    pub created: CountedPage<UserAuction>,
    pub bids: CountedPage<UserBid>,
}

fn expect_count(values: &[ReturnValue], expected: usize) -> Result<(), HistoryError> {
    if values.len() != expected {
        return Err(HistoryError::ReturnCount {
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn decode_value<T: DeserializeOwned>(
    values: &[ReturnValue],
    index: usize,
    expected: &'static str,
) -> Result<T, HistoryError> {
    bcs::from_bytes(&values[index].0).map_err(|source| HistoryError::ReturnValue {
        index,
        expected,
        source,
    })
}

fn decode_list<R, T>(
    values: &[ReturnValue],
    index: usize,
    expected: &'static str,
) -> Result<Vec<T>, HistoryError>
where
    R: DeserializeOwned,
    T: From<R>,
{
    let raw: Vec<R> = decode_value(values, index, expected)?;
    Ok(raw.into_iter().map(T::from).collect())
}

/// Decodes the `(vector<UserAuction>, bool, u64)` returned by `get_auctions_created`.
pub fn decode_auctions_page(
    values: &[ReturnValue],
) -> Result<HistoryPage<UserAuction>, HistoryError> {
    expect_count(values, 3)?;
    Ok(HistoryPage {
        data: decode_list::<RawUserAuction, _>(values, 0, "vector<UserAuction>")?,
        has_next_page: decode_value(values, 1, "bool")?,
        next_cursor: decode_value(values, 2, "u64")?,
    })
}

/// Decodes the `(vector<UserBid>, bool, u64)` returned by `get_bids_placed`.
pub fn decode_bids_page(values: &[ReturnValue]) -> Result<HistoryPage<UserBid>, HistoryError> {
    expect_count(values, 3)?;
    Ok(HistoryPage {
        data: decode_list::<RawUserBid, _>(values, 0, "vector<UserBid>")?,
        has_next_page: decode_value(values, 1, "bool")?,
        next_cursor: decode_value(values, 2, "u64")?,
    })
}

/// Decodes the eight values returned by `get_auctions_and_bids`: both totals,
/// both pages, both has-more flags, then both cursors.
pub fn decode_recent(values: &[ReturnValue]) -> Result<RecentHistory, HistoryError> {
    expect_count(values, 8)?;
    Ok(RecentHistory {
        created: CountedPage {
            total: decode_value(values, 0, "u64")?,
            page: HistoryPage {
                data: decode_list::<RawUserAuction, _>(values, 2, "vector<UserAuction>")?,
                has_next_page: decode_value(values, 4, "bool")?,
                next_cursor: decode_value(values, 6, "u64")?,
            },
        },
        bids: CountedPage {
            total: decode_value(values, 1, "u64")?,
            page: HistoryPage {
                data: decode_list::<RawUserBid, _>(values, 3, "vector<UserBid>")?,
                has_next_page: decode_value(values, 5, "bool")?,
                next_cursor: decode_value(values, 7, "u64")?,
            },
        },
    })
}

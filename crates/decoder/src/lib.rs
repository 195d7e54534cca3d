// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding of English-auction transactions and objects on Sui.
//!
//! [`AuctionTxParser`] turns a raw `SuiTransactionBlockResponse` into one of the
//! [`AuctionTx`] actions, or `None` when the record is not a recognised auction
//! call. Decoding is synchronous and holds no state, so a parser can be shared
//! across threads and tasks.

pub mod decoders;
pub mod dispatch;
pub mod effects;
pub mod events;
pub mod history;
pub mod matcher;
pub mod objects;
pub mod operation;
pub mod record;
pub mod resolve;
pub mod tx_error;

#[cfg(test)]
pub mod test_fixtures;

pub use decoders::AuctionTxParser;
pub use events::{AuctionTx, TxMeta};
pub use history::{
    CountedPage, HistoryError, HistoryPage, HistoryQuery, ObjectRef, RecentHistory, ReturnValue,
    UserAuction, UserBid,
};
pub use objects::{
    AuctionObj, ObjectParseError, ObjectResponse, ParsedObject, SuiItem, UserObj,
    parse_auction_obj, parse_auction_obj_at, parse_item,
};
pub use record::{ObjectChange, ObjectChangeRecord, RecordError, TransactionBlockResponse, TxData};
pub use tx_error::{TxError, normalize_address, parse_tx_error};

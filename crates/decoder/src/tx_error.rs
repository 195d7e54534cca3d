// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turning failed transaction messages into something a user can read.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::decoders::AuctionTxParser;

lazy_static! {
    static ref MOVE_ABORT: Regex = Regex::new(
        r#"MoveAbort\(MoveLocation \{ module: ModuleId \{ address: (?:0x)?([0-9a-fA-F]+), name: Identifier\("([^"]+)"\) \}, function: \d+, instruction: \d+, function_name: Some\("([^"]+)"\) \}, (\d+)\)"#,
    )
    .expect("MoveAbort pattern is valid");
}

pub const USER_REJECTED: &str = "Rejected from user";
pub const INSUFFICIENT_BALANCE: &str = "InsufficientCoinBalance";
pub const INSUFFICIENT_BALANCE_MESSAGE: &str = "You don't have enough balance";

/// Abort codes raised by the auction package, by constant name.
pub const AUCTION_ERRORS: &[(u64, &str)] = &[
    (5000, "E_WRONG_NAME"),
    (5001, "E_WRONG_TIME"),
    (5002, "E_WRONG_ADMIN"),
    (5003, "E_WRONG_COIN_VALUE"),
    (5004, "E_WRONG_DURATION"),
    (5005, "E_POINTLESS_PAY_ADDR_CHANGE"),
    (5006, "E_WRONG_MINIMUM_BID"),
    (5007, "E_WRONG_MINIMUM_INCREASE"),
    (5008, "E_WRONG_EXTENSION_PERIOD"),
    (5009, "E_CANT_RECLAIM_WITH_BIDS"),
    (5010, "E_WRONG_DESCRIPTION"),
    (5011, "E_DUPLICATE_ITEM_ADDRESSES"),
    (5012, "E_WRONG_ITEM_ADDRESS"),
    (5013, "E_MISSING_ITEMS"),
    (5014, "E_TOO_MANY_ITEMS"),
    (5015, "E_AUCTION_HAS_ENDED"),
    (5016, "E_AUCTION_HAS_NOT_ENDED"),
    (5017, "E_AUCTION_HAS_NOT_STARTED"),
    (5018, "E_AUCTION_HAS_BIDS"),
    (5019, "E_AUCTION_HAS_NO_BIDS"),
];

/// A Move abort extracted from an execution failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxError {
    /// Normalized to `0x` plus 64 lowercase hex digits.
    pub package_id: String,
    pub module: String,
    pub function: String,
    pub code: u64,
}

/// Normalizes a Sui address: `0x` prefix, lowercase, left-padded to 32 bytes.
pub fn normalize_address(addr: &str) -> String {
    let hex = addr.strip_prefix("0x").unwrap_or(addr).to_ascii_lowercase();
    format!("0x{hex:0>64}")
}

/// Parses the first `MoveAbort` in `message`.
pub fn parse_tx_error(message: &str) -> Option<TxError> {
    let caps = MOVE_ABORT.captures(message)?;
    Some(TxError {
        package_id: normalize_address(&caps[1]),
        module: caps[2].to_string(),
        function: caps[3].to_string(),
        code: caps[4].parse().ok()?,
    })
}

pub fn auction_error_name(code: u64) -> Option<&'static str> {
    AUCTION_ERRORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

impl AuctionTxParser {
    /// The auction error constant behind `message`, or `message` itself when it
    /// is not an abort raised by this package.
    pub fn parse_error_code<'a>(&self, message: &'a str) -> &'a str {
        match parse_tx_error(message) {
            Some(err) if err.package_id == normalize_address(self.package_id()) => {
                auction_error_name(err.code).unwrap_or(message)
            }
            _ => message,
        }
    }

    /// Message to show for a failed transaction, or `None` when nothing
    /// should be shown (the user rejected the signature request).
    ///
    /// `overrides` maps error constant names, or whole raw messages, to
    /// custom text.
    pub fn err_code_to_str(
        &self,
        err: Option<&str>,
        default_message: &str,
        overrides: Option<&HashMap<String, String>>,
    ) -> Option<String> {
        let Some(message) = err.filter(|m| !m.is_empty()) else {
            return Some(default_message.to_string());
        };

        if message.contains(USER_REJECTED) {
            return None;
        }
        if message.contains(INSUFFICIENT_BALANCE) {
            return Some(INSUFFICIENT_BALANCE_MESSAGE.to_string());
        }

        let code = self.parse_error_code(message);
        if let Some(text) = overrides.and_then(|o| o.get(code)) {
            return Some(text.clone());
        }

        Some(code.to_string())
    }
}

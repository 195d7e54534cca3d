// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Object snapshots and their mapping onto domain entities.
//!
//! The node reports Move struct contents as an untyped field bag. Each entity
//! here has its own mapping function that checks every field it reads and
//! reports the first missing or mis-shaped one.

use std::time::{SystemTime, UNIX_EPOCH};

use num::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::decoders::AuctionTxParser;
use crate::events::serialize_biguint;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectParseError {
    #[error("Object lookup failed: {0}")]
    ObjectError(String),

    #[error("Missing field '{0}'")]
    Missing(String),

    #[error("Field '{field}' is not {expected}")]
    WrongShape { field: String, expected: &'static str },

    #[error("Object has no Move struct content")]
    NotMoveObject,

    #[error("Expected object of type {expected}, found {actual}")]
    WrongType { expected: String, actual: String },
}

/// A `SuiObjectResponse` as returned by `sui_getObject` / `sui_multiGetObjects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ObjectData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ObjectContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayFields>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "camelCase")]
pub enum ObjectContent {
    MoveObject {
        #[serde(rename = "type")]
        object_type: String,
        #[serde(rename = "hasPublicTransfer", default)]
        has_public_transfer: bool,
        fields: Map<String, Value>,
    },
    #[serde(other)]
    Package,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayFields {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ObjectResponse {
    /// The snapshot payload, or the node's error for this object.
    pub fn data(&self) -> Result<&ObjectData, ObjectParseError> {
        match (&self.data, &self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(err)) => Err(ObjectParseError::ObjectError(error_code(err))),
            (None, None) => Err(ObjectParseError::Missing("data".to_string())),
        }
    }

    pub fn object_id(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.object_id.as_str())
    }

    /// Declared type, from the snapshot metadata or the Move content.
    pub fn object_type(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        data.object_type.as_deref().or(match &data.content {
            Some(ObjectContent::MoveObject { object_type, .. }) => Some(object_type.as_str()),
            _ => None,
        })
    }
}

impl ObjectData {
    fn move_fields(&self) -> Result<(&str, FieldBag<'_>), ObjectParseError> {
        match &self.content {
            Some(ObjectContent::MoveObject {
                object_type, fields, ..
            }) => Ok((object_type.as_str(), FieldBag(fields))),
            _ => Err(ObjectParseError::NotMoveObject),
        }
    }
}

fn error_code(err: &Value) -> String {
    err.get("code")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

/// Typed, checked access to a Move struct's fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldBag<'a>(&'a Map<String, Value>);

impl<'a> FieldBag<'a> {
    fn get(&self, field: &str) -> Result<&'a Value, ObjectParseError> {
        self.0
            .get(field)
            .ok_or_else(|| ObjectParseError::Missing(field.to_string()))
    }

    fn wrong(field: &str, expected: &'static str) -> ObjectParseError {
        ObjectParseError::WrongShape {
            field: field.to_string(),
            expected,
        }
    }

    pub fn string(&self, field: &str) -> Result<String, ObjectParseError> {
        self.get(field)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Self::wrong(field, "a string"))
    }

    /// Move `u64` fields arrive as decimal strings, narrower integers as numbers.
    pub fn u64(&self, field: &str) -> Result<u64, ObjectParseError> {
        let value = match self.get(field)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        };
        value.ok_or_else(|| Self::wrong(field, "an unsigned integer"))
    }

    pub fn biguint(&self, field: &str) -> Result<BigUint, ObjectParseError> {
        let value = match self.get(field)? {
            Value::Number(n) => n.as_u64().map(BigUint::from),
            Value::String(s) => s.parse().ok(),
            _ => None,
        };
        value.ok_or_else(|| Self::wrong(field, "an unsigned integer"))
    }

    pub fn strings(&self, field: &str) -> Result<Vec<String>, ObjectParseError> {
        self.get(field)?
            .as_array()
            .and_then(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .ok_or_else(|| Self::wrong(field, "a list of strings"))
    }

    /// A nested struct, rendered as `{"type": .., "fields": {..}}`.
    pub fn nested(&self, field: &str) -> Result<FieldBag<'a>, ObjectParseError> {
        self.get(field)?
            .get("fields")
            .and_then(Value::as_object)
            .map(FieldBag)
            .ok_or_else(|| Self::wrong(field, "a struct"))
    }

    /// A `UID` field, rendered as `{"id": "0x.."}`.
    pub fn uid(&self, field: &str) -> Result<String, ObjectParseError> {
        self.get(field)?
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Self::wrong(field, "a UID"))
    }
}

/// Container holding the auctioned items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemBag {
    pub id: String,
    pub size: u64,
}

/// Snapshot of an `auction::Auction<T>` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuctionObj {
    pub type_coin: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub item_addrs: Vec<String>,
    pub item_bag: ItemBag,
    pub admin_addr: String,
    pub pay_addr: String,
    /// Highest bidder so far; the zero address before the first bid.
    pub lead_addr: String,
    #[serde(serialize_with = "serialize_biguint")]
    pub lead_value: BigUint,
    pub begin_time_ms: u64,
    pub end_time_ms: u64,
    #[serde(serialize_with = "serialize_biguint")]
    pub minimum_bid: BigUint,
    pub minimum_increase_bps: u64,
    pub extension_period_ms: u64,
    /// `begin_time_ms <= now < end_time_ms`, as of parsing.
    pub is_live: bool,
    /// `now >= end_time_ms`, as of parsing.
    pub has_ended: bool,
}

/// Any object that is neither an auction nor a user, typically an NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiItem {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub has_public_transfer: bool,
}

/// Snapshot of a `user::User` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserObj {
    pub id: String,
    pub owner: String,
    /// Number of auctions the user created.
    pub auctions_created: u64,
    /// Number of bids the user placed.
    pub bids_placed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedObject {
    Auction(AuctionObj),
    User(UserObj),
    Item(SuiItem),
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Extracts `T` from `pkg::module::Name<T>`.
fn generic_param(object_type: &str) -> Option<&str> {
    let start = object_type.find('<')?;
    object_type[start + 1..].strip_suffix('>')
}

/// Parses an auction snapshot, deriving liveness from the current time.
///
/// Parsing the same snapshot twice can yield different `is_live` and
/// `has_ended` values.
pub fn parse_auction_obj(resp: &ObjectResponse) -> Result<AuctionObj, ObjectParseError> {
    parse_auction_obj_at(resp, now_ms())
}

/// Parses an auction snapshot, deriving liveness as of `now_ms`.
pub fn parse_auction_obj_at(
    resp: &ObjectResponse,
    now_ms: u64,
) -> Result<AuctionObj, ObjectParseError> {
    let data = resp.data()?;
    let (object_type, fields) = data.move_fields()?;

    let type_coin = generic_param(object_type)
        .filter(|_| object_type.contains("::auction::Auction<"))
        .ok_or_else(|| ObjectParseError::WrongType {
            expected: "auction::Auction<T>".to_string(),
            actual: object_type.to_string(),
        })?;

    let item_bag = fields.nested("item_bag")?;
    let begin_time_ms = fields.u64("begin_time_ms")?;
    let end_time_ms = fields.u64("end_time_ms")?;

    Ok(AuctionObj {
        type_coin: type_coin.to_string(),
        id: fields.uid("id")?,
        name: fields.string("name")?,
        description: fields.string("description")?,
        item_addrs: fields.strings("item_addrs")?,
        item_bag: ItemBag {
            id: item_bag.uid("id")?,
            size: item_bag.u64("size")?,
        },
        admin_addr: fields.string("admin_addr")?,
        pay_addr: fields.string("pay_addr")?,
        lead_addr: fields.string("lead_addr")?,
        lead_value: fields.biguint("lead_bal")?,
        begin_time_ms,
        end_time_ms,
        minimum_bid: fields.biguint("minimum_bid")?,
        minimum_increase_bps: fields.u64("minimum_increase_bps")?,
        extension_period_ms: fields.u64("extension_period_ms")?,
        is_live: begin_time_ms <= now_ms && now_ms < end_time_ms,
        has_ended: now_ms >= end_time_ms,
    })
}

/// Parses any object as an item. Display metadata wins over struct fields.
pub fn parse_item(resp: &ObjectResponse) -> Result<SuiItem, ObjectParseError> {
    let data = resp.data()?;
    let object_type = resp
        .object_type()
        .ok_or_else(|| ObjectParseError::Missing("type".to_string()))?;

    let (has_public_transfer, fields) = match &data.content {
        Some(ObjectContent::MoveObject {
            has_public_transfer,
            fields,
            ..
        }) => (*has_public_transfer, Some(fields)),
        _ => (false, None),
    };
    let display = data.display.as_ref().and_then(|d| d.data.as_ref());

    let text = |key: &str| -> String {
        display
            .and_then(|d| d.get(key))
            .or_else(|| fields.and_then(|f| f.get(key)))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(SuiItem {
        id: data.object_id.clone(),
        object_type: object_type.to_string(),
        name: text("name"),
        description: text("description"),
        image_url: text("image_url"),
        has_public_transfer,
    })
}

impl AuctionTxParser {
    /// Parses a `user::User` snapshot of this package.
    pub fn parse_user_obj(&self, resp: &ObjectResponse) -> Result<UserObj, ObjectParseError> {
        let data = resp.data()?;
        let (object_type, fields) = data.move_fields()?;
        if object_type != self.user_type() {
            return Err(ObjectParseError::WrongType {
                expected: self.user_type().to_string(),
                actual: object_type.to_string(),
            });
        }

        let table_size = |field: &str| -> Result<u64, ObjectParseError> {
            fields.nested(field)?.nested("contents")?.u64("size")
        };

        Ok(UserObj {
            id: fields.uid("id")?,
            owner: fields.string("owner")?,
            auctions_created: table_size("created")?,
            bids_placed: table_size("bids")?,
        })
    }

    /// Parses a snapshot into whichever entity its declared type names.
    pub fn parse_object(&self, resp: &ObjectResponse) -> Result<ParsedObject, ObjectParseError> {
        let object_type = resp.data()?.object_type.as_deref().or(resp.object_type());

        match object_type {
            Some(t) if t.starts_with(self.auction_type_prefix()) => {
                parse_auction_obj(resp).map(ParsedObject::Auction)
            }
            Some(t) if t == self.user_type() => self.parse_user_obj(resp).map(ParsedObject::User),
            _ => parse_item(resp).map(ParsedObject::Item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::PACKAGE;
    use serde_json::json;

    fn auction_response(begin: &str, end: &str) -> ObjectResponse {
        serde_json::from_value(json!({
            "data": {
                "objectId": "0xauction",
                "version": "12",
                "digest": "objdigest",
                "type": format!("{PACKAGE}::auction::Auction<0x2::sui::SUI>"),
                "content": {
                    "dataType": "moveObject",
                    "type": format!("{PACKAGE}::auction::Auction<0x2::sui::SUI>"),
                    "hasPublicTransfer": false,
                    "fields": {
                        "id": {"id": "0xauction"},
                        "name": "Rare Sword",
                        "description": "A sword",
                        "item_addrs": ["0xitem"],
                        "item_bag": {
                            "type": "0x2::object_bag::ObjectBag",
                            "fields": {"id": {"id": "0xbag"}, "size": "1"}
                        },
                        "admin_addr": "0xadmin",
                        "pay_addr": "0xpay",
                        "lead_addr": "0x0",
                        "lead_bal": "0",
                        "begin_time_ms": begin,
                        "end_time_ms": end,
                        "minimum_bid": "1000000000",
                        "minimum_increase_bps": "500",
                        "extension_period_ms": "900000"
                    }
                }
            }
        }))
        .unwrap()
    }

    fn user_response() -> ObjectResponse {
        let table = |size: &str| {
            json!({
                "type": "0x2::table_vec::TableVec<u64>",
                "fields": {"contents": {"type": "0x2::table::Table<u64, u64>", "fields": {"id": {"id": "0xt"}, "size": size}}}
            })
        };
        serde_json::from_value(json!({
            "data": {
                "objectId": "0xuser",
                "type": format!("{PACKAGE}::user::User"),
                "content": {
                    "dataType": "moveObject",
                    "type": format!("{PACKAGE}::user::User"),
                    "hasPublicTransfer": false,
                    "fields": {
                        "id": {"id": "0xuser"},
                        "owner": "0xowner",
                        "created": table("2"),
                        "bids": table("5")
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_liveness_is_derived_at_parse_time() {
        let resp = auction_response("1000", "2000");

        let during = parse_auction_obj_at(&resp, 1500).unwrap();
        assert!(during.is_live);
        assert!(!during.has_ended);

        let after = parse_auction_obj_at(&resp, 2500).unwrap();
        assert!(!after.is_live);
        assert!(after.has_ended);

        let before = parse_auction_obj_at(&resp, 999).unwrap();
        assert!(!before.is_live);
        assert!(!before.has_ended);

        let at_end = parse_auction_obj_at(&resp, 2000).unwrap();
        assert!(!at_end.is_live);
        assert!(at_end.has_ended);
    }

    #[test]
    fn test_auction_fields() {
        let auction = parse_auction_obj_at(&auction_response("1000", "2000"), 0).unwrap();

        assert_eq!(auction.type_coin, "0x2::sui::SUI");
        assert_eq!(auction.id, "0xauction");
        assert_eq!(auction.item_bag, ItemBag { id: "0xbag".to_string(), size: 1 });
        assert_eq!(auction.minimum_bid, BigUint::from(1_000_000_000u64));
        assert_eq!(auction.minimum_increase_bps, 500);

        let value = serde_json::to_value(&auction).unwrap();
        assert_eq!(value["minimum_bid"], "1000000000");
        assert_eq!(value["lead_value"], "0");
    }

    #[test]
    fn test_auction_missing_and_mis_shaped_fields() {
        let mut resp = auction_response("1000", "2000");
        let Some(ObjectContent::MoveObject { fields, .. }) =
            resp.data.as_mut().and_then(|d| d.content.as_mut())
        else {
            panic!("fixture has move content");
        };
        fields.remove("pay_addr");
        fields.insert("end_time_ms".to_string(), json!(true));

        assert_eq!(
            parse_auction_obj_at(&resp, 0),
            Err(ObjectParseError::WrongShape {
                field: "end_time_ms".to_string(),
                expected: "an unsigned integer"
            })
        );

        let Some(ObjectContent::MoveObject { fields, .. }) =
            resp.data.as_mut().and_then(|d| d.content.as_mut())
        else {
            unreachable!()
        };
        fields.insert("end_time_ms".to_string(), json!("2000"));
        assert_eq!(
            parse_auction_obj_at(&resp, 0),
            Err(ObjectParseError::Missing("pay_addr".to_string()))
        );
    }

    #[test]
    fn test_object_error_and_missing_content() {
        let resp: ObjectResponse = serde_json::from_value(json!({
            "error": {"code": "notExists", "object_id": "0xgone"}
        }))
        .unwrap();
        assert_eq!(
            parse_auction_obj(&resp),
            Err(ObjectParseError::ObjectError("notExists".to_string()))
        );

        let resp: ObjectResponse = serde_json::from_value(json!({
            "data": {"objectId": "0xpkg", "content": {"dataType": "package", "disassembled": {}}}
        }))
        .unwrap();
        assert_eq!(parse_auction_obj(&resp), Err(ObjectParseError::NotMoveObject));
    }

    #[test]
    fn test_parse_user() {
        let parser = AuctionTxParser::new(PACKAGE);
        let user = parser.parse_user_obj(&user_response()).unwrap();
        assert_eq!(
            user,
            UserObj {
                id: "0xuser".to_string(),
                owner: "0xowner".to_string(),
                auctions_created: 2,
                bids_placed: 5,
            }
        );

        let other = AuctionTxParser::new("0xother");
        assert!(matches!(
            other.parse_user_obj(&user_response()),
            Err(ObjectParseError::WrongType { .. })
        ));
    }

    #[test]
    fn test_parse_item_prefers_display() {
        let resp: ObjectResponse = serde_json::from_value(json!({
            "data": {
                "objectId": "0xnft",
                "type": "0xnft::nft::Nft",
                "content": {
                    "dataType": "moveObject",
                    "type": "0xnft::nft::Nft",
                    "hasPublicTransfer": true,
                    "fields": {"id": {"id": "0xnft"}, "name": "field name", "description": "field desc"}
                },
                "display": {"data": {"name": "Display name", "image_url": "https://img"}, "error": null}
            }
        }))
        .unwrap();

        let item = parse_item(&resp).unwrap();
        assert_eq!(item.name, "Display name");
        assert_eq!(item.description, "field desc");
        assert_eq!(item.image_url, "https://img");
        assert!(item.has_public_transfer);
    }

    #[test]
    fn test_parse_object_routes_by_type() {
        let parser = AuctionTxParser::new(PACKAGE);

        assert!(matches!(
            parser.parse_object(&auction_response("0", "1")),
            Ok(ParsedObject::Auction(_))
        ));
        assert!(matches!(
            parser.parse_object(&user_response()),
            Ok(ParsedObject::User(_))
        ));

        let other = AuctionTxParser::new("0xother");
        let Ok(ParsedObject::Item(item)) = other.parse_object(&auction_response("0", "1")) else {
            panic!("foreign auction type parses as item");
        };
        assert_eq!(item.id, "0xauction");
        assert_eq!(item.name, "Rare Sword");
    }

    #[test]
    fn test_generic_param() {
        assert_eq!(generic_param("0xp::auction::Auction<0x2::sui::SUI>"), Some("0x2::sui::SUI"));
        assert_eq!(
            generic_param("0xp::auction::Auction<0xd::lp::LP<0x2::sui::SUI>>"),
            Some("0xd::lp::LP<0x2::sui::SUI>")
        );
        assert_eq!(generic_param("0xp::user::User"), None);
    }
}

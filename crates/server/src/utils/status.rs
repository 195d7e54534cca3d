// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::ObjectParseError;
use axum::http::StatusCode;

use crate::rpc::{INVALID_PARAMS_CODE, RpcError};

/// Maps a failed node request to the status and message returned to the client.
///
/// Invalid parameters (a malformed digest or address) are the caller's fault
/// and surface as 400; every other failure is the node's and surfaces as 502.
pub fn rpc_error_to_status(err: &RpcError) -> (StatusCode, String) {
    match err {
        RpcError::Call {
            code: INVALID_PARAMS_CODE,
            message,
            ..
        } => (StatusCode::BAD_REQUEST, message.clone()),
        RpcError::Connect { .. } => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        _ => (StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

/// Status for an object snapshot that could not be mapped onto an entity.
///
/// The node reporting the object as missing is a 404 and an object of the
/// wrong kind is the caller's 400. A snapshot missing fields its type
/// guarantees points at the node, so it is a 502.
pub fn object_error_to_status(err: &ObjectParseError) -> StatusCode {
    match err {
        ObjectParseError::ObjectError(_) => StatusCode::NOT_FOUND,
        ObjectParseError::WrongType { .. } | ObjectParseError::NotMoveObject => {
            StatusCode::BAD_REQUEST
        }
        ObjectParseError::Missing(field) if field == "data" => StatusCode::NOT_FOUND,
        ObjectParseError::Missing(_) | ObjectParseError::WrongShape { .. } => {
            StatusCode::BAD_GATEWAY
        }
    }
}

// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::{ObjectParseError, UserObj, normalize_address};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::handlers::common::{fetch_object, normalize_owner};
use crate::rpc::{OwnedFilter, RpcError};
use crate::state::AppState;
use crate::utils;

#[derive(Debug, Error)]
pub enum GetUserError {
    #[error("{0}")]
    InvalidOwner(String),

    #[error("Owner {0} has no user object")]
    NoUser(String),

    #[error("Failed to fetch user")]
    RpcFailed(#[source] RpcError),

    #[error("User {id}: {source}")]
    ParseFailed {
        id: String,
        #[source]
        source: ObjectParseError,
    },
}

impl IntoResponse for GetUserError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            GetUserError::InvalidOwner(message) => (StatusCode::BAD_REQUEST, message.clone()),
            GetUserError::NoUser(_) => (StatusCode::NOT_FOUND, self.to_string()),
            GetUserError::RpcFailed(err) => utils::rpc_error_to_status(err),
            GetUserError::ParseFailed { source, .. } => {
                (utils::object_error_to_status(source), self.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub owner: String,
    pub user_id: String,
    pub user: UserObj,
}

/// Id of the `user::User` object `owner` holds, or `None` if they have none.
///
/// Answers from the cache when it can; a lookup on the node fills it. The
/// cache is keyed by the padded address, so short and long spellings share
/// one entry.
pub async fn resolve_user_id(state: &AppState, owner: &str) -> Result<Option<String>, RpcError> {
    let owner = normalize_address(owner);
    if let Some(user_id) = state.user_ids.get(&owner) {
        return Ok(Some(user_id));
    }

    let page = state
        .rpc
        .get_owned_objects(
            owner.clone(),
            OwnedFilter::StructType(state.parser.user_type().to_string()),
            None,
            Some(1),
        )
        .await?;

    let user_id = page
        .data
        .iter()
        .find_map(|resp| resp.object_id())
        .map(str::to_string);

    if let Some(user_id) = &user_id {
        tracing::debug!(%owner, user_id = %user_id, "Caching user id");
        state.user_ids.insert(&owner, user_id);
    }

    Ok(user_id)
}

/// Handler for GET /users/{owner}
///
/// Resolves the owner's user object and returns its counters.
pub async fn get_user(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> Result<Json<UserResponse>, GetUserError> {
    let owner = normalize_owner(&owner).map_err(GetUserError::InvalidOwner)?;
    let user_id = resolve_user_id(&state, &owner)
        .await
        .map_err(GetUserError::RpcFailed)?
        .ok_or_else(|| GetUserError::NoUser(owner.clone()))?;

    let resp = fetch_object(&state, &user_id)
        .await
        .map_err(GetUserError::RpcFailed)?;

    let user = state
        .parser
        .parse_user_obj(&resp)
        .map_err(|source| GetUserError::ParseFailed {
            id: user_id.clone(),
            source,
        })?;

    Ok(Json(UserResponse {
        owner,
        user_id,
        user,
    }))
}

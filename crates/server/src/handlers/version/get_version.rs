// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub version: String,
    /// Auction package the server decodes against.
    pub package_id: String,
    /// Shared registry object wallets pass when creating a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<String>,
}

pub async fn get_version(State(state): State<AppState>) -> (StatusCode, Json<VersionResponse>) {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        package_id: state.parser.package_id().to_string(),
        registry_id: state.config.sui.registry_id.clone(),
    };

    (StatusCode::OK, Json(response))
}

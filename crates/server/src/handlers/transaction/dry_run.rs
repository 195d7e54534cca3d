// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use auction_decoder::AuctionTx;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics;
use crate::rpc::RpcError;
use crate::state::AppState;
use crate::utils;

/// Message shown when the node gives no reason for a failed execution.
pub const DRY_RUN_FAILED: &str = "Unable to dry-run transaction";

/// Request body for transaction dry-run.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunRequest {
    /// Base64-encoded `TransactionData` bytes.
    pub tx: Option<String>,
}

/// Response for a transaction that would execute successfully.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunResult {
    pub result_type: &'static str,
    /// The auction action the transaction would perform, or `null`.
    pub event: Option<AuctionTx>,
}

/// Error response for dry-run failures.
#[derive(Debug, Serialize)]
pub struct DryRunFailure {
    pub code: u16,
    pub error: String,
    pub transaction: String,
    pub cause: String,
}

#[derive(Debug, Error)]
pub enum DryRunError {
    #[error("Missing field `tx` on request body.")]
    MissingTx,

    #[error("{cause}")]
    ExecutionFailed { transaction: String, cause: String },

    #[error("Failed to reach node")]
    RpcFailed {
        transaction: String,
        #[source]
        source: RpcError,
    },
}

impl IntoResponse for DryRunError {
    fn into_response(self) -> axum::response::Response {
        let (status, error, transaction, cause) = match self {
            DryRunError::MissingTx => (
                StatusCode::BAD_REQUEST,
                "Failed to parse transaction.".to_string(),
                String::new(),
                "Missing field `tx` on request body.".to_string(),
            ),
            DryRunError::ExecutionFailed { transaction, cause } => (
                StatusCode::BAD_REQUEST,
                DRY_RUN_FAILED.to_string(),
                transaction,
                cause,
            ),
            DryRunError::RpcFailed {
                transaction,
                source,
            } => {
                let (status, message) = utils::rpc_error_to_status(&source);
                (status, DRY_RUN_FAILED.to_string(), transaction, message)
            }
        };

        let body = Json(DryRunFailure {
            code: status.as_u16(),
            error,
            transaction,
            cause,
        });
        (status, body).into_response()
    }
}

/// Handler for POST /transaction/dry-run
///
/// Simulates the transaction on the node. A failed execution is answered with
/// the abort translated to the auction error name; a successful one with the
/// auction action it would perform.
pub async fn dry_run(
    State(state): State<AppState>,
    Json(body): Json<DryRunRequest>,
) -> Result<Json<DryRunResult>, DryRunError> {
    let tx = body
        .tx
        .filter(|tx| !tx.is_empty())
        .ok_or(DryRunError::MissingTx)?;

    let response = state
        .rpc
        .dry_run_transaction_block(tx.clone())
        .await
        .map_err(|source| DryRunError::RpcFailed {
            transaction: tx.clone(),
            source,
        })?;

    if let Some(failure) = response.failure() {
        tracing::debug!(error = %failure, "Dry run failed");
        // A rejection never reaches the node, so `None` only means no text.
        let cause = state
            .parser
            .err_code_to_str(
                Some(&failure),
                DRY_RUN_FAILED,
                Some(&state.config.sui.error_messages),
            )
            .unwrap_or(failure);
        return Err(DryRunError::ExecutionFailed {
            transaction: tx,
            cause,
        });
    }

    let record = response.into_record();
    let event = state.parser.parse_auction_tx(&record);
    metrics::record_decode(event.as_ref().map(AuctionTx::kind));

    Ok(Json(DryRunResult {
        result_type: "success",
        event,
    }))
}

//! API route definitions.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use coinvault_core::LedgerError;
use coinvault_shared::Denomination;

use crate::AppState;

pub mod accounts;
pub mod health;
pub mod transfers;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(transfers::routes())
}

/// Parses a currency path/body segment into the closed denomination set.
pub(crate) fn parse_currency(raw: &str) -> Result<Denomination, LedgerError> {
    raw.parse()
        .map_err(|_| LedgerError::InvalidCurrency(raw.to_string()))
}

/// Renders a ledger error as `{error, message}` with the taxonomy's status.
pub(crate) fn ledger_error_response(err: &LedgerError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if status.is_server_error() {
        error!(error = %err, "ledger operation failed");
        "An internal error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}

//! Transfer routes: the pay operation.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use coinvault_core::{LedgerError, TransactionKind};
use coinvault_db::LedgerRepository;

use super::{ledger_error_response, parse_currency};
use crate::AppState;

/// Creates the transfers router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transfers", post(create_transfer))
}

/// Body of the pay operation.
#[derive(Debug, Deserialize)]
struct TransferRequest {
    sender_id: Uuid,
    receiver_id: Uuid,
    currency: String,
    amount: Decimal,
    /// One of the closed kinds; defaults to `pay`.
    #[serde(default)]
    transaction_type: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

/// POST /transfers - move funds between two players and log the transaction.
async fn create_transfer(
    State(state): State<AppState>,
    Json(payload): Json<TransferRequest>,
) -> impl IntoResponse {
    let denomination = match parse_currency(&payload.currency) {
        Ok(denomination) => denomination,
        Err(err) => return ledger_error_response(&err),
    };

    let kind = match payload.transaction_type.as_deref() {
        None => TransactionKind::Pay,
        Some(raw) => match raw.parse::<TransactionKind>() {
            Ok(kind) => kind,
            Err(_) => {
                return ledger_error_response(&LedgerError::InvalidTransactionType(
                    raw.to_string(),
                ));
            }
        },
    };

    let ledger = LedgerRepository::new((*state.db).clone());
    let result = match kind {
        TransactionKind::Pay => {
            ledger
                .transfer(
                    payload.sender_id,
                    payload.receiver_id,
                    denomination,
                    payload.amount,
                    payload.note.as_deref(),
                )
                .await
        }
        TransactionKind::Purchase => {
            ledger
                .record_purchase(
                    payload.sender_id,
                    payload.receiver_id,
                    denomination,
                    payload.amount,
                    payload.note.as_deref(),
                )
                .await
        }
    };

    match result {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => ledger_error_response(&err),
    }
}

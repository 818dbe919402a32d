//! Account routes: initialization, balance queries, adjustments, history.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use coinvault_db::{AccountRepository, LedgerRepository};
use coinvault_shared::Denomination;

use super::{ledger_error_response, parse_currency};
use crate::AppState;

/// Creates the accounts router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts/{player_id}", post(init_account))
        .route("/accounts/{player_id}/balances", get(get_balances))
        .route("/accounts/{player_id}/balances/{currency}", get(get_balance))
        .route("/accounts/{player_id}/credit", post(credit))
        .route("/accounts/{player_id}/debit", post(debit))
        .route("/accounts/{player_id}/transactions", get(list_transactions))
}

/// Body for credit/debit adjustments.
#[derive(Debug, Deserialize)]
struct AdjustmentRequest {
    currency: String,
    amount: Decimal,
}

/// Query parameters for the transaction history.
#[derive(Debug, Deserialize)]
struct HistoryParams {
    limit: Option<u64>,
}

/// POST `/accounts/{player_id}` - initialize the account on first contact.
async fn init_account(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> impl IntoResponse {
    let accounts = AccountRepository::new((*state.db).clone());

    match accounts.init_account(player_id).await {
        Ok(created) => {
            if created {
                info!(player_id = %player_id, "account created");
            }
            let status = if created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (
                status,
                Json(json!({ "player_id": player_id, "created": created })),
            )
                .into_response()
        }
        Err(err) => ledger_error_response(&err),
    }
}

/// GET `/accounts/{player_id}/balances` - all four balances.
async fn get_balances(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> impl IntoResponse {
    let accounts = AccountRepository::new((*state.db).clone());

    match accounts.balances(player_id).await {
        Ok(balances) => (
            StatusCode::OK,
            Json(json!({ "player_id": player_id, "balances": balances })),
        )
            .into_response(),
        Err(err) => ledger_error_response(&err),
    }
}

/// GET `/accounts/{player_id}/balances/{currency}` - one balance.
async fn get_balance(
    State(state): State<AppState>,
    Path((player_id, currency)): Path<(Uuid, String)>,
) -> impl IntoResponse {
    let denomination = match parse_currency(&currency) {
        Ok(denomination) => denomination,
        Err(err) => return ledger_error_response(&err),
    };

    balance_response(&state, player_id, denomination).await
}

/// POST `/accounts/{player_id}/credit` - add to one balance.
async fn credit(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(payload): Json<AdjustmentRequest>,
) -> impl IntoResponse {
    let denomination = match parse_currency(&payload.currency) {
        Ok(denomination) => denomination,
        Err(err) => return ledger_error_response(&err),
    };

    let ledger = LedgerRepository::new((*state.db).clone());
    if let Err(err) = ledger.credit(player_id, denomination, payload.amount).await {
        return ledger_error_response(&err);
    }

    balance_response(&state, player_id, denomination).await
}

/// POST `/accounts/{player_id}/debit` - subtract from one balance.
async fn debit(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(payload): Json<AdjustmentRequest>,
) -> impl IntoResponse {
    let denomination = match parse_currency(&payload.currency) {
        Ok(denomination) => denomination,
        Err(err) => return ledger_error_response(&err),
    };

    let ledger = LedgerRepository::new((*state.db).clone());
    if let Err(err) = ledger.debit(player_id, denomination, payload.amount).await {
        return ledger_error_response(&err);
    }

    balance_response(&state, player_id, denomination).await
}

/// GET `/accounts/{player_id}/transactions` - newest log entries first.
async fn list_transactions(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let ledger = LedgerRepository::new((*state.db).clone());

    match ledger
        .recent_transactions(player_id, params.limit.unwrap_or(20))
        .await
    {
        Ok(records) => (
            StatusCode::OK,
            Json(json!({ "player_id": player_id, "transactions": records })),
        )
            .into_response(),
        Err(err) => ledger_error_response(&err),
    }
}

/// Shared response for endpoints that report one balance back.
async fn balance_response(
    state: &AppState,
    player_id: Uuid,
    denomination: Denomination,
) -> Response {
    let accounts = AccountRepository::new((*state.db).clone());

    match accounts.balance(player_id, denomination).await {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({
                "player_id": player_id,
                "currency": denomination,
                "balance": balance
            })),
        )
            .into_response(),
        Err(err) => ledger_error_response(&err),
    }
}

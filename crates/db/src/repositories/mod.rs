//! Repository abstractions for data access.
//!
//! Repositories own the only mutation paths into the `currency` and
//! `currency_transaction` tables; adapters never write to storage directly.

pub mod account;
pub mod ledger;

pub use account::{AccountBalances, AccountRepository};
pub use ledger::LedgerRepository;

use std::time::Duration;

use sea_orm::DbErr;

use coinvault_core::LedgerError;
use coinvault_shared::Denomination;

use crate::entities::accounts;

/// Attempts per unit of work before a transient conflict is surfaced.
pub(crate) const MAX_ATTEMPTS: u32 = 3;

/// Base delay between attempts; grows linearly with the attempt number.
pub(crate) const RETRY_BACKOFF: Duration = Duration::from_millis(25);

/// Runs a unit of work, retrying transient storage conflicts a bounded
/// number of times before surfacing them.
///
/// The expression is re-evaluated on every attempt. Validation and business
/// errors return on the first attempt; only errors classified retryable
/// loop, never more than [`MAX_ATTEMPTS`] times in total.
macro_rules! with_retry {
    ($operation:literal, $unit:expr) => {{
        let mut attempt: u32 = 1;
        loop {
            match $unit {
                Err(err) if err.is_retryable() && attempt < $crate::repositories::MAX_ATTEMPTS => {
                    tracing::warn!(
                        operation = $operation,
                        attempt,
                        error = %err,
                        "transient storage conflict, retrying"
                    );
                    tokio::time::sleep($crate::repositories::RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                result => break result,
            }
        }
    }};
}
pub(crate) use with_retry;

/// Maps a denomination to its balance column on the `currency` table.
///
/// The mapping is total over the closed enum, so no caller-controlled string
/// ever reaches the query builder.
pub(crate) const fn balance_column(denomination: Denomination) -> accounts::Column {
    match denomination {
        Denomination::Coin => accounts::Column::Coin,
        Denomination::Copper => accounts::Column::Copper,
        Denomination::Silver => accounts::Column::Silver,
        Denomination::Gold => accounts::Column::Gold,
    }
}

/// Classifies driver errors worth retrying: lock contention and friends.
pub(crate) fn is_transient(err: &DbErr) -> bool {
    let message = err.to_string().to_lowercase();
    message.contains("database is locked")
        || message.contains("database table is locked")
        || message.contains("deadlock")
        || message.contains("lock wait timeout")
        || message.contains("try restarting transaction")
}

/// Converts a driver error into the ledger taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> LedgerError {
    if is_transient(&err) {
        LedgerError::TransientStorage(err.to_string())
    } else {
        LedgerError::Database(err.to_string())
    }
}

//! Ledger error types.
//!
//! One taxonomy for every failure a balance operation can surface. Validation
//! errors are detected before any mutation; storage errors are classified so
//! the engine knows which units of work may be retried.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use coinvault_shared::Denomination;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Currency name is not one of the four denominations.
    #[error("Invalid currency type: {0}")]
    InvalidCurrency(String),

    /// Transaction type is not in the closed enumeration.
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),

    /// Amount is not positive or carries more than two decimal places.
    #[error("Amount must be positive with at most two decimal places, got {0}")]
    InvalidAmount(Decimal),

    /// Transaction note exceeds the persisted column width.
    #[error("Transaction note is {0} characters, maximum is 255")]
    NoteTooLong(usize),

    /// Sender and receiver are the same account.
    #[error("Cannot transfer to the sending account")]
    SelfTransfer,

    // ========== Account Errors ==========
    /// Sender lacks the requested balance.
    #[error("Insufficient {currency} balance for player {player_id}")]
    InsufficientFunds {
        /// The account that came up short.
        player_id: Uuid,
        /// The denomination that was requested.
        currency: Denomination,
    },

    /// Referenced account has never been initialized.
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    // ========== Storage Errors ==========
    /// Lock contention or connection hiccup that outlived the retry budget.
    #[error("Transient storage error: {0}")]
    TransientStorage(String),

    /// Any other database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::InvalidTransactionType(_) => "INVALID_TRANSACTION_TYPE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::NoteTooLong(_) => "NOTE_TOO_LONG",
            Self::SelfTransfer => "SELF_TRANSFER",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::TransientStorage(_) => "TRANSIENT_STORAGE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors, user-correctable
            Self::InvalidCurrency(_)
            | Self::InvalidTransactionType(_)
            | Self::InvalidAmount(_)
            | Self::NoteTooLong(_)
            | Self::SelfTransfer => 400,

            // 404 Not Found - account never initialized
            Self::AccountNotFound(_) => 404,

            // 422 Unprocessable - valid request, balance says no
            Self::InsufficientFunds { .. } => 422,

            // 503 Service Unavailable - storage contention outlived retries
            Self::TransientStorage(_) => 503,

            // 500 Internal Server Error
            Self::Database(_) => 500,
        }
    }

    /// Returns true if a caller may retry the operation unchanged.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientStorage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::InvalidCurrency("platinum".to_string()).error_code(),
            "INVALID_CURRENCY"
        );
        assert_eq!(
            LedgerError::InvalidAmount(Decimal::ZERO).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(LedgerError::SelfTransfer.error_code(), "SELF_TRANSFER");
        assert_eq!(
            LedgerError::InsufficientFunds {
                player_id: Uuid::nil(),
                currency: Denomination::Gold,
            }
            .error_code(),
            "INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(LedgerError::SelfTransfer.http_status_code(), 400);
        assert_eq!(
            LedgerError::AccountNotFound(Uuid::nil()).http_status_code(),
            404
        );
        assert_eq!(
            LedgerError::InsufficientFunds {
                player_id: Uuid::nil(),
                currency: Denomination::Coin,
            }
            .http_status_code(),
            422
        );
        assert_eq!(
            LedgerError::TransientStorage("database is locked".to_string()).http_status_code(),
            503
        );
        assert_eq!(
            LedgerError::Database("test".to_string()).http_status_code(),
            500
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(LedgerError::TransientStorage(String::new()).is_retryable());
        assert!(!LedgerError::SelfTransfer.is_retryable());
        assert!(!LedgerError::Database(String::new()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientFunds {
            player_id: Uuid::nil(),
            currency: Denomination::Silver,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient silver balance for player 00000000-0000-0000-0000-000000000000"
        );

        let err = LedgerError::NoteTooLong(300);
        assert_eq!(
            err.to_string(),
            "Transaction note is 300 characters, maximum is 255"
        );
    }
}

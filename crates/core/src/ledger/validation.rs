//! Validation rules applied before any balance mutation.
//!
//! Every mutating operation runs these checks first, so a rejected request
//! never touches storage.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::LedgerError;

/// Longest note accepted on a transaction record (VARCHAR(255) column).
pub const MAX_NOTE_LEN: usize = 255;

/// Largest amount a DECIMAL(10,2) column can hold.
fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// Validates a credit/debit/transfer amount.
///
/// Amounts must be strictly positive, carry at most two decimal places, and
/// fit the persisted column width.
///
/// # Errors
///
/// Returns `InvalidAmount` otherwise.
pub fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO || amount > max_amount() || amount.normalize().scale() > 2 {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}

/// Validates an optional transaction note against the column width.
///
/// # Errors
///
/// Returns `NoteTooLong` if the note exceeds [`MAX_NOTE_LEN`] characters.
pub fn validate_note(note: &str) -> Result<(), LedgerError> {
    let len = note.chars().count();
    if len > MAX_NOTE_LEN {
        return Err(LedgerError::NoteTooLong(len));
    }
    Ok(())
}

/// Validates a transfer request before any mutation.
///
/// # Errors
///
/// Returns `SelfTransfer` if sender and receiver are the same account,
/// otherwise whatever [`validate_amount`] or [`validate_note`] reject.
pub fn validate_transfer(
    sender_id: Uuid,
    receiver_id: Uuid,
    amount: Decimal,
    note: &str,
) -> Result<(), LedgerError> {
    if sender_id == receiver_id {
        return Err(LedgerError::SelfTransfer);
    }
    validate_amount(amount)?;
    validate_note(note)
}

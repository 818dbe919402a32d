//! Ledger business rules.
//!
//! This module implements the invariants the balance engine enforces:
//! - Error types for ledger operations
//! - Transaction kinds recorded in the audit log
//! - Validation rules applied before any mutation

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use types::TransactionKind;
pub use validation::{MAX_NOTE_LEN, validate_amount, validate_note, validate_transfer};

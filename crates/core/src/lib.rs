//! Core ledger rules for Coinvault.
//!
//! Pure business logic: the error taxonomy, transaction kinds, and the
//! validation rules every mutation must pass before it reaches storage.

pub mod ledger;

pub use ledger::{LedgerError, TransactionKind};

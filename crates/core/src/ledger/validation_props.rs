//! Property-based tests for the ledger validation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::LedgerError;
use super::validation::{MAX_NOTE_LEN, validate_amount, validate_transfer};

/// Strategy to generate a valid positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-positive amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate an amount with sub-cent precision.
fn sub_cent_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64)
        .prop_map(|millis| Decimal::new(millis * 10 + 1, 3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any positive two-decimal amount passes validation.
    #[test]
    fn prop_positive_amount_accepted(amount in positive_amount()) {
        prop_assert!(validate_amount(amount).is_ok());
    }

    /// Zero and negative amounts are always rejected.
    #[test]
    fn prop_non_positive_amount_rejected(amount in non_positive_amount()) {
        prop_assert!(matches!(
            validate_amount(amount),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    /// Amounts with more than two decimal places are always rejected.
    #[test]
    fn prop_sub_cent_amount_rejected(amount in sub_cent_amount()) {
        prop_assert!(matches!(
            validate_amount(amount),
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    /// A transfer to the sending account is rejected for any amount.
    #[test]
    fn prop_self_transfer_rejected(amount in positive_amount()) {
        let id = Uuid::new_v4();
        prop_assert!(matches!(
            validate_transfer(id, id, amount, ""),
            Err(LedgerError::SelfTransfer)
        ));
    }

    /// A transfer between distinct accounts with a valid amount and a
    /// bounded note always passes validation.
    #[test]
    fn prop_valid_transfer_accepted(
        amount in positive_amount(),
        note_len in 0usize..=MAX_NOTE_LEN,
    ) {
        let note = "n".repeat(note_len);
        prop_assert!(
            validate_transfer(Uuid::new_v4(), Uuid::new_v4(), amount, &note).is_ok()
        );
    }
}

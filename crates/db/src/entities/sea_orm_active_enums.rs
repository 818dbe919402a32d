//! String-backed enums persisted in the transaction log.
//!
//! The domain types live in `coinvault-shared`/`coinvault-core`; these are
//! their column representations, converted at the repository boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use coinvault_core::TransactionKind;
use coinvault_shared::Denomination;

/// Denomination column of the `currency_transaction` table.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    #[sea_orm(string_value = "coin")]
    Coin,
    #[sea_orm(string_value = "copper")]
    Copper,
    #[sea_orm(string_value = "silver")]
    Silver,
    #[sea_orm(string_value = "gold")]
    Gold,
}

impl From<Denomination> for CurrencyType {
    fn from(denomination: Denomination) -> Self {
        match denomination {
            Denomination::Coin => Self::Coin,
            Denomination::Copper => Self::Copper,
            Denomination::Silver => Self::Silver,
            Denomination::Gold => Self::Gold,
        }
    }
}

impl From<CurrencyType> for Denomination {
    fn from(currency_type: CurrencyType) -> Self {
        match currency_type {
            CurrencyType::Coin => Self::Coin,
            CurrencyType::Copper => Self::Copper,
            CurrencyType::Silver => Self::Silver,
            CurrencyType::Gold => Self::Gold,
        }
    }
}

/// Transaction-kind column of the `currency_transaction` table.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[sea_orm(string_value = "pay")]
    Pay,
    #[sea_orm(string_value = "purchase")]
    Purchase,
}

impl From<TransactionKind> for TransactionType {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Pay => Self::Pay,
            TransactionKind::Purchase => Self::Purchase,
        }
    }
}

impl From<TransactionType> for TransactionKind {
    fn from(transaction_type: TransactionType) -> Self {
        match transaction_type {
            TransactionType::Pay => Self::Pay,
            TransactionType::Purchase => Self::Purchase,
        }
    }
}

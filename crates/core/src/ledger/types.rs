//! Domain types for the transaction log.

use serde::{Deserialize, Serialize};

/// Kind of transaction recorded in the audit log.
///
/// A closed enumeration: the log schema constrains the column to these
/// values, so unknown kinds are rejected before they reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Player-to-player payment.
    Pay,
    /// Purchase from a shop or service.
    Purchase,
}

impl TransactionKind {
    /// The lowercase name used in the schema and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pay => "pay",
            Self::Purchase => "purchase",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pay" => Ok(Self::Pay),
            "purchase" => Ok(Self::Purchase),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

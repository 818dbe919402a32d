//! The closed set of coin denominations tracked by the ledger.
//!
//! Denomination names arrive as strings at the API boundary and are parsed
//! exactly once; everything below the boundary carries the enum.

use serde::{Deserialize, Serialize};

/// One of the four coin denominations a player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Plain coin.
    Coin,
    /// Copper coin.
    Copper,
    /// Silver coin.
    Silver,
    /// Gold coin.
    Gold,
}

impl Denomination {
    /// All denominations, in schema column order.
    pub const ALL: [Self; 4] = [Self::Coin, Self::Copper, Self::Silver, Self::Gold];

    /// The lowercase name used in the schema and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Copper => "copper",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Denomination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coin" => Ok(Self::Coin),
            "copper" => Ok(Self::Copper),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            _ => Err(format!("Unknown denomination: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("coin", Denomination::Coin)]
    #[case("copper", Denomination::Copper)]
    #[case("silver", Denomination::Silver)]
    #[case("gold", Denomination::Gold)]
    #[case("GOLD", Denomination::Gold)]
    fn test_parse(#[case] input: &str, #[case] expected: Denomination) {
        assert_eq!(Denomination::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("platinum")]
    #[case("coins")]
    fn test_parse_rejects_unknown(#[case] input: &str) {
        assert!(Denomination::from_str(input).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for denom in Denomination::ALL {
            assert_eq!(Denomination::from_str(&denom.to_string()).unwrap(), denom);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&Denomination::Gold).unwrap(),
            "\"gold\""
        );
        let parsed: Denomination = serde_json::from_str("\"copper\"").unwrap();
        assert_eq!(parsed, Denomination::Copper);
    }
}

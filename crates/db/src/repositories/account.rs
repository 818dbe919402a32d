//! Account repository: account lifecycle and balance reads.

use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use coinvault_core::LedgerError;
use coinvault_shared::Denomination;

use super::map_db_err;
use crate::entities::accounts;

/// All four balances for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountBalances {
    /// Plain coin balance.
    pub coin: Decimal,
    /// Copper balance.
    pub copper: Decimal,
    /// Silver balance.
    pub silver: Decimal,
    /// Gold balance.
    pub gold: Decimal,
}

impl AccountBalances {
    /// Returns the balance for one denomination.
    #[must_use]
    pub const fn get(&self, denomination: Denomination) -> Decimal {
        match denomination {
            Denomination::Coin => self.coin,
            Denomination::Copper => self.copper,
            Denomination::Silver => self.silver,
            Denomination::Gold => self.gold,
        }
    }
}

impl From<accounts::Model> for AccountBalances {
    fn from(model: accounts::Model) -> Self {
        Self {
            coin: model.coin,
            copper: model.copper,
            silver: model.silver,
            gold: model.gold,
        }
    }
}

/// Repository for the `currency` table.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the account with all four balances at zero.
    ///
    /// Idempotent: a second call for the same player is a no-op and never
    /// touches existing balances. Returns whether a row was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn init_account(&self, player_id: Uuid) -> Result<bool, LedgerError> {
        let account = accounts::ActiveModel {
            player_uuid: Set(player_id),
            coin: Set(Decimal::ZERO),
            copper: Set(Decimal::ZERO),
            silver: Set(Decimal::ZERO),
            gold: Set(Decimal::ZERO),
        };

        let inserted = accounts::Entity::insert(account)
            .on_conflict(
                OnConflict::column(accounts::Column::PlayerUuid)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        if inserted > 0 {
            debug!(player_id = %player_id, "account initialized");
        }
        Ok(inserted > 0)
    }

    /// Returns whether an account row exists for the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn account_exists(&self, player_id: Uuid) -> Result<bool, LedgerError> {
        let found = accounts::Entity::find_by_id(player_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(found.is_some())
    }

    /// Reads one balance.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account was never initialized; a
    /// missing row is never reported as a zero balance.
    pub async fn balance(
        &self,
        player_id: Uuid,
        denomination: Denomination,
    ) -> Result<Decimal, LedgerError> {
        let balances = self.balances(player_id).await?;
        Ok(balances.get(denomination))
    }

    /// Reads all four balances.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account was never initialized.
    pub async fn balances(&self, player_id: Uuid) -> Result<AccountBalances, LedgerError> {
        let account = accounts::Entity::find_by_id(player_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(LedgerError::AccountNotFound(player_id))?;
        Ok(account.into())
    }
}

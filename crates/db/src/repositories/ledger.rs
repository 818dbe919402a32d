//! Ledger repository: the balance mutation engine.
//!
//! Every mutation is a single conditional statement or a database
//! transaction, so a balance check and the update it guards are never
//! separated by a window another caller could race through. Transient
//! conflicts (row locks, busy database) retry a bounded number of times.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use coinvault_core::ledger::{validate_amount, validate_transfer};
use coinvault_core::{LedgerError, TransactionKind};
use coinvault_shared::Denomination;

use super::{balance_column, map_db_err, with_retry};
use crate::entities::{accounts, transactions};

/// Most rows a single history query returns.
const MAX_HISTORY_LIMIT: u64 = 100;

/// Repository enforcing transfer invariants over the raw tables.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `amount` to one balance.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-positive amounts and
    /// `AccountNotFound` if the account was never initialized.
    pub async fn credit(
        &self,
        player_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        validate_amount(amount)?;

        with_retry!(
            "credit",
            Self::apply_credit(&self.db, player_id, denomination, amount).await
        )?;

        debug!(player_id = %player_id, currency = %denomination, %amount, "balance credited");
        Ok(())
    }

    /// Subtracts `amount` from one balance.
    ///
    /// The balance check and the subtraction are one conditional statement,
    /// so the balance can never be driven negative by a concurrent caller.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-positive amounts,
    /// `InsufficientFunds` if the balance is short, and `AccountNotFound`
    /// if the account was never initialized.
    pub async fn debit(
        &self,
        player_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        validate_amount(amount)?;

        with_retry!(
            "debit",
            Self::apply_debit(&self.db, player_id, denomination, amount).await
        )?;

        debug!(player_id = %player_id, currency = %denomination, %amount, "balance debited");
        Ok(())
    }

    /// Moves `amount` between two players and appends a `pay` record.
    ///
    /// Debit, credit and the log append run in one database transaction:
    /// either all three commit or none is observable. Transient conflicts
    /// retry the whole unit a bounded number of times.
    ///
    /// # Errors
    ///
    /// Returns `SelfTransfer`, `InvalidAmount` or `NoteTooLong` before any
    /// mutation; `InsufficientFunds` or `AccountNotFound` roll the unit
    /// back; `TransientStorage` after the retry budget is spent.
    pub async fn transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<transactions::Model, LedgerError> {
        validate_transfer(sender_id, receiver_id, amount, note.unwrap_or(""))?;

        let record = with_retry!(
            "transfer",
            self.execute_transfer(
                sender_id,
                receiver_id,
                denomination,
                TransactionKind::Pay,
                amount,
                note,
            )
            .await
        )?;

        info!(
            transaction_id = record.transaction_id,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            currency = %denomination,
            %amount,
            "transfer completed"
        );
        Ok(record)
    }

    /// Moves `amount` between two players and appends a `purchase` record.
    ///
    /// Same unit of work as [`transfer`](Self::transfer) with the other
    /// member of the closed transaction-type enumeration.
    ///
    /// # Errors
    ///
    /// Same as [`transfer`](Self::transfer).
    pub async fn record_purchase(
        &self,
        buyer_id: Uuid,
        seller_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<transactions::Model, LedgerError> {
        validate_transfer(buyer_id, seller_id, amount, note.unwrap_or(""))?;

        let record = with_retry!(
            "purchase",
            self.execute_transfer(
                buyer_id,
                seller_id,
                denomination,
                TransactionKind::Purchase,
                amount,
                note,
            )
            .await
        )?;

        info!(
            transaction_id = record.transaction_id,
            buyer_id = %buyer_id,
            seller_id = %seller_id,
            currency = %denomination,
            %amount,
            "purchase recorded"
        );
        Ok(record)
    }

    /// Lists the newest transactions a player sent or received.
    ///
    /// The log is append-only; this is the only read surface over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn recent_transactions(
        &self,
        player_id: Uuid,
        limit: u64,
    ) -> Result<Vec<transactions::Model>, LedgerError> {
        transactions::Entity::find()
            .filter(
                Condition::any()
                    .add(transactions::Column::PlayerUuidSender.eq(player_id))
                    .add(transactions::Column::PlayerUuidReceiver.eq(player_id)),
            )
            .order_by_desc(transactions::Column::TransactionId)
            .limit(limit.min(MAX_HISTORY_LIMIT))
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    /// One attempt at the debit-credit-log unit of work.
    ///
    /// The transaction rolls back on drop, so every early return leaves the
    /// ledger exactly as it was.
    async fn execute_transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        denomination: Denomination,
        kind: TransactionKind,
        amount: Decimal,
        note: Option<&str>,
    ) -> Result<transactions::Model, LedgerError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        Self::apply_debit(&txn, sender_id, denomination, amount).await?;

        let column = balance_column(denomination);
        let credited = accounts::Entity::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .filter(accounts::Column::PlayerUuid.eq(receiver_id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;
        if credited.rows_affected == 0 {
            return Err(LedgerError::AccountNotFound(receiver_id));
        }

        let record = transactions::ActiveModel {
            player_uuid_sender: Set(sender_id),
            player_uuid_receiver: Set(receiver_id),
            currency_type: Set(denomination.into()),
            transaction_type: Set(kind.into()),
            amount: Set(amount),
            timestamp: Set(Utc::now()),
            notes: Set(note.map(ToOwned::to_owned)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(record)
    }

    /// Conditional credit: `SET col = col + ? WHERE player = ?`.
    async fn apply_credit<C: ConnectionTrait>(
        conn: &C,
        player_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let column = balance_column(denomination);
        let result = accounts::Entity::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .filter(accounts::Column::PlayerUuid.eq(player_id))
            .exec(conn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(LedgerError::AccountNotFound(player_id));
        }
        Ok(())
    }

    /// Conditional debit: `SET col = col - ? WHERE player = ? AND col >= ?`.
    ///
    /// Zero affected rows means either the balance was short or the row does
    /// not exist; a follow-up read on the same connection disambiguates.
    async fn apply_debit<C: ConnectionTrait>(
        conn: &C,
        player_id: Uuid,
        denomination: Denomination,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let column = balance_column(denomination);
        let result = accounts::Entity::update_many()
            .col_expr(column, Expr::col(column).sub(amount))
            .filter(accounts::Column::PlayerUuid.eq(player_id))
            .filter(column.gte(amount))
            .exec(conn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            let exists = accounts::Entity::find_by_id(player_id)
                .one(conn)
                .await
                .map_err(map_db_err)?
                .is_some();
            return Err(if exists {
                LedgerError::InsufficientFunds {
                    player_id,
                    currency: denomination,
                }
            } else {
                LedgerError::AccountNotFound(player_id)
            });
        }
        Ok(())
    }
}

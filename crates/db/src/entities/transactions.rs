//! `SeaORM` entity for the `currency_transaction` table: the append-only audit log.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{CurrencyType, TransactionType};

#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "currency_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub transaction_id: i64,
    pub player_uuid_sender: Uuid,
    pub player_uuid_receiver: Uuid,
    pub currency_type: CurrencyType,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub timestamp: DateTimeUtc,
    pub notes: Option<String>,
}

#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::PlayerUuidSender",
        to = "super::accounts::Column::PlayerUuid"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::PlayerUuidReceiver",
        to = "super::accounts::Column::PlayerUuid"
    )]
    Receiver,
}

impl ActiveModelBehavior for ActiveModel {}

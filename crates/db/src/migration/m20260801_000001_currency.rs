//! Initial migration: the `currency` balances table and the
//! `currency_transaction` audit log.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Currency::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Currency::PlayerUuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Currency::Coin)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Currency::Copper)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Currency::Silver)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Currency::Gold)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CurrencyTransaction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurrencyTransaction::TransactionId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::PlayerUuidSender)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::PlayerUuidReceiver)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::CurrencyType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::TransactionType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::Amount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CurrencyTransaction::Timestamp)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CurrencyTransaction::Notes).string_len(255))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-currency_transaction-sender")
                            .from(
                                CurrencyTransaction::Table,
                                CurrencyTransaction::PlayerUuidSender,
                            )
                            .to(Currency::Table, Currency::PlayerUuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-currency_transaction-receiver")
                            .from(
                                CurrencyTransaction::Table,
                                CurrencyTransaction::PlayerUuidReceiver,
                            )
                            .to(Currency::Table, Currency::PlayerUuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-currency_transaction-sender")
                    .table(CurrencyTransaction::Table)
                    .col(CurrencyTransaction::PlayerUuidSender)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-currency_transaction-receiver")
                    .table(CurrencyTransaction::Table)
                    .col(CurrencyTransaction::PlayerUuidReceiver)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CurrencyTransaction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Currency::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Currency {
    Table,
    PlayerUuid,
    Coin,
    Copper,
    Silver,
    Gold,
}

#[derive(Iden)]
enum CurrencyTransaction {
    Table,
    TransactionId,
    PlayerUuidSender,
    PlayerUuidReceiver,
    CurrencyType,
    TransactionType,
    Amount,
    Timestamp,
    Notes,
}

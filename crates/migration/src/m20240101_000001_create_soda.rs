//! Create `soda` table.
//!
//! Stock rows; `name` is unique and `quantity` is bounded by `max`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Soda::Table)
                    .if_not_exists()
                    .col(big_integer(Soda::Id).auto_increment().primary_key())
                    .col(string_len(Soda::Name, 200).unique_key().not_null())
                    .col(string_len(Soda::Brand, 200).not_null())
                    .col(string_len(Soda::SodaType, 16).not_null())
                    .col(integer(Soda::Quantity).not_null())
                    .col(integer(Soda::Max).not_null())
                    .check(Expr::col(Soda::Quantity).gte(0))
                    .check(Expr::col(Soda::Quantity).lte(Expr::col(Soda::Max)))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Soda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Soda { Table, Id, Name, Brand, SodaType, Quantity, Max }

//! Create `outlet` table.
//!
//! Store locations keyed by a generated id and a human readable `code`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outlet::Table)
                    .if_not_exists()
                    .col(pk_auto(Outlet::Id))
                    .col(string_len(Outlet::Code, 32).not_null())
                    .col(string_len(Outlet::Name, 128).not_null())
                    .col(string_len_null(Outlet::Address, 256))
                    .col(string_len_null(Outlet::City, 64))
                    .col(string_len_null(Outlet::Phone, 32))
                    .col(boolean(Outlet::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Outlet::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Outlet { Table, Id, Code, Name, Address, City, Phone, IsActive }

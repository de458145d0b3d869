//! Secondary indexes.
//!
//! `code` is looked up by the by-code endpoint and the pizza proxy. The index is
//! deliberately non-unique: duplicate codes are accepted at creation time.
use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_outlet::Outlet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_outlet_code")
                    .table(Outlet::Table)
                    .col(Outlet::Code)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_outlet_code").table(Outlet::Table).to_owned())
            .await
    }
}

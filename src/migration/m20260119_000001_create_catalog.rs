//! Create products, releases, platforms and runs tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Releases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Releases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Releases::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Releases::Description).text())
                    .col(ColumnDef::new(Releases::ProductId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_releases_product_id")
                    .table(Releases::Table)
                    .col(Releases::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Platforms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Platforms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Platforms::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_platforms_name")
                    .table(Platforms::Table)
                    .col(Platforms::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Runs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Runs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Runs::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Runs::Start).timestamp_with_time_zone())
                    .col(ColumnDef::new(Runs::End).timestamp_with_time_zone())
                    .col(ColumnDef::new(Runs::ReleaseId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_runs_release_id")
                    .table(Runs::Table)
                    .col(Runs::ReleaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Runs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Platforms::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Releases::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Products {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Releases {
    Table,
    Id,
    Name,
    Description,
    ProductId,
}

#[derive(DeriveIden)]
pub enum Platforms {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Runs {
    Table,
    Id,
    Name,
    Start,
    End,
    ReleaseId,
}

//! Seed the default platforms.
//!
//! Rows that already exist (matched by the unique name) are left untouched.

use sea_orm_migration::prelude::*;

use super::m20260119_000001_create_catalog::Platforms;

/// Platforms available on a fresh install.
pub const DEFAULT_PLATFORMS: &[&str] = &["Windows", "Linux", "macOS", "iOS", "Android"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Platforms::Table)
            .columns([Platforms::Name])
            .on_conflict(OnConflict::column(Platforms::Name).do_nothing().to_owned());

        for name in DEFAULT_PLATFORMS {
            insert
                .values([(*name).into()])
                .map_err(|e| DbErr::Custom(format!("Invalid platform seed row: {}", e)))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Platforms::Table)
            .and_where(Expr::col(Platforms::Name).is_in(DEFAULT_PLATFORMS.iter().copied()))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

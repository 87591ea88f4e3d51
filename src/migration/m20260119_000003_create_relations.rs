//! Create the junction tables: case-platform, related-case and run-case.
//!
//! Each pair is unique. Foreign ids are validated by the service layer, not by
//! database constraints.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_junction(
            manager,
            Junction::CasePlatforms,
            (Junction::CaseId, "idx_case_platforms_case_id"),
            (Junction::PlatformId, "idx_case_platforms_platform_id"),
            "idx_case_platforms_unique",
        )
        .await?;
        create_junction(
            manager,
            Junction::RelatedCases,
            (Junction::CaseId, "idx_related_cases_case_id"),
            (Junction::RelatedCaseId, "idx_related_cases_related_case_id"),
            "idx_related_cases_unique",
        )
        .await?;
        create_junction(
            manager,
            Junction::RunCases,
            (Junction::RunId, "idx_run_cases_run_id"),
            (Junction::CaseId, "idx_run_cases_case_id"),
            "idx_run_cases_unique",
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Junction::RunCases,
            Junction::RelatedCases,
            Junction::CasePlatforms,
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

/// Create a two-column junction table with an index per column and a unique pair index.
async fn create_junction(
    manager: &SchemaManager<'_>,
    table: Junction,
    (left, left_index): (Junction, &str),
    (right, right_index): (Junction, &str),
    unique_index: &str,
) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Junction::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(left).integer().not_null())
                .col(ColumnDef::new(right).integer().not_null())
                .to_owned(),
        )
        .await?;

    for (column, index) in [(left, left_index), (right, right_index)] {
        manager
            .create_index(
                Index::create()
                    .name(index)
                    .table(table)
                    .col(column)
                    .to_owned(),
            )
            .await?;
    }

    manager
        .create_index(
            Index::create()
                .name(unique_index)
                .table(table)
                .col(left)
                .col(right)
                .unique()
                .to_owned(),
        )
        .await
}

/// Identifiers for all three junction tables and their columns.
#[derive(DeriveIden, Clone, Copy)]
enum Junction {
    CasePlatforms,
    RelatedCases,
    RunCases,
    Id,
    CaseId,
    PlatformId,
    RelatedCaseId,
    RunId,
}

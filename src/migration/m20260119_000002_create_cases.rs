//! Create test cases and their ordered children (steps, preconditions, expectations).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TestCases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestCases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestCases::CaseNumber).big_integer().not_null())
                    .col(ColumnDef::new(TestCases::Name).string_len(255).not_null())
                    .col(ColumnDef::new(TestCases::Description).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_cases_case_number")
                    .table(TestCases::Table)
                    .col(TestCases::CaseNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Preconditions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Preconditions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Preconditions::Description).text().not_null())
                    .col(ColumnDef::new(Preconditions::CaseId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_preconditions_case_id")
                    .table(Preconditions::Table)
                    .col(Preconditions::CaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Steps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Steps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Steps::StepOrder).integer().not_null())
                    .col(ColumnDef::new(Steps::Description).text().not_null())
                    .col(ColumnDef::new(Steps::CaseId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_steps_case_id")
                    .table(Steps::Table)
                    .col(Steps::CaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expectations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expectations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expectations::Description).text().not_null())
                    .col(ColumnDef::new(Expectations::StepId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expectations_step_id")
                    .table(Expectations::Table)
                    .col(Expectations::StepId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expectations::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Steps::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Preconditions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestCases::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TestCases {
    Table,
    Id,
    CaseNumber,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Preconditions {
    Table,
    Id,
    Description,
    CaseId,
}

#[derive(DeriveIden)]
enum Steps {
    Table,
    Id,
    StepOrder,
    Description,
    CaseId,
}

#[derive(DeriveIden)]
enum Expectations {
    Table,
    Id,
    Description,
    StepId,
}

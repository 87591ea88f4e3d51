//! Related-case association (self-referential junction on test cases).
//!
//! Both columns point at `test_cases`, so no `Related` impl is provided;
//! traverse through the explicit relation variants instead.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "related_cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_id: i32,
    pub related_case_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_case::Entity",
        from = "Column::CaseId",
        to = "super::test_case::Column::Id"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::test_case::Entity",
        from = "Column::RelatedCaseId",
        to = "super::test_case::Column::Id"
    )]
    Target,
}

impl ActiveModelBehavior for ActiveModel {}

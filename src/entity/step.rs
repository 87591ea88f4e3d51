//! Step entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "steps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub step_order: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub case_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_case::Entity",
        from = "Column::CaseId",
        to = "super::test_case::Column::Id"
    )]
    TestCase,
    #[sea_orm(has_many = "super::expectation::Entity")]
    Expectations,
}

impl Related<super::test_case::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestCase.def()
    }
}

impl Related<super::expectation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expectations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Platform entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "platforms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::case_platform::Entity")]
    CasePlatforms,
}

impl Related<super::case_platform::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CasePlatforms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

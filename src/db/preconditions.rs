//! Database queries for preconditions.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::precondition::{self, ActiveModel, Entity as Precondition};
use crate::error::AppResult;

pub const ENTITY: &str = "Precondition";

/// Get a precondition by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<precondition::Model> {
    super::find_one::<Precondition, C>(db, ENTITY, id).await
}

/// List all preconditions.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<precondition::Model>> {
    let rows = Precondition::find()
        .order_by_asc(precondition::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// List the preconditions of a case.
pub async fn find_by_case<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
) -> AppResult<Vec<precondition::Model>> {
    super::find_where::<Precondition, C>(
        db,
        precondition::Column::CaseId,
        case_id,
        precondition::Column::Id,
    )
    .await
}

/// Insert a new precondition.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    description: String,
    case_id: i32,
) -> AppResult<precondition::Model> {
    let model = ActiveModel {
        id: NotSet,
        description: Set(description),
        case_id: Set(case_id),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored precondition.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: precondition::Model,
) -> AppResult<precondition::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        description: Set(model.description),
        case_id: Set(model.case_id),
    };
    Ok(active.update(db).await?)
}

/// Delete a precondition by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Precondition, C>(db, precondition::Column::Id, ENTITY, id).await
}

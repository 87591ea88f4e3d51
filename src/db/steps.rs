//! Database queries for steps.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::step::{self, ActiveModel, Entity as Step};
use crate::error::AppResult;

pub const ENTITY: &str = "Step";

/// Get a step by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<step::Model> {
    super::find_one::<Step, C>(db, ENTITY, id).await
}

/// List all steps.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<step::Model>> {
    let rows = Step::find().order_by_asc(step::Column::Id).all(db).await?;
    Ok(rows)
}

/// List the steps of a case by ascending order. Equal orders fall back to insertion order.
pub async fn find_by_case<C: ConnectionTrait>(db: &C, case_id: i32) -> AppResult<Vec<step::Model>> {
    let rows = Step::find()
        .filter(step::Column::CaseId.eq(case_id))
        .order_by_asc(step::Column::StepOrder)
        .order_by_asc(step::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a new step.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    step_order: i32,
    description: String,
    case_id: i32,
) -> AppResult<step::Model> {
    let model = ActiveModel {
        id: NotSet,
        step_order: Set(step_order),
        description: Set(description),
        case_id: Set(case_id),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored step.
pub async fn update<C: ConnectionTrait>(db: &C, model: step::Model) -> AppResult<step::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        step_order: Set(model.step_order),
        description: Set(model.description),
        case_id: Set(model.case_id),
    };
    Ok(active.update(db).await?)
}

/// Delete a step by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Step, C>(db, step::Column::Id, ENTITY, id).await
}

//! Database queries for expectations.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::expectation::{self, ActiveModel, Entity as Expectation};
use crate::error::AppResult;

pub const ENTITY: &str = "Expectation";

/// Get an expectation by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<expectation::Model> {
    super::find_one::<Expectation, C>(db, ENTITY, id).await
}

/// List all expectations.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<expectation::Model>> {
    let rows = Expectation::find()
        .order_by_asc(expectation::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// List the expectations of a step.
pub async fn find_by_step<C: ConnectionTrait>(
    db: &C,
    step_id: i32,
) -> AppResult<Vec<expectation::Model>> {
    super::find_where::<Expectation, C>(
        db,
        expectation::Column::StepId,
        step_id,
        expectation::Column::Id,
    )
    .await
}

/// Insert a new expectation.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    description: String,
    step_id: i32,
) -> AppResult<expectation::Model> {
    let model = ActiveModel {
        id: NotSet,
        description: Set(description),
        step_id: Set(step_id),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored expectation.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: expectation::Model,
) -> AppResult<expectation::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        description: Set(model.description),
        step_id: Set(model.step_id),
    };
    Ok(active.update(db).await?)
}

/// Delete an expectation by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Expectation, C>(db, expectation::Column::Id, ENTITY, id).await
}

//! Database queries for test runs.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::run::{self, ActiveModel, Entity as Run};
use crate::error::AppResult;

pub const ENTITY: &str = "Run";

/// Get a run by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<run::Model> {
    super::find_one::<Run, C>(db, ENTITY, id).await
}

/// List all runs.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<run::Model>> {
    let rows = Run::find().order_by_asc(run::Column::Id).all(db).await?;
    Ok(rows)
}

/// List runs belonging to a release.
pub async fn find_by_release<C: ConnectionTrait>(
    db: &C,
    release_id: i32,
) -> AppResult<Vec<run::Model>> {
    super::find_where::<Run, C>(db, run::Column::ReleaseId, release_id, run::Column::Id).await
}

/// Insert a new run from a fully prepared (id-less) model.
pub async fn insert<C: ConnectionTrait>(db: &C, model: run::Model) -> AppResult<run::Model> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(model.name),
        start: Set(model.start),
        end: Set(model.end),
        release_id: Set(model.release_id),
    };
    Ok(active.insert(db).await?)
}

/// Overwrite a stored run.
pub async fn update<C: ConnectionTrait>(db: &C, model: run::Model) -> AppResult<run::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        start: Set(model.start),
        end: Set(model.end),
        release_id: Set(model.release_id),
    };
    Ok(active.update(db).await?)
}

/// Delete a run row by ID. Run-case cleanup is the caller's job.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Run, C>(db, run::Column::Id, ENTITY, id).await
}

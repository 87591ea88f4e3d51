//! Database queries for run-case associations.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entity::run_case::{self, ActiveModel, Entity as RunCase};
use crate::error::AppResult;

/// Cases attached to a run, in insertion order.
pub async fn find_by_run<C: ConnectionTrait>(db: &C, run_id: i32) -> AppResult<Vec<run_case::Model>> {
    super::find_where::<RunCase, C>(db, run_case::Column::RunId, run_id, run_case::Column::Id).await
}

/// Runs a case is attached to.
pub async fn find_by_case<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
) -> AppResult<Vec<run_case::Model>> {
    super::find_where::<RunCase, C>(db, run_case::Column::CaseId, case_id, run_case::Column::Id)
        .await
}

/// Get the association for an exact run/case pair.
pub async fn find_pair<C: ConnectionTrait>(
    db: &C,
    run_id: i32,
    case_id: i32,
) -> AppResult<Option<run_case::Model>> {
    let row = RunCase::find()
        .filter(run_case::Column::RunId.eq(run_id))
        .filter(run_case::Column::CaseId.eq(case_id))
        .one(db)
        .await?;
    Ok(row)
}

/// Insert a new association.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    run_id: i32,
    case_id: i32,
) -> AppResult<run_case::Model> {
    let model = ActiveModel {
        id: NotSet,
        run_id: Set(run_id),
        case_id: Set(case_id),
    };
    Ok(model.insert(db).await?)
}

/// Remove every association owned by a run.
pub async fn delete_by_run<C: ConnectionTrait>(db: &C, run_id: i32) -> AppResult<u64> {
    super::delete_where::<RunCase, C>(db, run_case::Column::RunId, run_id).await
}

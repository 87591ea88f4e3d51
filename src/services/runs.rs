//! Test runs and the cases executed in them.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use super::{reference, required};
use crate::db;
use crate::entity::run;
use crate::error::{AppError, AppResult, ReferenceScope};
use crate::models::{CreateRunRequest, UpdateRunRequest};

/// Parse an ISO 8601 timestamp supplied for `field`.
pub fn parse_timestamp(value: &str, field: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| {
            AppError::invalid(format!(
                "Invalid {} datetime format. Use ISO 8601.",
                field
            ))
        })
}

fn parse_optional(value: Option<&str>, field: &str) -> AppResult<Option<DateTime<Utc>>> {
    value.map(|v| parse_timestamp(v, field)).transpose()
}

/// List runs, optionally restricted to one release.
pub async fn list(db: &DatabaseConnection, release_id: Option<i32>) -> AppResult<Vec<run::Model>> {
    match release_id {
        Some(release_id) => db::runs::find_by_release(db, release_id).await,
        None => db::runs::find_all(db).await,
    }
}

pub async fn get(db: &DatabaseConnection, id: i32) -> AppResult<run::Model> {
    db::runs::find(db, id).await
}

/// Create a run under an existing release.
pub async fn create(db: &DatabaseConnection, req: CreateRunRequest) -> AppResult<run::Model> {
    let name = required(&req.name, "Name")?;
    db::releases::find(db, req.release_id)
        .await
        .map_err(reference(db::releases::ENTITY, ReferenceScope::Parent))?;
    let start = parse_optional(req.start.as_deref(), "start")?;
    let end = parse_optional(req.end.as_deref(), "end")?;

    let run = db::runs::insert(
        db,
        run::Model {
            id: 0,
            name,
            start,
            end,
            release_id: req.release_id,
        },
    )
    .await?;

    info!(run_id = run.id, release_id = run.release_id, "Created run");
    Ok(run)
}

/// Rename a run and move its window.
///
/// Omitted timestamps keep their stored values. Nothing is written unless
/// every supplied timestamp parses.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    req: UpdateRunRequest,
) -> AppResult<run::Model> {
    let name = required(&req.name, "Name")?;
    let mut run = db::runs::find(db, id).await?;
    let start = parse_optional(req.start.as_deref(), "start")?;
    let end = parse_optional(req.end.as_deref(), "end")?;

    run.name = name;
    if start.is_some() {
        run.start = start;
    }
    if end.is_some() {
        run.end = end;
    }
    db::runs::update(db, run).await
}

/// Delete a run and its case memberships.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    db::runs::find(&txn, id).await?;

    let case_rows = db::run_cases::delete_by_run(&txn, id).await?;
    db::runs::delete(&txn, id).await?;
    txn.commit().await?;

    debug!(run_id = id, case_rows, "Removed run cases");
    info!(run_id = id, "Deleted run");
    Ok(())
}

/// Ids of the cases in a run, in the order they were added.
pub async fn cases(db: &DatabaseConnection, id: i32) -> AppResult<Vec<i32>> {
    db::runs::find(db, id).await?;
    let rows = db::run_cases::find_by_run(db, id).await?;
    Ok(rows.into_iter().map(|row| row.case_id).collect())
}

/// Add a case to a run. A case can appear in a run only once.
pub async fn add_case(db: &DatabaseConnection, id: i32, case_id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    db::runs::find(&txn, id).await?;
    db::cases::find(&txn, case_id)
        .await
        .map_err(reference(db::cases::ENTITY, ReferenceScope::Parent))?;

    if db::run_cases::find_pair(&txn, id, case_id).await?.is_some() {
        return Err(AppError::invalid(format!(
            "Case already in run: {}",
            case_id
        )));
    }
    db::run_cases::insert(&txn, id, case_id).await?;
    txn.commit().await?;

    info!(run_id = id, case_id, "Added case to run");
    Ok(())
}

//! Steps, preconditions and expectations hanging off a test case.

use sea_orm::DatabaseConnection;
use tracing::info;

use super::{reference, required};
use crate::db;
use crate::entity::{expectation, precondition, step};
use crate::error::{AppError, AppResult, ReferenceScope};
use crate::models::{
    CreateExpectationRequest, CreatePreconditionRequest, CreateStepRequest, DescriptionRequest,
    UpdateStepRequest,
};

/// List steps. Filtered listings come back in step order.
pub async fn list_steps(
    db: &DatabaseConnection,
    case_id: Option<i32>,
) -> AppResult<Vec<step::Model>> {
    match case_id {
        Some(case_id) => db::steps::find_by_case(db, case_id).await,
        None => db::steps::find_all(db).await,
    }
}

pub async fn get_step(db: &DatabaseConnection, id: i32) -> AppResult<step::Model> {
    db::steps::find(db, id).await
}

pub async fn create_step(db: &DatabaseConnection, req: CreateStepRequest) -> AppResult<step::Model> {
    let description = required(&req.description, "Description")?;
    check_order(req.order)?;
    db::cases::find(db, req.case_id)
        .await
        .map_err(reference(db::cases::ENTITY, ReferenceScope::Parent))?;

    let step = db::steps::insert(db, req.order, description, req.case_id).await?;

    info!(step_id = step.id, case_id = step.case_id, "Created step");
    Ok(step)
}

/// Reorder or reword a step. Steps stay with their case.
pub async fn update_step(
    db: &DatabaseConnection,
    id: i32,
    req: UpdateStepRequest,
) -> AppResult<step::Model> {
    let description = required(&req.description, "Description")?;
    check_order(req.order)?;

    let mut step = db::steps::find(db, id).await?;
    step.step_order = req.order;
    step.description = description;
    db::steps::update(db, step).await
}

/// Delete a step. Its expectations are left in place.
pub async fn delete_step(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::steps::delete(db, id).await?;
    info!(step_id = id, "Deleted step");
    Ok(())
}

fn check_order(order: i32) -> AppResult<()> {
    if order < 0 {
        return Err(AppError::invalid("Order must be a non-negative integer"));
    }
    Ok(())
}

pub async fn list_preconditions(
    db: &DatabaseConnection,
    case_id: Option<i32>,
) -> AppResult<Vec<precondition::Model>> {
    match case_id {
        Some(case_id) => db::preconditions::find_by_case(db, case_id).await,
        None => db::preconditions::find_all(db).await,
    }
}

pub async fn get_precondition(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<precondition::Model> {
    db::preconditions::find(db, id).await
}

pub async fn create_precondition(
    db: &DatabaseConnection,
    req: CreatePreconditionRequest,
) -> AppResult<precondition::Model> {
    let description = required(&req.description, "Description")?;
    db::cases::find(db, req.case_id)
        .await
        .map_err(reference(db::cases::ENTITY, ReferenceScope::Parent))?;

    let precondition = db::preconditions::insert(db, description, req.case_id).await?;

    info!(
        precondition_id = precondition.id,
        case_id = precondition.case_id,
        "Created precondition"
    );
    Ok(precondition)
}

pub async fn update_precondition(
    db: &DatabaseConnection,
    id: i32,
    req: DescriptionRequest,
) -> AppResult<precondition::Model> {
    let description = required(&req.description, "Description")?;
    let mut precondition = db::preconditions::find(db, id).await?;
    precondition.description = description;
    db::preconditions::update(db, precondition).await
}

pub async fn delete_precondition(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::preconditions::delete(db, id).await?;
    info!(precondition_id = id, "Deleted precondition");
    Ok(())
}

pub async fn list_expectations(
    db: &DatabaseConnection,
    step_id: Option<i32>,
) -> AppResult<Vec<expectation::Model>> {
    match step_id {
        Some(step_id) => db::expectations::find_by_step(db, step_id).await,
        None => db::expectations::find_all(db).await,
    }
}

pub async fn get_expectation(db: &DatabaseConnection, id: i32) -> AppResult<expectation::Model> {
    db::expectations::find(db, id).await
}

pub async fn create_expectation(
    db: &DatabaseConnection,
    req: CreateExpectationRequest,
) -> AppResult<expectation::Model> {
    let description = required(&req.description, "Description")?;
    db::steps::find(db, req.step_id)
        .await
        .map_err(reference(db::steps::ENTITY, ReferenceScope::Parent))?;

    let expectation = db::expectations::insert(db, description, req.step_id).await?;

    info!(
        expectation_id = expectation.id,
        step_id = expectation.step_id,
        "Created expectation"
    );
    Ok(expectation)
}

pub async fn update_expectation(
    db: &DatabaseConnection,
    id: i32,
    req: DescriptionRequest,
) -> AppResult<expectation::Model> {
    let description = required(&req.description, "Description")?;
    let mut expectation = db::expectations::find(db, id).await?;
    expectation.description = description;
    db::expectations::update(db, expectation).await
}

pub async fn delete_expectation(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::expectations::delete(db, id).await?;
    info!(expectation_id = id, "Deleted expectation");
    Ok(())
}

//! Database queries for test cases.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::test_case::{self, ActiveModel, Entity as TestCase};
use crate::error::AppResult;

pub const ENTITY: &str = "Case";

/// Get a test case by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<test_case::Model> {
    super::find_one::<TestCase, C>(db, ENTITY, id).await
}

/// Get a test case by its case number.
pub async fn find_by_case_number<C: ConnectionTrait>(
    db: &C,
    case_number: i64,
) -> AppResult<Option<test_case::Model>> {
    let row = TestCase::find()
        .filter(test_case::Column::CaseNumber.eq(case_number))
        .one(db)
        .await?;
    Ok(row)
}

/// List all test cases.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<test_case::Model>> {
    let rows = TestCase::find()
        .order_by_asc(test_case::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a new test case.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    case_number: i64,
    name: String,
    description: Option<String>,
) -> AppResult<test_case::Model> {
    let model = ActiveModel {
        id: NotSet,
        case_number: Set(case_number),
        name: Set(name),
        description: Set(description),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored test case.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: test_case::Model,
) -> AppResult<test_case::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        case_number: Set(model.case_number),
        name: Set(model.name),
        description: Set(model.description),
    };
    Ok(active.update(db).await?)
}

/// Delete a test case row by ID. Junction cleanup is the caller's job.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<TestCase, C>(db, test_case::Column::Id, ENTITY, id).await
}

//! Test cases and their platform / related-case sets.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use super::{ensure_distinct, reference, required};
use crate::db;
use crate::entity::test_case;
use crate::error::{AppError, AppResult, ReferenceScope};
use crate::models::{CaseRequest, CreateCaseRequest};

const RELATED_CASE: &str = "Related case";

pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<test_case::Model>> {
    db::cases::find_all(db).await
}

pub async fn get(db: &DatabaseConnection, id: i32) -> AppResult<test_case::Model> {
    db::cases::find(db, id).await
}

/// Create a test case together with its initial platform set.
pub async fn create(
    db: &DatabaseConnection,
    req: CreateCaseRequest,
) -> AppResult<test_case::Model> {
    let name = required(&req.name, "Name")?;
    check_platform_set(&req.platform_ids)?;

    let txn = db.begin().await?;
    ensure_platforms_exist(&txn, &req.platform_ids).await?;
    ensure_case_number_free(&txn, req.case_number, None).await?;

    let case = db::cases::insert(&txn, req.case_number, name, req.description).await?;
    for platform_id in &req.platform_ids {
        db::case_platforms::insert(&txn, case.id, *platform_id).await?;
    }
    txn.commit().await?;

    info!(
        case_id = case.id,
        case_number = case.case_number,
        platforms = req.platform_ids.len(),
        "Created test case"
    );
    Ok(case)
}

/// Overwrite a test case's number, name and description.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    req: CaseRequest,
) -> AppResult<test_case::Model> {
    let name = required(&req.name, "Name")?;

    let txn = db.begin().await?;
    let mut case = db::cases::find(&txn, id).await?;
    ensure_case_number_free(&txn, req.case_number, Some(id)).await?;

    case.case_number = req.case_number;
    case.name = name;
    case.description = req.description;
    let case = db::cases::update(&txn, case).await?;
    txn.commit().await?;

    Ok(case)
}

/// Delete a test case along with its platform and related-case rows.
///
/// Steps, preconditions and run memberships referencing the case are kept.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let txn = db.begin().await?;
    db::cases::find(&txn, id).await?;

    let platform_rows = db::case_platforms::delete_by_case(&txn, id).await?;
    let related_rows = db::related_cases::delete_by_case(&txn, id).await?;
    db::cases::delete(&txn, id).await?;
    txn.commit().await?;

    debug!(
        case_id = id,
        platform_rows, related_rows, "Removed case associations"
    );
    info!(case_id = id, "Deleted test case");
    Ok(())
}

/// Platform ids associated with a case, in insertion order.
pub async fn platforms(db: &DatabaseConnection, id: i32) -> AppResult<Vec<i32>> {
    db::cases::find(db, id).await?;
    let rows = db::case_platforms::find_by_case(db, id).await?;
    Ok(rows.into_iter().map(|row| row.platform_id).collect())
}

/// Replace a case's platform set.
///
/// Every id is validated before the existing set is touched.
pub async fn set_platforms(
    db: &DatabaseConnection,
    id: i32,
    platform_ids: Vec<i32>,
) -> AppResult<Vec<i32>> {
    check_platform_set(&platform_ids)?;

    let txn = db.begin().await?;
    db::cases::find(&txn, id).await?;
    ensure_platforms_exist(&txn, &platform_ids).await?;

    let removed = db::case_platforms::delete_by_case(&txn, id).await?;
    for platform_id in &platform_ids {
        db::case_platforms::insert(&txn, id, *platform_id).await?;
    }
    txn.commit().await?;

    info!(
        case_id = id,
        removed,
        added = platform_ids.len(),
        "Replaced case platforms"
    );
    Ok(platform_ids)
}

/// Ids of the cases a case relates to.
pub async fn related(db: &DatabaseConnection, id: i32) -> AppResult<Vec<i32>> {
    db::cases::find(db, id).await?;
    let rows = db::related_cases::find_by_case(db, id).await?;
    Ok(rows.into_iter().map(|row| row.related_case_id).collect())
}

/// Replace a case's related-case set. An empty set clears it.
pub async fn set_related(
    db: &DatabaseConnection,
    id: i32,
    related_case_ids: Vec<i32>,
) -> AppResult<Vec<i32>> {
    let txn = db.begin().await?;
    db::cases::find(&txn, id).await?;
    if related_case_ids.contains(&id) {
        return Err(AppError::invalid("Case cannot be related to itself"));
    }
    ensure_distinct(&related_case_ids, "related case")?;

    for related_id in &related_case_ids {
        db::cases::find(&txn, *related_id)
            .await
            .map_err(reference(RELATED_CASE, ReferenceScope::Target))?;
    }

    let removed = db::related_cases::delete_by_case(&txn, id).await?;
    for related_id in &related_case_ids {
        db::related_cases::insert(&txn, id, *related_id).await?;
    }
    txn.commit().await?;

    info!(
        case_id = id,
        removed,
        added = related_case_ids.len(),
        "Replaced related cases"
    );
    Ok(related_case_ids)
}

/// Ids of the runs a case has been added to.
pub async fn runs(db: &DatabaseConnection, id: i32) -> AppResult<Vec<i32>> {
    db::cases::find(db, id).await?;
    let rows = db::run_cases::find_by_case(db, id).await?;
    Ok(rows.into_iter().map(|row| row.run_id).collect())
}

fn check_platform_set(platform_ids: &[i32]) -> AppResult<()> {
    if platform_ids.is_empty() {
        return Err(AppError::invalid("At least one platform is required"));
    }
    ensure_distinct(platform_ids, "platform")
}

async fn ensure_platforms_exist<C: ConnectionTrait>(db: &C, platform_ids: &[i32]) -> AppResult<()> {
    for platform_id in platform_ids {
        db::platforms::find(db, *platform_id)
            .await
            .map_err(reference(db::platforms::ENTITY, ReferenceScope::Target))?;
    }
    Ok(())
}

async fn ensure_case_number_free<C: ConnectionTrait>(
    db: &C,
    case_number: i64,
    owner: Option<i32>,
) -> AppResult<()> {
    match db::cases::find_by_case_number(db, case_number).await? {
        Some(existing) if Some(existing.id) != owner => Err(AppError::invalid(format!(
            "Case number already exists: {}",
            case_number
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support;
    use crate::models::{CreatePreconditionRequest, CreateStepRequest};
    use crate::services::steps;

    async fn platform_id(db: &DatabaseConnection, name: &str) -> i32 {
        db::platforms::find_by_name(db, name)
            .await
            .unwrap()
            .expect("seeded platform")
            .id
    }

    async fn new_case(db: &DatabaseConnection, number: i64, platform_ids: Vec<i32>) -> i32 {
        create(
            db,
            CreateCaseRequest {
                case_number: number,
                name: format!("Case {}", number),
                description: None,
                platform_ids,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_create_attaches_platforms() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let ios = platform_id(db, "iOS").await;

        let case = create(
            db,
            CreateCaseRequest {
                case_number: 1,
                name: " Login ".to_string(),
                description: Some("Sign in flow".to_string()),
                platform_ids: vec![ios, linux],
            },
        )
        .await
        .unwrap();

        assert_eq!(case.name, "Login");
        assert_eq!(get(db, case.id).await.unwrap(), case);
        assert_eq!(platforms(db, case.id).await.unwrap(), vec![ios, linux]);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;

        let request = |platform_ids: Vec<i32>| CreateCaseRequest {
            case_number: 1,
            name: "Login".to_string(),
            description: None,
            platform_ids,
        };

        let err = create(db, request(vec![])).await.unwrap_err();
        assert_eq!(err.to_string(), "At least one platform is required");

        let err = create(db, request(vec![linux, 999])).await.unwrap_err();
        assert_eq!(err.to_string(), "Platform not found: 999");
        assert!(list(db).await.unwrap().is_empty());

        let err = create(db, request(vec![linux, linux])).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Duplicate platform id: {}", linux));

        create(db, request(vec![linux])).await.unwrap();
        let err = create(db, request(vec![linux])).await.unwrap_err();
        assert_eq!(err.to_string(), "Case number already exists: 1");
    }

    #[tokio::test]
    async fn test_update_checks_number_against_other_cases() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let first = new_case(db, 1, vec![linux]).await;
        new_case(db, 2, vec![linux]).await;

        let kept = update(
            db,
            first,
            CaseRequest {
                case_number: 1,
                name: "Renamed".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(kept.name, "Renamed");

        let err = update(
            db,
            first,
            CaseRequest {
                case_number: 2,
                name: "Renamed".to_string(),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Case number already exists: 2");

        let err = update(
            db,
            404,
            CaseRequest {
                case_number: 3,
                name: "Ghost".to_string(),
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Case", id: 404 }));
    }

    #[tokio::test]
    async fn test_set_platforms_empty_keeps_existing() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let case = new_case(db, 1, vec![linux]).await;

        let err = set_platforms(db, case, vec![]).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(platforms(db, case).await.unwrap(), vec![linux]);
    }

    #[tokio::test]
    async fn test_set_platforms_missing_target_keeps_existing() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let android = platform_id(db, "Android").await;
        let case = new_case(db, 5, vec![linux]).await;

        let err = set_platforms(db, case, vec![android, 999]).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::ReferenceNotFound {
                scope: ReferenceScope::Target,
                id: 999,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Platform not found: 999");
        assert_eq!(platforms(db, case).await.unwrap(), vec![linux]);
    }

    #[tokio::test]
    async fn test_set_platforms_replaces_in_order() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let android = platform_id(db, "Android").await;
        let windows = platform_id(db, "Windows").await;
        let case = new_case(db, 1, vec![linux]).await;

        let result = set_platforms(db, case, vec![windows, android]).await.unwrap();
        assert_eq!(result, vec![windows, android]);
        assert_eq!(platforms(db, case).await.unwrap(), vec![windows, android]);

        assert!(matches!(
            set_platforms(db, 999, vec![linux]).await,
            Err(AppError::NotFound { entity: "Case", .. })
        ));
    }

    #[tokio::test]
    async fn test_set_related_rejects_self_without_mutation() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let case = new_case(db, 1, vec![linux]).await;
        let other = new_case(db, 2, vec![linux]).await;
        set_related(db, case, vec![other]).await.unwrap();

        let err = set_related(db, case, vec![case]).await.unwrap_err();
        assert_eq!(err.to_string(), "Case cannot be related to itself");

        let err = set_related(db, case, vec![case, case]).await.unwrap_err();
        assert_eq!(err.to_string(), "Case cannot be related to itself");

        let err = set_related(db, case, vec![77, case]).await.unwrap_err();
        assert_eq!(err.to_string(), "Case cannot be related to itself");

        let err = set_related(db, case, vec![other, 77]).await.unwrap_err();
        assert_eq!(err.to_string(), "Related case not found: 77");

        assert_eq!(related(db, case).await.unwrap(), vec![other]);

        set_related(db, case, vec![]).await.unwrap();
        assert!(related(db, case).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_cascades_only_junctions() {
        let pool = test_support::pool().await;
        let db = pool.connection();
        let linux = platform_id(db, "Linux").await;
        let ios = platform_id(db, "iOS").await;
        let case = new_case(db, 1, vec![linux, ios]).await;
        let other = new_case(db, 2, vec![linux]).await;
        set_related(db, case, vec![other]).await.unwrap();

        let step = steps::create_step(
            db,
            CreateStepRequest {
                order: 1,
                description: "Open app".to_string(),
                case_id: case,
            },
        )
        .await
        .unwrap();
        let precondition = steps::create_precondition(
            db,
            CreatePreconditionRequest {
                description: "Logged out".to_string(),
                case_id: case,
            },
        )
        .await
        .unwrap();

        delete(db, case).await.unwrap();

        assert!(matches!(
            get(db, case).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(db::case_platforms::find_by_case(db, case).await.unwrap().is_empty());
        assert!(db::related_cases::find_by_case(db, case).await.unwrap().is_empty());
        assert_eq!(platforms(db, other).await.unwrap(), vec![linux]);

        assert_eq!(steps::get_step(db, step.id).await.unwrap(), step);
        assert_eq!(
            steps::get_precondition(db, precondition.id).await.unwrap(),
            precondition
        );

        assert!(matches!(
            delete(db, case).await,
            Err(AppError::NotFound { entity: "Case", .. })
        ));
    }
}

//! Database queries for case-platform associations.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::entity::case_platform::{self, ActiveModel, Entity as CasePlatform};
use crate::error::AppResult;

/// Associations owned by a case, in insertion order.
pub async fn find_by_case<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
) -> AppResult<Vec<case_platform::Model>> {
    super::find_where::<CasePlatform, C>(
        db,
        case_platform::Column::CaseId,
        case_id,
        case_platform::Column::Id,
    )
    .await
}

/// Associations pointing at a platform.
pub async fn find_by_platform<C: ConnectionTrait>(
    db: &C,
    platform_id: i32,
) -> AppResult<Vec<case_platform::Model>> {
    super::find_where::<CasePlatform, C>(
        db,
        case_platform::Column::PlatformId,
        platform_id,
        case_platform::Column::Id,
    )
    .await
}

/// Insert a new association.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
    platform_id: i32,
) -> AppResult<case_platform::Model> {
    let model = ActiveModel {
        id: NotSet,
        case_id: Set(case_id),
        platform_id: Set(platform_id),
    };
    Ok(model.insert(db).await?)
}

/// Remove every association owned by a case.
pub async fn delete_by_case<C: ConnectionTrait>(db: &C, case_id: i32) -> AppResult<u64> {
    super::delete_where::<CasePlatform, C>(db, case_platform::Column::CaseId, case_id).await
}

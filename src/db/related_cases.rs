//! Database queries for related-case associations.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait};

use crate::entity::related_case::{self, ActiveModel, Entity as RelatedCase};
use crate::error::AppResult;

/// Associations owned by a case, in insertion order.
pub async fn find_by_case<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
) -> AppResult<Vec<related_case::Model>> {
    super::find_where::<RelatedCase, C>(
        db,
        related_case::Column::CaseId,
        case_id,
        related_case::Column::Id,
    )
    .await
}

/// Insert a new association.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    case_id: i32,
    related_case_id: i32,
) -> AppResult<related_case::Model> {
    let model = ActiveModel {
        id: NotSet,
        case_id: Set(case_id),
        related_case_id: Set(related_case_id),
    };
    Ok(model.insert(db).await?)
}

/// Remove every association owned by a case. Rows where the case is only the
/// related side are kept.
pub async fn delete_by_case<C: ConnectionTrait>(db: &C, case_id: i32) -> AppResult<u64> {
    super::delete_where::<RelatedCase, C>(db, related_case::Column::CaseId, case_id).await
}

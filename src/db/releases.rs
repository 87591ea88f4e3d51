//! Database queries for releases.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::release::{self, ActiveModel, Entity as Release};
use crate::error::AppResult;

pub const ENTITY: &str = "Release";

/// Get a release by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<release::Model> {
    super::find_one::<Release, C>(db, ENTITY, id).await
}

/// List all releases.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<release::Model>> {
    let rows = Release::find()
        .order_by_asc(release::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// List releases belonging to a product.
pub async fn find_by_product<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
) -> AppResult<Vec<release::Model>> {
    super::find_where::<Release, C>(
        db,
        release::Column::ProductId,
        product_id,
        release::Column::Id,
    )
    .await
}

/// Insert a new release.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    name: String,
    description: Option<String>,
    product_id: i32,
) -> AppResult<release::Model> {
    let model = ActiveModel {
        id: NotSet,
        name: Set(name),
        description: Set(description),
        product_id: Set(product_id),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored release.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: release::Model,
) -> AppResult<release::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        description: Set(model.description),
        product_id: Set(model.product_id),
    };
    Ok(active.update(db).await?)
}

/// Delete a release by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Release, C>(db, release::Column::Id, ENTITY, id).await
}

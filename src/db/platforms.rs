//! Database queries for platforms.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::platform::{self, ActiveModel, Entity as Platform};
use crate::error::AppResult;

pub const ENTITY: &str = "Platform";

/// Get a platform by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<platform::Model> {
    super::find_one::<Platform, C>(db, ENTITY, id).await
}

/// Get a platform by its unique name.
pub async fn find_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> AppResult<Option<platform::Model>> {
    let row = Platform::find()
        .filter(platform::Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(row)
}

/// List all platforms.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<platform::Model>> {
    let rows = Platform::find()
        .order_by_asc(platform::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a new platform.
pub async fn insert<C: ConnectionTrait>(db: &C, name: String) -> AppResult<platform::Model> {
    let model = ActiveModel {
        id: NotSet,
        name: Set(name),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored platform.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: platform::Model,
) -> AppResult<platform::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
    };
    Ok(active.update(db).await?)
}

/// Delete a platform by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Platform, C>(db, platform::Column::Id, ENTITY, id).await
}

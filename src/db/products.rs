//! Database queries for products.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::product::{self, ActiveModel, Entity as Product};
use crate::error::AppResult;

pub const ENTITY: &str = "Product";

/// Get a product by ID.
pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<product::Model> {
    super::find_one::<Product, C>(db, ENTITY, id).await
}

/// List all products.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<product::Model>> {
    let rows = Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a new product.
pub async fn insert<C: ConnectionTrait>(db: &C, name: String) -> AppResult<product::Model> {
    let model = ActiveModel {
        id: NotSet,
        name: Set(name),
    };
    Ok(model.insert(db).await?)
}

/// Overwrite a stored product.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    model: product::Model,
) -> AppResult<product::Model> {
    let active = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
    };
    Ok(active.update(db).await?)
}

/// Delete a product by ID.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    super::delete_one::<Product, C>(db, product::Column::Id, ENTITY, id).await
}

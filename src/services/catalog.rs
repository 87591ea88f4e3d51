//! Products, releases and platforms.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::info;

use super::{reference, required};
use crate::db;
use crate::entity::{platform, product, release};
use crate::error::{AppError, AppResult, ReferenceScope};
use crate::models::{CreateReleaseRequest, NameRequest, UpdateReleaseRequest};

pub async fn list_products(db: &DatabaseConnection) -> AppResult<Vec<product::Model>> {
    db::products::find_all(db).await
}

pub async fn get_product(db: &DatabaseConnection, id: i32) -> AppResult<product::Model> {
    db::products::find(db, id).await
}

pub async fn create_product(
    db: &DatabaseConnection,
    req: NameRequest,
) -> AppResult<product::Model> {
    let name = required(&req.name, "Name")?;
    let product = db::products::insert(db, name).await?;

    info!(product_id = product.id, "Created product");
    Ok(product)
}

pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    req: NameRequest,
) -> AppResult<product::Model> {
    let name = required(&req.name, "Name")?;
    let mut product = db::products::find(db, id).await?;
    product.name = name;
    db::products::update(db, product).await
}

/// Delete a product. Its releases are left in place.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::products::delete(db, id).await?;
    info!(product_id = id, "Deleted product");
    Ok(())
}

/// List releases, optionally restricted to one product.
pub async fn list_releases(
    db: &DatabaseConnection,
    product_id: Option<i32>,
) -> AppResult<Vec<release::Model>> {
    match product_id {
        Some(product_id) => db::releases::find_by_product(db, product_id).await,
        None => db::releases::find_all(db).await,
    }
}

pub async fn get_release(db: &DatabaseConnection, id: i32) -> AppResult<release::Model> {
    db::releases::find(db, id).await
}

/// Create a release under an existing product.
pub async fn create_release(
    db: &DatabaseConnection,
    req: CreateReleaseRequest,
) -> AppResult<release::Model> {
    let name = required(&req.name, "Name")?;
    db::products::find(db, req.product_id)
        .await
        .map_err(reference(db::products::ENTITY, ReferenceScope::Parent))?;

    let release = db::releases::insert(db, name, req.description, req.product_id).await?;

    info!(
        release_id = release.id,
        product_id = release.product_id,
        "Created release"
    );
    Ok(release)
}

/// Rename a release and overwrite its description.
pub async fn update_release(
    db: &DatabaseConnection,
    id: i32,
    req: UpdateReleaseRequest,
) -> AppResult<release::Model> {
    let name = required(&req.name, "Name")?;
    let mut release = db::releases::find(db, id).await?;
    release.name = name;
    release.description = req.description;
    db::releases::update(db, release).await
}

/// Delete a release. Its runs are left in place.
pub async fn delete_release(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::releases::delete(db, id).await?;
    info!(release_id = id, "Deleted release");
    Ok(())
}

pub async fn list_platforms(db: &DatabaseConnection) -> AppResult<Vec<platform::Model>> {
    db::platforms::find_all(db).await
}

pub async fn get_platform(db: &DatabaseConnection, id: i32) -> AppResult<platform::Model> {
    db::platforms::find(db, id).await
}

/// Create a platform with a name no other platform uses.
pub async fn create_platform(
    db: &DatabaseConnection,
    req: NameRequest,
) -> AppResult<platform::Model> {
    let name = required(&req.name, "Name")?;

    let txn = db.begin().await?;
    if db::platforms::find_by_name(&txn, &name).await?.is_some() {
        return Err(AppError::invalid(format!("Platform already exists: {}", name)));
    }
    let platform = db::platforms::insert(&txn, name).await?;
    txn.commit().await?;

    info!(platform_id = platform.id, name = %platform.name, "Created platform");
    Ok(platform)
}

/// Rename a platform, keeping names unique.
pub async fn update_platform(
    db: &DatabaseConnection,
    id: i32,
    req: NameRequest,
) -> AppResult<platform::Model> {
    let name = required(&req.name, "Name")?;

    let txn = db.begin().await?;
    let mut platform = db::platforms::find(&txn, id).await?;
    if let Some(existing) = db::platforms::find_by_name(&txn, &name).await?
        && existing.id != id
    {
        return Err(AppError::invalid(format!("Platform already exists: {}", name)));
    }
    platform.name = name;
    let platform = db::platforms::update(&txn, platform).await?;
    txn.commit().await?;

    Ok(platform)
}

/// Delete a platform. Case associations naming it are left in place.
pub async fn delete_platform(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    db::platforms::delete(db, id).await?;
    info!(platform_id = id, "Deleted platform");
    Ok(())
}

/// Ids of the cases associated with a platform.
pub async fn platform_cases(db: &DatabaseConnection, id: i32) -> AppResult<Vec<i32>> {
    db::platforms::find(db, id).await?;
    let rows = db::case_platforms::find_by_platform(db, id).await?;
    Ok(rows.into_iter().map(|row| row.case_id).collect())
}

//! Release endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateReleaseRequest, DeletedResponse, ProductFilter, ReleaseListResponse, ReleaseResponse,
    UpdateReleaseRequest,
};
use crate::services::catalog;

/// Configure release routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_releases)
        .service(create_release)
        .service(get_release)
        .service(update_release)
        .service(delete_release);
}

/// List releases, optionally for one product.
///
/// GET /releases?productId=1
#[utoipa::path(
    get,
    path = "/api/v1/releases",
    tag = "Releases",
    params(
        ("productId" = Option<i32>, Query, description = "Only releases of this product")
    ),
    responses(
        (status = 200, description = "List of releases", body = ReleaseListResponse)
    )
)]
#[get("/releases")]
pub async fn list_releases(
    pool: web::Data<DbPool>,
    query: web::Query<ProductFilter>,
) -> AppResult<HttpResponse> {
    let releases = catalog::list_releases(pool.connection(), query.product_id).await?;

    Ok(HttpResponse::Ok().json(ReleaseListResponse {
        releases: releases.into_iter().map(ReleaseResponse::from).collect(),
    }))
}

/// Create a release under a product.
#[utoipa::path(
    post,
    path = "/api/v1/releases",
    tag = "Releases",
    request_body = CreateReleaseRequest,
    responses(
        (status = 201, description = "Release created", body = ReleaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/releases")]
pub async fn create_release(
    pool: web::Data<DbPool>,
    body: web::Json<CreateReleaseRequest>,
) -> AppResult<HttpResponse> {
    let release = catalog::create_release(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ReleaseResponse::from(release)))
}

/// Get a release by ID.
#[utoipa::path(
    get,
    path = "/api/v1/releases/{id}",
    tag = "Releases",
    params(
        ("id" = i32, Path, description = "Release ID")
    ),
    responses(
        (status = 200, description = "Release details", body = ReleaseResponse),
        (status = 404, description = "Release not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/releases/{id}")]
pub async fn get_release(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let release = catalog::get_release(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ReleaseResponse::from(release)))
}

/// Update a release's name and description.
#[utoipa::path(
    put,
    path = "/api/v1/releases/{id}",
    tag = "Releases",
    params(
        ("id" = i32, Path, description = "Release ID")
    ),
    request_body = UpdateReleaseRequest,
    responses(
        (status = 200, description = "Release updated", body = ReleaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Release not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/releases/{id}")]
pub async fn update_release(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateReleaseRequest>,
) -> AppResult<HttpResponse> {
    let release =
        catalog::update_release(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ReleaseResponse::from(release)))
}

/// Delete a release.
#[utoipa::path(
    delete,
    path = "/api/v1/releases/{id}",
    tag = "Releases",
    params(
        ("id" = i32, Path, description = "Release ID")
    ),
    responses(
        (status = 200, description = "Release deleted", body = DeletedResponse),
        (status = 404, description = "Release not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/releases/{id}")]
pub async fn delete_release(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    catalog::delete_release(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

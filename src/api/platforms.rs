//! Platform endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    DeletedResponse, NameRequest, PlatformCasesResponse, PlatformListResponse, PlatformResponse,
};
use crate::services::catalog;

/// Configure platform routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_platforms)
        .service(create_platform)
        .service(get_platform)
        .service(update_platform)
        .service(delete_platform)
        .service(get_platform_cases);
}

/// List all platforms.
#[utoipa::path(
    get,
    path = "/api/v1/platforms",
    tag = "Platforms",
    responses(
        (status = 200, description = "List of platforms", body = PlatformListResponse)
    )
)]
#[get("/platforms")]
pub async fn list_platforms(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let platforms = catalog::list_platforms(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(PlatformListResponse {
        platforms: platforms.into_iter().map(PlatformResponse::from).collect(),
    }))
}

/// Create a platform.
#[utoipa::path(
    post,
    path = "/api/v1/platforms",
    tag = "Platforms",
    request_body = NameRequest,
    responses(
        (status = 201, description = "Platform created", body = PlatformResponse),
        (status = 400, description = "Invalid input or name taken", body = crate::error::ErrorResponse)
    )
)]
#[post("/platforms")]
pub async fn create_platform(
    pool: web::Data<DbPool>,
    body: web::Json<NameRequest>,
) -> AppResult<HttpResponse> {
    let platform = catalog::create_platform(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(PlatformResponse::from(platform)))
}

/// Get a platform by ID.
#[utoipa::path(
    get,
    path = "/api/v1/platforms/{id}",
    tag = "Platforms",
    params(
        ("id" = i32, Path, description = "Platform ID")
    ),
    responses(
        (status = 200, description = "Platform details", body = PlatformResponse),
        (status = 404, description = "Platform not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/platforms/{id}")]
pub async fn get_platform(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let platform = catalog::get_platform(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlatformResponse::from(platform)))
}

/// Rename a platform.
#[utoipa::path(
    put,
    path = "/api/v1/platforms/{id}",
    tag = "Platforms",
    params(
        ("id" = i32, Path, description = "Platform ID")
    ),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Platform updated", body = PlatformResponse),
        (status = 400, description = "Invalid input or name taken", body = crate::error::ErrorResponse),
        (status = 404, description = "Platform not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/platforms/{id}")]
pub async fn update_platform(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<NameRequest>,
) -> AppResult<HttpResponse> {
    let platform =
        catalog::update_platform(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlatformResponse::from(platform)))
}

/// Delete a platform.
#[utoipa::path(
    delete,
    path = "/api/v1/platforms/{id}",
    tag = "Platforms",
    params(
        ("id" = i32, Path, description = "Platform ID")
    ),
    responses(
        (status = 200, description = "Platform deleted", body = DeletedResponse),
        (status = 404, description = "Platform not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/platforms/{id}")]
pub async fn delete_platform(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    catalog::delete_platform(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

/// List the cases that run on a platform.
#[utoipa::path(
    get,
    path = "/api/v1/platforms/{id}/cases",
    tag = "Platforms",
    params(
        ("id" = i32, Path, description = "Platform ID")
    ),
    responses(
        (status = 200, description = "Case ids", body = PlatformCasesResponse),
        (status = 404, description = "Platform not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/platforms/{id}/cases")]
pub async fn get_platform_cases(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let cases = catalog::platform_cases(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlatformCasesResponse { cases }))
}

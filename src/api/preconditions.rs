//! Precondition endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CaseFilter, CreatePreconditionRequest, DeletedResponse, DescriptionRequest,
    PreconditionListResponse, PreconditionResponse,
};
use crate::services::steps;

/// Configure precondition routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_preconditions)
        .service(create_precondition)
        .service(get_precondition)
        .service(update_precondition)
        .service(delete_precondition);
}

/// List preconditions, optionally for one case.
#[utoipa::path(
    get,
    path = "/api/v1/preconditions",
    tag = "Preconditions",
    params(
        ("caseId" = Option<i32>, Query, description = "Only preconditions of this test case")
    ),
    responses(
        (status = 200, description = "List of preconditions", body = PreconditionListResponse)
    )
)]
#[get("/preconditions")]
pub async fn list_preconditions(
    pool: web::Data<DbPool>,
    query: web::Query<CaseFilter>,
) -> AppResult<HttpResponse> {
    let items = steps::list_preconditions(pool.connection(), query.case_id).await?;

    Ok(HttpResponse::Ok().json(PreconditionListResponse {
        preconditions: items.into_iter().map(PreconditionResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/preconditions",
    tag = "Preconditions",
    request_body = CreatePreconditionRequest,
    responses(
        (status = 201, description = "Precondition created", body = PreconditionResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/preconditions")]
pub async fn create_precondition(
    pool: web::Data<DbPool>,
    body: web::Json<CreatePreconditionRequest>,
) -> AppResult<HttpResponse> {
    let precondition = steps::create_precondition(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(PreconditionResponse::from(precondition)))
}

#[utoipa::path(
    get,
    path = "/api/v1/preconditions/{id}",
    tag = "Preconditions",
    params(
        ("id" = i32, Path, description = "Precondition ID")
    ),
    responses(
        (status = 200, description = "Precondition details", body = PreconditionResponse),
        (status = 404, description = "Precondition not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/preconditions/{id}")]
pub async fn get_precondition(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let precondition = steps::get_precondition(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PreconditionResponse::from(precondition)))
}

#[utoipa::path(
    put,
    path = "/api/v1/preconditions/{id}",
    tag = "Preconditions",
    params(
        ("id" = i32, Path, description = "Precondition ID")
    ),
    request_body = DescriptionRequest,
    responses(
        (status = 200, description = "Precondition updated", body = PreconditionResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Precondition not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/preconditions/{id}")]
pub async fn update_precondition(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<DescriptionRequest>,
) -> AppResult<HttpResponse> {
    let precondition =
        steps::update_precondition(pool.connection(), path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(PreconditionResponse::from(precondition)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/preconditions/{id}",
    tag = "Preconditions",
    params(
        ("id" = i32, Path, description = "Precondition ID")
    ),
    responses(
        (status = 200, description = "Precondition deleted", body = DeletedResponse),
        (status = 404, description = "Precondition not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/preconditions/{id}")]
pub async fn delete_precondition(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    steps::delete_precondition(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

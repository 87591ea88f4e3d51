//! Expectation endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateExpectationRequest, DeletedResponse, DescriptionRequest, ExpectationListResponse,
    ExpectationResponse, StepFilter,
};
use crate::services::steps;

/// Configure expectation routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_expectations)
        .service(create_expectation)
        .service(get_expectation)
        .service(update_expectation)
        .service(delete_expectation);
}

/// List expectations, optionally for one step.
#[utoipa::path(
    get,
    path = "/api/v1/expectations",
    tag = "Expectations",
    params(
        ("stepId" = Option<i32>, Query, description = "Only expectations of this step")
    ),
    responses(
        (status = 200, description = "List of expectations", body = ExpectationListResponse)
    )
)]
#[get("/expectations")]
pub async fn list_expectations(
    pool: web::Data<DbPool>,
    query: web::Query<StepFilter>,
) -> AppResult<HttpResponse> {
    let items = steps::list_expectations(pool.connection(), query.step_id).await?;

    Ok(HttpResponse::Ok().json(ExpectationListResponse {
        expectations: items.into_iter().map(ExpectationResponse::from).collect(),
    }))
}

/// Create an expectation under a step.
#[utoipa::path(
    post,
    path = "/api/v1/expectations",
    tag = "Expectations",
    request_body = CreateExpectationRequest,
    responses(
        (status = 201, description = "Expectation created", body = ExpectationResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Step not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/expectations")]
pub async fn create_expectation(
    pool: web::Data<DbPool>,
    body: web::Json<CreateExpectationRequest>,
) -> AppResult<HttpResponse> {
    let expectation = steps::create_expectation(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ExpectationResponse::from(expectation)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expectations/{id}",
    tag = "Expectations",
    params(
        ("id" = i32, Path, description = "Expectation ID")
    ),
    responses(
        (status = 200, description = "Expectation details", body = ExpectationResponse),
        (status = 404, description = "Expectation not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/expectations/{id}")]
pub async fn get_expectation(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let expectation = steps::get_expectation(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ExpectationResponse::from(expectation)))
}

#[utoipa::path(
    put,
    path = "/api/v1/expectations/{id}",
    tag = "Expectations",
    params(
        ("id" = i32, Path, description = "Expectation ID")
    ),
    request_body = DescriptionRequest,
    responses(
        (status = 200, description = "Expectation updated", body = ExpectationResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Expectation not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/expectations/{id}")]
pub async fn update_expectation(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<DescriptionRequest>,
) -> AppResult<HttpResponse> {
    let expectation =
        steps::update_expectation(pool.connection(), path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(ExpectationResponse::from(expectation)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expectations/{id}",
    tag = "Expectations",
    params(
        ("id" = i32, Path, description = "Expectation ID")
    ),
    responses(
        (status = 200, description = "Expectation deleted", body = DeletedResponse),
        (status = 404, description = "Expectation not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/expectations/{id}")]
pub async fn delete_expectation(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    steps::delete_expectation(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

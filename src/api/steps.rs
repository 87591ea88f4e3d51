//! Step endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CaseFilter, CreateStepRequest, DeletedResponse, StepListResponse, StepResponse,
    UpdateStepRequest,
};
use crate::services::steps;

/// Configure step routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_steps)
        .service(create_step)
        .service(get_step)
        .service(update_step)
        .service(delete_step);
}

/// List steps, optionally for one case in step order.
///
/// GET /steps?caseId=1
#[utoipa::path(
    get,
    path = "/api/v1/steps",
    tag = "Steps",
    params(
        ("caseId" = Option<i32>, Query, description = "Only steps of this test case")
    ),
    responses(
        (status = 200, description = "List of steps", body = StepListResponse)
    )
)]
#[get("/steps")]
pub async fn list_steps(
    pool: web::Data<DbPool>,
    query: web::Query<CaseFilter>,
) -> AppResult<HttpResponse> {
    let items = steps::list_steps(pool.connection(), query.case_id).await?;

    Ok(HttpResponse::Ok().json(StepListResponse {
        steps: items.into_iter().map(StepResponse::from).collect(),
    }))
}

/// Create a step under a test case.
#[utoipa::path(
    post,
    path = "/api/v1/steps",
    tag = "Steps",
    request_body = CreateStepRequest,
    responses(
        (status = 201, description = "Step created", body = StepResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/steps")]
pub async fn create_step(
    pool: web::Data<DbPool>,
    body: web::Json<CreateStepRequest>,
) -> AppResult<HttpResponse> {
    let step = steps::create_step(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(StepResponse::from(step)))
}

/// Get a step by ID.
#[utoipa::path(
    get,
    path = "/api/v1/steps/{id}",
    tag = "Steps",
    params(
        ("id" = i32, Path, description = "Step ID")
    ),
    responses(
        (status = 200, description = "Step details", body = StepResponse),
        (status = 404, description = "Step not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/steps/{id}")]
pub async fn get_step(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let step = steps::get_step(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(StepResponse::from(step)))
}

/// Update a step's order and description.
#[utoipa::path(
    put,
    path = "/api/v1/steps/{id}",
    tag = "Steps",
    params(
        ("id" = i32, Path, description = "Step ID")
    ),
    request_body = UpdateStepRequest,
    responses(
        (status = 200, description = "Step updated", body = StepResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Step not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/steps/{id}")]
pub async fn update_step(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateStepRequest>,
) -> AppResult<HttpResponse> {
    let step = steps::update_step(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(StepResponse::from(step)))
}

/// Delete a step.
#[utoipa::path(
    delete,
    path = "/api/v1/steps/{id}",
    tag = "Steps",
    params(
        ("id" = i32, Path, description = "Step ID")
    ),
    responses(
        (status = 200, description = "Step deleted", body = DeletedResponse),
        (status = 404, description = "Step not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/steps/{id}")]
pub async fn delete_step(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    steps::delete_step(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

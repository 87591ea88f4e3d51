//! Test run endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    AddRunCaseRequest, AddedResponse, CreateRunRequest, DeletedResponse, ReleaseFilter,
    RunCasesResponse, RunListResponse, RunResponse, UpdateRunRequest,
};
use crate::services::runs;

/// Configure run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_runs)
        .service(create_run)
        .service(get_run)
        .service(update_run)
        .service(delete_run)
        .service(get_run_cases)
        .service(add_run_case);
}

/// List runs, optionally for one release.
///
/// GET /runs?releaseId=1
#[utoipa::path(
    get,
    path = "/api/v1/runs",
    tag = "Runs",
    params(
        ("releaseId" = Option<i32>, Query, description = "Only runs of this release")
    ),
    responses(
        (status = 200, description = "List of runs", body = RunListResponse)
    )
)]
#[get("/runs")]
pub async fn list_runs(
    pool: web::Data<DbPool>,
    query: web::Query<ReleaseFilter>,
) -> AppResult<HttpResponse> {
    let items = runs::list(pool.connection(), query.release_id).await?;

    Ok(HttpResponse::Ok().json(RunListResponse {
        runs: items.into_iter().map(RunResponse::from).collect(),
    }))
}

/// Create a run under a release.
#[utoipa::path(
    post,
    path = "/api/v1/runs",
    tag = "Runs",
    request_body = CreateRunRequest,
    responses(
        (status = 201, description = "Run created", body = RunResponse),
        (status = 400, description = "Invalid input or datetime", body = crate::error::ErrorResponse),
        (status = 404, description = "Release not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/runs")]
pub async fn create_run(
    pool: web::Data<DbPool>,
    body: web::Json<CreateRunRequest>,
) -> AppResult<HttpResponse> {
    let run = runs::create(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(RunResponse::from(run)))
}

/// Get a run by ID.
#[utoipa::path(
    get,
    path = "/api/v1/runs/{id}",
    tag = "Runs",
    params(
        ("id" = i32, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "Run details", body = RunResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/runs/{id}")]
pub async fn get_run(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let run = runs::get(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RunResponse::from(run)))
}

/// Update a run. Omitted `start`/`end` keep their stored values.
#[utoipa::path(
    put,
    path = "/api/v1/runs/{id}",
    tag = "Runs",
    params(
        ("id" = i32, Path, description = "Run ID")
    ),
    request_body = UpdateRunRequest,
    responses(
        (status = 200, description = "Run updated", body = RunResponse),
        (status = 400, description = "Invalid input or datetime", body = crate::error::ErrorResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/runs/{id}")]
pub async fn update_run(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateRunRequest>,
) -> AppResult<HttpResponse> {
    let run = runs::update(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RunResponse::from(run)))
}

/// Delete a run and its case memberships.
#[utoipa::path(
    delete,
    path = "/api/v1/runs/{id}",
    tag = "Runs",
    params(
        ("id" = i32, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "Run deleted", body = DeletedResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/runs/{id}")]
pub async fn delete_run(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    runs::delete(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

/// Get the case ids in a run.
#[utoipa::path(
    get,
    path = "/api/v1/runs/{id}/cases",
    tag = "Runs",
    params(
        ("id" = i32, Path, description = "Run ID")
    ),
    responses(
        (status = 200, description = "Case ids", body = RunCasesResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/runs/{id}/cases")]
pub async fn get_run_cases(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let cases = runs::cases(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RunCasesResponse { cases }))
}

/// Add a test case to a run.
#[utoipa::path(
    post,
    path = "/api/v1/runs/{id}/cases",
    tag = "Runs",
    params(
        ("id" = i32, Path, description = "Run ID")
    ),
    request_body = AddRunCaseRequest,
    responses(
        (status = 201, description = "Case added", body = AddedResponse),
        (status = 400, description = "Case already in run", body = crate::error::ErrorResponse),
        (status = 404, description = "Run or case not found", body = crate::error::ErrorResponse)
    )
)]
#[post("/runs/{id}/cases")]
pub async fn add_run_case(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<AddRunCaseRequest>,
) -> AppResult<HttpResponse> {
    runs::add_case(pool.connection(), path.into_inner(), body.case_id).await?;
    Ok(HttpResponse::Created().json(AddedResponse { added: true }))
}

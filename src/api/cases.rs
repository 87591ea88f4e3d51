//! Test case endpoints, including the platform and related-case sets.

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CaseListResponse, CaseRequest, CaseResponse, CaseRunsResponse, CreateCaseRequest,
    DeletedResponse, PlatformsResponse, RelatedCasesResponse, SetPlatformsRequest,
    SetRelatedRequest,
};
use crate::services::cases;

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_cases)
        .service(create_case)
        .service(get_case)
        .service(update_case)
        .service(delete_case)
        .service(get_case_platforms)
        .service(set_case_platforms)
        .service(get_related_cases)
        .service(set_related_cases)
        .service(get_case_runs);
}

/// List all test cases.
#[utoipa::path(
    get,
    path = "/api/v1/cases",
    tag = "Cases",
    responses(
        (status = 200, description = "List of test cases", body = CaseListResponse)
    )
)]
#[get("/cases")]
pub async fn list_cases(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let items = cases::list(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(CaseListResponse {
        cases: items.into_iter().map(CaseResponse::from).collect(),
    }))
}

/// Create a test case with at least one platform.
#[utoipa::path(
    post,
    path = "/api/v1/cases",
    tag = "Cases",
    request_body = CreateCaseRequest,
    responses(
        (status = 201, description = "Test case created", body = CaseResponse),
        (status = 400, description = "Invalid input or unknown platform", body = crate::error::ErrorResponse)
    )
)]
#[post("/cases")]
pub async fn create_case(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCaseRequest>,
) -> AppResult<HttpResponse> {
    let case = cases::create(pool.connection(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(CaseResponse::from(case)))
}

/// Get a test case by ID.
#[utoipa::path(
    get,
    path = "/api/v1/cases/{id}",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Test case details", body = CaseResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/cases/{id}")]
pub async fn get_case(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let case = cases::get(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CaseResponse::from(case)))
}

/// Update a test case.
#[utoipa::path(
    put,
    path = "/api/v1/cases/{id}",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    request_body = CaseRequest,
    responses(
        (status = 200, description = "Test case updated", body = CaseResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/cases/{id}")]
pub async fn update_case(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<CaseRequest>,
) -> AppResult<HttpResponse> {
    let case = cases::update(pool.connection(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CaseResponse::from(case)))
}

/// Delete a test case and its platform and related-case associations.
#[utoipa::path(
    delete,
    path = "/api/v1/cases/{id}",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Test case deleted", body = DeletedResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/cases/{id}")]
pub async fn delete_case(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    cases::delete(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new()))
}

/// Get the platform ids of a test case.
#[utoipa::path(
    get,
    path = "/api/v1/cases/{id}/platforms",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Platform ids", body = PlatformsResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/cases/{id}/platforms")]
pub async fn get_case_platforms(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let platforms = cases::platforms(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PlatformsResponse { platforms }))
}

/// Replace the platform set of a test case.
#[utoipa::path(
    put,
    path = "/api/v1/cases/{id}/platforms",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    request_body = SetPlatformsRequest,
    responses(
        (status = 200, description = "Platform set replaced", body = PlatformsResponse),
        (status = 400, description = "Empty set or unknown platform", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/cases/{id}/platforms")]
pub async fn set_case_platforms(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<SetPlatformsRequest>,
) -> AppResult<HttpResponse> {
    let platforms = cases::set_platforms(
        pool.connection(),
        path.into_inner(),
        body.into_inner().platform_ids,
    )
    .await?;
    Ok(HttpResponse::Ok().json(PlatformsResponse { platforms }))
}

/// Get the ids of cases related to a test case.
#[utoipa::path(
    get,
    path = "/api/v1/cases/{id}/related",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Related case ids", body = RelatedCasesResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/cases/{id}/related")]
pub async fn get_related_cases(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let related_cases = cases::related(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RelatedCasesResponse { related_cases }))
}

/// Replace the related-case set of a test case.
#[utoipa::path(
    put,
    path = "/api/v1/cases/{id}/related",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    request_body = SetRelatedRequest,
    responses(
        (status = 200, description = "Related set replaced", body = RelatedCasesResponse),
        (status = 400, description = "Self reference or unknown case", body = crate::error::ErrorResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/cases/{id}/related")]
pub async fn set_related_cases(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<SetRelatedRequest>,
) -> AppResult<HttpResponse> {
    let related_cases = cases::set_related(
        pool.connection(),
        path.into_inner(),
        body.into_inner().related_case_ids,
    )
    .await?;
    Ok(HttpResponse::Ok().json(RelatedCasesResponse { related_cases }))
}

/// Get the ids of runs that include a test case.
#[utoipa::path(
    get,
    path = "/api/v1/cases/{id}/runs",
    tag = "Cases",
    params(
        ("id" = i32, Path, description = "Test case ID")
    ),
    responses(
        (status = 200, description = "Run ids", body = CaseRunsResponse),
        (status = 404, description = "Case not found", body = crate::error::ErrorResponse)
    )
)]
#[get("/cases/{id}/runs")]
pub async fn get_case_runs(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let runs = cases::runs(pool.connection(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CaseRunsResponse { runs }))
}

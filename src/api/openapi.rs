//! OpenAPI documentation configuration.

use actix_web::{HttpResponse, get, web};
use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Test Case Manager",
        version = "0.1.0",
        description = "API server for managing products, releases, test cases, steps and test runs"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Catalog endpoints
        api::products::list_products,
        api::products::create_product,
        api::products::get_product,
        api::products::update_product,
        api::products::delete_product,
        api::releases::list_releases,
        api::releases::create_release,
        api::releases::get_release,
        api::releases::update_release,
        api::releases::delete_release,
        api::platforms::list_platforms,
        api::platforms::create_platform,
        api::platforms::get_platform,
        api::platforms::update_platform,
        api::platforms::delete_platform,
        api::platforms::get_platform_cases,
        // Case endpoints
        api::cases::list_cases,
        api::cases::create_case,
        api::cases::get_case,
        api::cases::update_case,
        api::cases::delete_case,
        api::cases::get_case_platforms,
        api::cases::set_case_platforms,
        api::cases::get_related_cases,
        api::cases::set_related_cases,
        api::cases::get_case_runs,
        api::steps::list_steps,
        api::steps::create_step,
        api::steps::get_step,
        api::steps::update_step,
        api::steps::delete_step,
        api::preconditions::list_preconditions,
        api::preconditions::create_precondition,
        api::preconditions::get_precondition,
        api::preconditions::update_precondition,
        api::preconditions::delete_precondition,
        api::expectations::list_expectations,
        api::expectations::create_expectation,
        api::expectations::get_expectation,
        api::expectations::update_expectation,
        api::expectations::delete_expectation,
        // Run endpoints
        api::runs::list_runs,
        api::runs::create_run,
        api::runs::get_run,
        api::runs::update_run,
        api::runs::delete_run,
        api::runs::get_run_cases,
        api::runs::add_run_case,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            models::DeletedResponse,
            models::AddedResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Catalog
            models::NameRequest,
            models::ProductResponse,
            models::ProductListResponse,
            models::CreateReleaseRequest,
            models::UpdateReleaseRequest,
            models::ReleaseResponse,
            models::ReleaseListResponse,
            models::PlatformResponse,
            models::PlatformListResponse,
            models::PlatformCasesResponse,
            // Cases
            models::CreateCaseRequest,
            models::CaseRequest,
            models::CaseResponse,
            models::CaseListResponse,
            models::SetPlatformsRequest,
            models::SetRelatedRequest,
            models::PlatformsResponse,
            models::RelatedCasesResponse,
            models::CaseRunsResponse,
            models::CreateStepRequest,
            models::UpdateStepRequest,
            models::StepResponse,
            models::StepListResponse,
            models::DescriptionRequest,
            models::CreatePreconditionRequest,
            models::PreconditionResponse,
            models::PreconditionListResponse,
            models::CreateExpectationRequest,
            models::ExpectationResponse,
            models::ExpectationListResponse,
            // Runs
            models::CreateRunRequest,
            models::UpdateRunRequest,
            models::RunResponse,
            models::RunListResponse,
            models::AddRunCaseRequest,
            models::RunCasesResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Product management"),
        (name = "Releases", description = "Releases of a product"),
        (name = "Platforms", description = "Platforms test cases run on"),
        (name = "Cases", description = "Test cases and their relations"),
        (name = "Steps", description = "Ordered steps of a test case"),
        (name = "Preconditions", description = "Preconditions of a test case"),
        (name = "Expectations", description = "Expected outcomes of a step"),
        (name = "Runs", description = "Test runs and their cases")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
#[get("/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Configure OpenAPI routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_relation_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/cases/{id}/platforms"));
        assert!(paths.contains_key("/api/v1/cases/{id}/related"));
        assert!(paths.contains_key("/api/v1/runs/{id}/cases"));
        assert!(paths.contains_key("/api/v1/platforms/{id}/cases"));
    }
}

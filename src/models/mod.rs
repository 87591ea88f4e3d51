//! Request and response models for the test case manager API.
//!
//! Response types are the external projection of stored entities: every key is
//! always present, optional values serialize as `null`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod case;
pub mod catalog;
pub mod run;
pub mod step;

// Re-export commonly used types
pub use case::{
    CaseListResponse, CaseRequest, CaseResponse, CaseRunsResponse, CreateCaseRequest,
    PlatformsResponse, RelatedCasesResponse, SetPlatformsRequest, SetRelatedRequest,
};
pub use catalog::{
    CreateReleaseRequest, NameRequest, PlatformCasesResponse, PlatformListResponse,
    PlatformResponse, ProductListResponse, ProductResponse, ReleaseListResponse,
    ReleaseResponse, UpdateReleaseRequest,
};
pub use run::{
    AddRunCaseRequest, CreateRunRequest, RunCasesResponse, RunListResponse, RunResponse,
    UpdateRunRequest,
};
pub use step::{
    CreateExpectationRequest, CreatePreconditionRequest, CreateStepRequest, DescriptionRequest,
    ExpectationListResponse, ExpectationResponse, PreconditionListResponse,
    PreconditionResponse, StepListResponse, StepResponse, UpdateStepRequest,
};

/// Response for delete operations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: bool,
}

impl DeletedResponse {
    pub fn new() -> Self {
        DeletedResponse { deleted: true }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response for adding a member to a relation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddedResponse {
    pub added: bool,
}

/// Optional `productId` filter for release listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub product_id: Option<i32>,
}

/// Optional `releaseId` filter for run listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseFilter {
    pub release_id: Option<i32>,
}

/// Optional `caseId` filter for step and precondition listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFilter {
    pub case_id: Option<i32>,
}

/// Optional `stepId` filter for expectation listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFilter {
    pub step_id: Option<i32>,
}

//! Test cases and their relation sets.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::test_case;

/// Body for creating a test case.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub case_number: i64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    /// At least one platform is required.
    #[serde(default)]
    pub platform_ids: Vec<i32>,
}

/// Body for updating a test case.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseRequest {
    pub case_number: i64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

/// Test case projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponse {
    pub id: i32,
    pub case_number: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<test_case::Model> for CaseResponse {
    fn from(m: test_case::Model) -> Self {
        CaseResponse {
            id: m.id,
            case_number: m.case_number,
            name: m.name,
            description: m.description,
        }
    }
}

/// Response for test case list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CaseListResponse {
    pub cases: Vec<CaseResponse>,
}

/// Body for replacing a case's platform set.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPlatformsRequest {
    #[serde(default)]
    pub platform_ids: Vec<i32>,
}

/// Body for replacing a case's related-case set.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetRelatedRequest {
    #[serde(default)]
    pub related_case_ids: Vec<i32>,
}

/// Platform ids associated with a case.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlatformsResponse {
    pub platforms: Vec<i32>,
}

/// Case ids related to a case.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCasesResponse {
    pub related_cases: Vec<i32>,
}

/// Run ids a case has been added to.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CaseRunsResponse {
    pub runs: Vec<i32>,
}

//! Steps, preconditions and expectations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{expectation, precondition, step};

/// Body for creating a step.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStepRequest {
    pub order: i32,
    #[serde(default)]
    pub description: String,
    pub case_id: i32,
}

/// Body for updating a step. Steps cannot move between cases.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateStepRequest {
    pub order: i32,
    #[serde(default)]
    pub description: String,
}

/// Step projection. `order` is stored as `step_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub id: i32,
    pub order: i32,
    pub description: String,
    pub case_id: i32,
}

impl From<step::Model> for StepResponse {
    fn from(m: step::Model) -> Self {
        StepResponse {
            id: m.id,
            order: m.step_order,
            description: m.description,
            case_id: m.case_id,
        }
    }
}

/// Response for step list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepListResponse {
    pub steps: Vec<StepResponse>,
}

/// Body for updating a precondition or expectation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DescriptionRequest {
    #[serde(default)]
    pub description: String,
}

/// Body for creating a precondition.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePreconditionRequest {
    #[serde(default)]
    pub description: String,
    pub case_id: i32,
}

/// Precondition projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreconditionResponse {
    pub id: i32,
    pub description: String,
    pub case_id: i32,
}

impl From<precondition::Model> for PreconditionResponse {
    fn from(m: precondition::Model) -> Self {
        PreconditionResponse {
            id: m.id,
            description: m.description,
            case_id: m.case_id,
        }
    }
}

/// Response for precondition list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreconditionListResponse {
    pub preconditions: Vec<PreconditionResponse>,
}

/// Body for creating an expectation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpectationRequest {
    #[serde(default)]
    pub description: String,
    pub step_id: i32,
}

/// Expectation projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpectationResponse {
    pub id: i32,
    pub description: String,
    pub step_id: i32,
}

impl From<expectation::Model> for ExpectationResponse {
    fn from(m: expectation::Model) -> Self {
        ExpectationResponse {
            id: m.id,
            description: m.description,
            step_id: m.step_id,
        }
    }
}

/// Response for expectation list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExpectationListResponse {
    pub expectations: Vec<ExpectationResponse>,
}

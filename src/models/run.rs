//! Test runs and the cases attached to them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::run;

/// Body for creating a run. Timestamps are ISO 8601 strings.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunRequest {
    #[serde(default)]
    pub name: String,
    pub release_id: i32,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Body for updating a run. Omitted timestamps keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRunRequest {
    #[serde(default)]
    pub name: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Run projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub id: i32,
    pub name: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub release_id: i32,
}

/// Render a stored instant as an ISO 8601 string with an explicit offset.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

impl From<run::Model> for RunResponse {
    fn from(m: run::Model) -> Self {
        RunResponse {
            id: m.id,
            name: m.name,
            start: m.start.as_ref().map(format_timestamp),
            end: m.end.as_ref().map(format_timestamp),
            release_id: m.release_id,
        }
    }
}

/// Response for run list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunListResponse {
    pub runs: Vec<RunResponse>,
}

/// Body for adding a case to a run.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRunCaseRequest {
    pub case_id: i32,
}

/// Case ids attached to a run.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RunCasesResponse {
    pub cases: Vec<i32>,
}

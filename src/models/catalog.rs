//! Products, releases and platforms.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{platform, product, release};

/// Body for creating or renaming a product or platform.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NameRequest {
    #[serde(default)]
    pub name: String,
}

/// Product projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
}

impl From<product::Model> for ProductResponse {
    fn from(m: product::Model) -> Self {
        ProductResponse {
            id: m.id,
            name: m.name,
        }
    }
}

/// Response for product list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

/// Body for creating a release.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReleaseRequest {
    #[serde(default)]
    pub name: String,
    pub product_id: i32,
    pub description: Option<String>,
}

/// Body for updating a release. The owning product cannot change.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateReleaseRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

/// Release projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub product_id: i32,
}

impl From<release::Model> for ReleaseResponse {
    fn from(m: release::Model) -> Self {
        ReleaseResponse {
            id: m.id,
            name: m.name,
            description: m.description,
            product_id: m.product_id,
        }
    }
}

/// Response for release list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReleaseListResponse {
    pub releases: Vec<ReleaseResponse>,
}

/// Platform projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformResponse {
    pub id: i32,
    pub name: String,
}

impl From<platform::Model> for PlatformResponse {
    fn from(m: platform::Model) -> Self {
        PlatformResponse {
            id: m.id,
            name: m.name,
        }
    }
}

/// Response for platform list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlatformListResponse {
    pub platforms: Vec<PlatformResponse>,
}

/// Ids of the cases associated with a platform.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlatformCasesResponse {
    pub cases: Vec<i32>,
}

//! DTOs for the link management endpoints.

use serde::Deserialize;

use crate::domain::entities::LinkPatch;

/// Request body for `POST /api/urls`.
///
/// Both fields are optional at the parsing stage so that a missing
/// `originalUrl` is reported as a missing field rather than a parse error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub custom_code: Option<String>,
}

/// Request body for `PUT /api/urls/{code}`.
///
/// Absent or empty fields leave the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub original_url: Option<String>,
    #[serde(default)]
    pub custom_code: Option<String>,
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(req: UpdateLinkRequest) -> Self {
        LinkPatch {
            original_url: req.original_url,
            custom_code: req.custom_code,
        }
    }
}

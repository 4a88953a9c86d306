//! Platform listing endpoint.

use axum::Json;

use crate::catalog;
use crate::types::PlatformList;

/// List the platforms a store can be deployed to
pub async fn platforms() -> Json<PlatformList> {
    Json(PlatformList {
        platforms: catalog::fallback_platforms(),
    })
}

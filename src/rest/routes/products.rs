//! Product generation endpoint, answered from the offline catalog.

use axum::Json;

use crate::catalog;
use crate::types::{ProductGenerationRequest, ProductGenerationResponse};

pub async fn generate(
    Json(request): Json<ProductGenerationRequest>,
) -> Json<ProductGenerationResponse> {
    let products = catalog::generate_mock_products(&request.categories)
        .into_iter()
        .take(request.count)
        .collect();

    Json(ProductGenerationResponse { products })
}

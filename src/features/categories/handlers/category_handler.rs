use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::ListCategoriesResponseDto;
use crate::features::categories::services::CategoryService;

/// List all categories
///
/// Returns the category labels; responds 404 when there are none.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = ListCategoriesResponseDto),
        (status = 404, description = "No categories", body = crate::shared::types::ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ListCategoriesResponseDto>> {
    let labels = service.require_labels().await?;
    Ok(Json(ListCategoriesResponseDto::new(labels)))
}

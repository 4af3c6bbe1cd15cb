use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for a single category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub label: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            label: c.label,
        }
    }
}

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListCategoriesResponseDto {
    pub success: bool,
    /// Category labels in id order
    pub categories: Vec<String>,
    pub total_categories: usize,
}

impl ListCategoriesResponseDto {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}

use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// All categories; an empty collection is not an error here
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.repository.list_all().await
    }

    /// Display labels in id order
    pub async fn labels(&self) -> Result<Vec<String>> {
        let categories = self.list().await?;
        Ok(categories.into_iter().map(|c| c.label).collect())
    }

    /// Display labels, failing with NotFound when no category exists
    pub async fn require_labels(&self) -> Result<Vec<String>> {
        let labels = self.labels().await?;
        if labels.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }
        Ok(labels)
    }
}

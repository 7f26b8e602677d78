use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::models::{Category, CategoryStyle, UpdateCategory};
use crate::features::categories::repository::CategoryRepository;
use crate::shared::types::FieldErrors;
use crate::shared::validation::{not_blank, HEX_COLOR_REGEX};

/// Service for category operations
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// List all categories in display order
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.repo.get_all().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            e
        })
    }

    pub async fn get(&self, id: u32) -> Result<Category> {
        self.repo.get_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            e
        })
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.repo.get_by_name(name).await.map_err(|e| {
            tracing::error!("Failed to get category '{}': {:?}", name, e);
            e
        })
    }

    /// Icon and color for a report's category name. Unknown names and
    /// lookup failures both degrade to the fallback style.
    pub async fn style_for(&self, name: &str) -> CategoryStyle {
        match self.repo.get_by_name(name).await {
            Ok(Some(category)) => category.style(),
            Ok(None) => CategoryStyle::fallback(),
            Err(e) => {
                tracing::warn!("Category style lookup failed for '{}': {:?}", name, e);
                CategoryStyle::fallback()
            }
        }
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<Category> {
        dto.validate()
            .map_err(|e| AppError::Validation(FieldErrors::from(e).to_string()))?;

        self.repo.create(dto).await.map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            e
        })
    }

    pub async fn update(&self, id: u32, mut data: UpdateCategory) -> Result<Category> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &data.name {
            if not_blank(name).is_err() {
                errors.insert("name", "Name is required");
            }
        }
        if let Some(color) = &data.color {
            if !HEX_COLOR_REGEX.is_match(color) {
                errors.insert("color", "Color must be a hex value such as #f59e0b");
            }
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors.to_string()));
        }
        data.name = data.name.map(|name| name.trim().to_string());

        self.repo.update(id, data).await.map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            e
        })
    }

    pub async fn delete(&self, id: u32) -> Result<bool> {
        self.repo.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete category {}: {:?}", id, e);
            e
        })
    }
}

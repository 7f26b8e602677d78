mod in_memory;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::models::{Category, UpdateCategory};

pub use in_memory::InMemoryCategoryRepository;

/// Data access for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>>;

    async fn get_by_id(&self, id: u32) -> Result<Category>;

    /// Exact name match; an unknown name is not an error
    async fn get_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn create(&self, data: CreateCategoryDto) -> Result<Category>;

    async fn update(&self, id: u32, data: UpdateCategory) -> Result<Category>;

    async fn delete(&self, id: u32) -> Result<bool>;
}

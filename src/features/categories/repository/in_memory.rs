use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::fixtures;
use crate::core::latency::Latency;
use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::models::{Category, UpdateCategory};
use crate::shared::constants::{
    CATEGORY_DELETE_LATENCY, CATEGORY_READ_LATENCY, CATEGORY_WRITE_LATENCY,
};

use super::CategoryRepository;

/// Process-local category store, kept in insertion order
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
    latency: Latency,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>, latency: Latency) -> Self {
        Self {
            categories: RwLock::new(categories),
            latency,
        }
    }

    pub fn seeded(latency: Latency) -> Result<Self> {
        Ok(Self::new(fixtures::seed_categories()?, latency))
    }
}

fn not_found(id: u32) -> AppError {
    AppError::NotFound(format!("Category {} not found", id))
}

fn name_taken(categories: &[Category], name: &str, except: Option<u32>) -> bool {
    categories
        .iter()
        .any(|c| c.name == name && Some(c.id) != except)
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>> {
        self.latency.wait(CATEGORY_READ_LATENCY).await;
        Ok(self.categories.read().await.clone())
    }

    async fn get_by_id(&self, id: u32) -> Result<Category> {
        self.latency.wait(CATEGORY_READ_LATENCY).await;

        self.categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.latency.wait(CATEGORY_READ_LATENCY).await;

        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn create(&self, data: CreateCategoryDto) -> Result<Category> {
        self.latency.wait(CATEGORY_WRITE_LATENCY).await;

        let mut categories = self.categories.write().await;
        let highest_id = categories.iter().map(|c| c.id).max().unwrap_or(0);
        let id = highest_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("Category id space exhausted".to_string()))?;

        let category = data.into_category(id);
        if name_taken(&categories, &category.name, None) {
            return Err(AppError::BadRequest(format!(
                "Category '{}' already exists",
                category.name
            )));
        }
        categories.push(category.clone());

        tracing::info!("Created category: {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update(&self, id: u32, data: UpdateCategory) -> Result<Category> {
        self.latency.wait(CATEGORY_WRITE_LATENCY).await;

        let mut categories = self.categories.write().await;
        if let Some(name) = &data.name {
            if name_taken(&categories, name, Some(id)) {
                return Err(AppError::BadRequest(format!(
                    "Category '{}' already exists",
                    name
                )));
            }
        }

        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;
        data.apply_to(category);

        tracing::info!("Updated category: {}", id);
        Ok(category.clone())
    }

    async fn delete(&self, id: u32) -> Result<bool> {
        self.latency.wait(CATEGORY_DELETE_LATENCY).await;

        let mut categories = self.categories.write().await;
        let index = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;
        categories.remove(index);

        tracing::info!("Deleted category: {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryCategoryRepository {
        InMemoryCategoryRepository::seeded(Latency::instant()).unwrap()
    }

    fn flood() -> CreateCategoryDto {
        CreateCategoryDto {
            name: "Inondations".into(),
            description: "Rues inondées".into(),
            icon: "Droplet".into(),
            color: "#0ea5e9".into(),
        }
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let repo = store();
        let roads = repo.get_by_name("Routes dégradées").await.unwrap().unwrap();
        assert_eq!(roads.icon, "Construction");
        assert!(repo.get_by_name("routes dégradées").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_appends_with_next_id() {
        let repo = store();
        let created = repo.create(flood()).await.unwrap();
        assert_eq!(created.id, 9);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let repo = store();
        repo.create(flood()).await.unwrap();
        let err = repo.create(flood()).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(repo.get_all().await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = store();
        let updated = repo
            .update(
                8,
                UpdateCategory {
                    description: Some("Divers".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Autres");
        assert_eq!(updated.description, "Divers");

        let err = repo
            .update(
                8,
                UpdateCategory {
                    name: Some("Incendies".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        assert!(repo.delete(8).await.unwrap());
        assert!(matches!(repo.get_by_id(8).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(8).await, Err(AppError::NotFound(_))));
    }
}

use crate::categories::categories_model::{
    Category, CategoryDeletion, CategoryForm, CategoryUpdate, NewCategory,
};
use crate::errors::Result;
use crate::pagination::Page;
use async_trait::async_trait;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_category(&self, category_id: i32) -> Result<Option<Category>>;
    fn count_categories(&self) -> Result<i64>;
    /// Categories in creation order, oldest first.
    fn list_categories(&self, offset: i64, limit: i64) -> Result<Vec<Category>>;
    async fn insert_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category>;
    /// Deletes the category and every expense that references it.
    async fn delete_category(&self, category_id: i32) -> Result<CategoryDeletion>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_category(&self, category_id: i32) -> Result<Category>;
    fn list_categories(&self, page: Option<&str>) -> Result<Page<Category>>;
    async fn create_category(&self, form: CategoryForm) -> Result<Category>;
    async fn update_category(&self, category_id: i32, form: CategoryForm) -> Result<Category>;
    async fn delete_category(&self, category_id: i32) -> Result<CategoryDeletion>;
}

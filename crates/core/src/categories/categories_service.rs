use crate::categories::categories_model::{
    Category, CategoryDeletion, CategoryForm, CategoryUpdate, NewCategory,
};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};
use crate::pagination::{Page, Paginator};
use crate::utils::time_utils::local_today;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { category_repo }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_category(&self, category_id: i32) -> Result<Category> {
        self.category_repo
            .get_category(category_id)?
            .ok_or_else(|| Error::not_found("Category", category_id))
    }

    fn list_categories(&self, page: Option<&str>) -> Result<Page<Category>> {
        Paginator::paginate(
            page,
            || self.category_repo.count_categories(),
            |offset, limit| self.category_repo.list_categories(offset, limit),
        )
    }

    async fn create_category(&self, form: CategoryForm) -> Result<Category> {
        let name = form.validate()?;
        let today = local_today();
        debug!("Creating category '{}'", name);
        self.category_repo
            .insert_category(NewCategory {
                name,
                created_at: today,
                updated_at: today,
            })
            .await
    }

    async fn update_category(&self, category_id: i32, form: CategoryForm) -> Result<Category> {
        let name = form.validate()?;
        debug!("Updating category {}", category_id);
        self.category_repo
            .update_category(CategoryUpdate {
                id: category_id,
                name,
                updated_at: local_today(),
            })
            .await
    }

    async fn delete_category(&self, category_id: i32) -> Result<CategoryDeletion> {
        let deletion = self.category_repo.delete_category(category_id).await?;
        debug!(
            "Deleted category {} and {} dependent expenses",
            deletion.category_id, deletion.expenses_deleted
        );
        Ok(deletion)
    }
}

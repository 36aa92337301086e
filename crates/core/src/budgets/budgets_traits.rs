use crate::budgets::budgets_model::{Budget, BudgetForm, BudgetUpdate, NewBudget};
use crate::errors::Result;
use crate::pagination::Page;
use async_trait::async_trait;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_budget(&self, budget_id: i32) -> Result<Option<Budget>>;
    fn count_budgets(&self) -> Result<i64>;
    fn list_budgets(&self, offset: i64, limit: i64) -> Result<Vec<Budget>>;
    async fn insert_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(&self, budget_update: BudgetUpdate) -> Result<Budget>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budget(&self, budget_id: i32) -> Result<Budget>;
    fn list_budgets(&self, page: Option<&str>) -> Result<Page<Budget>>;
    async fn create_budget(&self, form: BudgetForm) -> Result<Budget>;
    async fn update_budget(&self, budget_id: i32, form: BudgetForm) -> Result<Budget>;
}

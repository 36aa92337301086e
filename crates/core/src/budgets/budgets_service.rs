use crate::budgets::budgets_model::{compute_deadline, Budget, BudgetForm, BudgetUpdate, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Error, Result};
use crate::pagination::{Page, Paginator};
use crate::utils::time_utils::local_today;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
}

impl BudgetService {
    pub fn new(repository: Arc<dyn BudgetRepositoryTrait>) -> Self {
        BudgetService { repository }
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    fn get_budget(&self, budget_id: i32) -> Result<Budget> {
        self.repository
            .get_budget(budget_id)?
            .ok_or_else(|| Error::not_found("Budget", budget_id))
    }

    fn list_budgets(&self, page: Option<&str>) -> Result<Page<Budget>> {
        Paginator::paginate(
            page,
            || self.repository.count_budgets(),
            |offset, limit| self.repository.list_budgets(offset, limit),
        )
    }

    async fn create_budget(&self, form: BudgetForm) -> Result<Budget> {
        let period = form.validate()?;
        let new_budget = NewBudget::starting(local_today(), period);
        debug!(
            "Creating {} budget with deadline {}",
            period, new_budget.deadline
        );
        self.repository.insert_budget(new_budget).await
    }

    // The deadline follows the period, counted from the original creation date.
    async fn update_budget(&self, budget_id: i32, form: BudgetForm) -> Result<Budget> {
        let existing = self.get_budget(budget_id)?;
        let period = form.validate()?;
        self.repository
            .update_budget(BudgetUpdate {
                id: existing.id,
                budget_for: period,
                deadline: compute_deadline(existing.created_at, period),
            })
            .await
    }
}

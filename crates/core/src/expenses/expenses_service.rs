use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::expenses::expenses_model::{Expense, ExpenseForm, PreviousExpenseForm};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::pagination::{Page, Paginator};
use crate::utils::time_utils::local_today;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

pub struct ExpenseService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
    category_repo: Arc<dyn CategoryRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        expense_repo: Arc<dyn ExpenseRepositoryTrait>,
        category_repo: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            expense_repo,
            category_repo,
        }
    }

    fn category_exists(&self, category_id: i32) -> Result<bool> {
        Ok(self.category_repo.get_category(category_id)?.is_some())
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expense(&self, expense_id: i32) -> Result<Expense> {
        self.expense_repo
            .get_expense(expense_id)?
            .ok_or_else(|| Error::not_found("Expense", expense_id))
    }

    fn list_expenses_on(&self, date: NaiveDate, page: Option<&str>) -> Result<Page<Expense>> {
        Paginator::paginate(
            page,
            || self.expense_repo.count_expenses_between(date, date),
            |offset, limit| {
                self.expense_repo
                    .page_expenses_between(date, date, offset, limit)
            },
        )
    }

    async fn create_expense(&self, form: ExpenseForm) -> Result<Expense> {
        let fields = form.validate(|id| self.category_exists(id))?;
        let today = local_today();
        debug!("Recording expense of {} for {}", fields.amount, today);
        self.expense_repo
            .insert_expense(fields.into_new(today, today))
            .await
    }

    async fn create_previous_expense(&self, form: PreviousExpenseForm) -> Result<Expense> {
        let (fields, created_at) = form.validate(|id| self.category_exists(id))?;
        debug!("Recording backdated expense of {} for {}", fields.amount, created_at);
        self.expense_repo
            .insert_expense(fields.into_new(created_at, local_today()))
            .await
    }

    async fn update_expense(&self, expense_id: i32, form: ExpenseForm) -> Result<Expense> {
        let existing = self.get_expense(expense_id)?;
        let fields = form.validate(|id| self.category_exists(id))?;
        debug!("Updating expense {}", existing.id);
        self.expense_repo
            .update_expense(fields.into_update(existing.id, local_today()))
            .await
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<()> {
        let deleted = self.expense_repo.delete_expense(expense_id).await?;
        if deleted == 0 {
            return Err(Error::not_found("Expense", expense_id));
        }
        debug!("Deleted expense {}", expense_id);
        Ok(())
    }
}

use crate::errors::Result;
use crate::expenses::expenses_model::{
    Expense, ExpenseForm, ExpenseUpdate, NewExpense, PreviousExpenseForm,
};
use crate::pagination::Page;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations.
///
/// Every listing returns expenses newest first (`created_at` descending).
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>>;
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    /// Expenses dated within `start..=end`.
    fn list_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>>;
    fn count_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<i64>;
    fn page_expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Expense>>;
    async fn insert_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, expense_update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: i32) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expense(&self, expense_id: i32) -> Result<Expense>;
    /// One page of the expenses recorded on `date`.
    fn list_expenses_on(&self, date: NaiveDate, page: Option<&str>) -> Result<Page<Expense>>;
    async fn create_expense(&self, form: ExpenseForm) -> Result<Expense>;
    async fn create_previous_expense(&self, form: PreviousExpenseForm) -> Result<Expense>;
    async fn update_expense(&self, expense_id: i32, form: ExpenseForm) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: i32) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::categories::{
        Category, CategoryDeletion, CategoryRepositoryTrait, CategoryUpdate, NewCategory,
    };
    use crate::errors::{Error, Result, ValidationError};
    use crate::expenses::*;
    use crate::utils::time_utils::local_today;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- Mock ExpenseRepository ---
    #[derive(Default)]
    struct MockExpenseRepository {
        expenses: Mutex<Vec<Expense>>,
    }

    impl MockExpenseRepository {
        fn add(&self, amount: i32, created_at: NaiveDate) -> Expense {
            let mut expenses = self.expenses.lock().unwrap();
            let expense = Expense {
                id: expenses.len() as i32 + 1,
                category_id: None,
                amount,
                notes: format!("expense {}", amount),
                created_at,
                updated_at: created_at,
            };
            expenses.push(expense.clone());
            expense
        }

        fn sorted_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
            let mut rows: Vec<Expense> = self
                .expenses
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.created_at >= start && e.created_at <= end)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            rows
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>> {
            Ok(self
                .expenses
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == expense_id)
                .cloned())
        }

        fn load_expenses(&self) -> Result<Vec<Expense>> {
            Ok(self.sorted_between(NaiveDate::MIN, NaiveDate::MAX))
        }

        fn list_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
            Ok(self.sorted_between(start, end))
        }

        fn count_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<i64> {
            Ok(self.sorted_between(start, end).len() as i64)
        }

        fn page_expenses_between(
            &self,
            start: NaiveDate,
            end: NaiveDate,
            offset: i64,
            limit: i64,
        ) -> Result<Vec<Expense>> {
            Ok(self
                .sorted_between(start, end)
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }

        async fn insert_expense(&self, new_expense: NewExpense) -> Result<Expense> {
            let mut expenses = self.expenses.lock().unwrap();
            let expense = Expense {
                id: expenses.len() as i32 + 1,
                category_id: new_expense.category_id,
                amount: new_expense.amount,
                notes: new_expense.notes,
                created_at: new_expense.created_at,
                updated_at: new_expense.updated_at,
            };
            expenses.push(expense.clone());
            Ok(expense)
        }

        async fn update_expense(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
            let mut expenses = self.expenses.lock().unwrap();
            let expense = expenses
                .iter_mut()
                .find(|e| e.id == expense_update.id)
                .ok_or_else(|| Error::not_found("Expense", expense_update.id))?;
            expense.category_id = expense_update.category_id;
            expense.amount = expense_update.amount;
            expense.notes = expense_update.notes;
            expense.updated_at = expense_update.updated_at;
            Ok(expense.clone())
        }

        async fn delete_expense(&self, expense_id: i32) -> Result<usize> {
            let mut expenses = self.expenses.lock().unwrap();
            let before = expenses.len();
            expenses.retain(|e| e.id != expense_id);
            Ok(before - expenses.len())
        }
    }

    // --- Mock CategoryRepository (lookups only) ---
    struct MockCategoryRepository {
        known_ids: Vec<i32>,
    }

    #[async_trait]
    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn get_category(&self, category_id: i32) -> Result<Option<Category>> {
            Ok(self.known_ids.contains(&category_id).then(|| Category {
                id: category_id,
                name: format!("Category {}", category_id),
                created_at: date(2021, 1, 1),
                updated_at: date(2021, 1, 1),
            }))
        }

        fn count_categories(&self) -> Result<i64> {
            unimplemented!()
        }

        fn list_categories(&self, _offset: i64, _limit: i64) -> Result<Vec<Category>> {
            unimplemented!()
        }

        async fn insert_category(&self, _new_category: NewCategory) -> Result<Category> {
            unimplemented!()
        }

        async fn update_category(&self, _category_update: CategoryUpdate) -> Result<Category> {
            unimplemented!()
        }

        async fn delete_category(&self, _category_id: i32) -> Result<CategoryDeletion> {
            unimplemented!()
        }
    }

    fn service() -> (ExpenseService, Arc<MockExpenseRepository>) {
        let repo = Arc::new(MockExpenseRepository::default());
        let categories = Arc::new(MockCategoryRepository {
            known_ids: vec![1, 2],
        });
        (ExpenseService::new(repo.clone(), categories), repo)
    }

    fn form(category: Option<i32>, amount: i64, notes: &str) -> ExpenseForm {
        ExpenseForm {
            category: category.map(Value::from),
            amount: Some(Value::from(amount)),
            notes: Some(notes.to_string()),
        }
    }

    #[tokio::test]
    async fn create_expense_is_dated_today() {
        let (service, _) = service();

        let expense = service
            .create_expense(form(Some(1), 120, "Coffee beans"))
            .await
            .unwrap();

        assert_eq!(expense.created_at, local_today());
        assert_eq!(expense.category_id, Some(1));
        assert_eq!(expense.amount, 120);
    }

    #[tokio::test]
    async fn previous_expense_keeps_supplied_date() {
        let (service, _) = service();

        let expense = service
            .create_previous_expense(PreviousExpenseForm {
                expense: form(None, 75, "Parking"),
                created_at: Some(Value::from("2021-03-01")),
            })
            .await
            .unwrap();

        assert_eq!(expense.created_at, date(2021, 3, 1));
        assert_eq!(expense.updated_at, local_today());
    }

    #[tokio::test]
    async fn unknown_category_is_a_field_error() {
        let (service, repo) = service();

        let err = service
            .create_expense(form(Some(99), 10, "Gift"))
            .await
            .unwrap_err();

        match err {
            Error::Validation(ValidationError::Fields(errors)) => {
                assert!(errors.contains("category"))
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(repo.load_expenses().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_expense_is_not_found() {
        let (service, _) = service();

        let err = service
            .update_expense(404, form(None, 10, "Nothing"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_keeps_entry_date() {
        let (service, repo) = service();
        let original = repo.add(100, date(2021, 3, 1));

        let updated = service
            .update_expense(original.id, form(Some(2), 180, "Dinner"))
            .await
            .unwrap();

        assert_eq!(updated.created_at, date(2021, 3, 1));
        assert_eq!(updated.amount, 180);
        assert_eq!(updated.category_id, Some(2));
        assert_eq!(updated.updated_at, local_today());
    }

    #[tokio::test]
    async fn delete_expense_reports_missing_id() {
        let (service, repo) = service();
        let expense = repo.add(50, date(2021, 3, 2));

        service.delete_expense(expense.id).await.unwrap();
        assert!(service.get_expense(expense.id).unwrap_err().is_not_found());
        assert!(service.delete_expense(expense.id).await.unwrap_err().is_not_found());
    }

    #[test]
    fn list_on_date_pages_newest_first() {
        let (service, repo) = service();
        let day = date(2021, 3, 28);
        for amount in 1..=10 {
            repo.add(amount, day);
        }
        repo.add(500, date(2021, 3, 27));

        let first = service.list_expenses_on(day, None).unwrap();
        assert_eq!(first.count, 10);
        assert_eq!(first.num_pages, 2);
        assert_eq!(first.object_list[0].amount, 10);

        let second = service.list_expenses_on(day, Some("2")).unwrap();
        assert_eq!(second.object_list.len(), 1);
        assert_eq!(second.object_list[0].amount, 1);
    }
}

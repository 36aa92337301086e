use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use spendwise_core::categories::{
    Category, CategoryDeletion, CategoryRepositoryTrait, CategoryUpdate, NewCategory,
};
use spendwise_core::errors::Error;
use spendwise_core::Result;

use super::model::{CategoryChangesetDB, CategoryDB, NewCategoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, expenses};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CategoryRepository { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn get_category(&self, category_id: i32) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category = categories::table
            .find(category_id)
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(category.map(Category::from))
    }

    fn count_categories(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn list_categories(&self, offset: i64, limit: i64) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = categories::table
            .select(CategoryDB::as_select())
            .order((categories::created_at.asc(), categories::id.asc()))
            .offset(offset)
            .limit(limit)
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn insert_category(&self, new_category: NewCategory) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let new_category_db: NewCategoryDB = new_category.into();
                let result_db = diesel::insert_into(categories::table)
                    .values(&new_category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let changes = CategoryChangesetDB::from(&category_update);
                let result_db = diesel::update(categories::table.find(category_update.id))
                    .set(&changes)
                    .returning(CategoryDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::not_found("Category", category_update.id))?;
                Ok(Category::from(result_db))
            })
            .await
    }

    async fn delete_category(&self, category_id: i32) -> Result<CategoryDeletion> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CategoryDeletion> {
                // Expenses go first so the cascade holds even on a connection
                // opened without `foreign_keys = ON`.
                let expenses_deleted =
                    diesel::delete(expenses::table.filter(expenses::category_id.eq(category_id)))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                let deleted = diesel::delete(categories::table.find(category_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if deleted == 0 {
                    return Err(Error::not_found("Category", category_id));
                }
                debug!(
                    "Deleted category {} and {} expense(s)",
                    category_id, expenses_deleted
                );
                Ok(CategoryDeletion {
                    category_id,
                    expenses_deleted,
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::test_database;
    use crate::expenses::ExpenseRepository;
    use chrono::NaiveDate;
    use spendwise_core::expenses::{ExpenseRepositoryTrait, NewExpense};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, d).unwrap()
    }

    fn new_category(name: &str, day: u32) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            created_at: date(day),
            updated_at: date(day),
        }
    }

    fn new_expense(category_id: Option<i32>, amount: i32) -> NewExpense {
        NewExpense {
            category_id,
            amount,
            notes: "Lunch".to_string(),
            created_at: date(28),
            updated_at: date(28),
        }
    }

    #[tokio::test]
    async fn lists_oldest_first() {
        let (pool, writer, _dir) = test_database();
        let repo = CategoryRepository::new(pool, writer);

        repo.insert_category(new_category("Travel", 20)).await.unwrap();
        repo.insert_category(new_category("Food", 2)).await.unwrap();
        repo.insert_category(new_category("Rent", 20)).await.unwrap();

        let names: Vec<String> = repo
            .list_categories(0, 9)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Food", "Travel", "Rent"]);
        assert_eq!(repo.count_categories().unwrap(), 3);
        assert_eq!(repo.list_categories(2, 9).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let (pool, writer, _dir) = test_database();
        let repo = CategoryRepository::new(pool, writer);
        let category = repo.insert_category(new_category("Food", 1)).await.unwrap();

        let updated = repo
            .update_category(CategoryUpdate {
                id: category.id,
                name: "Groceries".to_string(),
                updated_at: date(15),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Groceries");
        assert_eq!(updated.created_at, date(1));
        assert_eq!(updated.updated_at, date(15));
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let (pool, writer, _dir) = test_database();
        let repo = CategoryRepository::new(pool, writer);

        let err = repo
            .update_category(CategoryUpdate {
                id: 99,
                name: "Ghost".to_string(),
                updated_at: date(1),
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_cascades_to_expenses() {
        let (pool, writer, _dir) = test_database();
        let categories = CategoryRepository::new(pool.clone(), writer.clone());
        let expenses = ExpenseRepository::new(pool, writer);

        let food = categories.insert_category(new_category("Food", 1)).await.unwrap();
        let rent = categories.insert_category(new_category("Rent", 1)).await.unwrap();
        expenses.insert_expense(new_expense(Some(food.id), 100)).await.unwrap();
        expenses.insert_expense(new_expense(Some(food.id), 250)).await.unwrap();
        let kept = expenses.insert_expense(new_expense(Some(rent.id), 900)).await.unwrap();
        let uncategorised = expenses.insert_expense(new_expense(None, 40)).await.unwrap();

        let deletion = categories.delete_category(food.id).await.unwrap();

        assert_eq!(deletion.expenses_deleted, 2);
        assert!(categories.get_category(food.id).unwrap().is_none());
        let remaining: Vec<i32> = expenses
            .load_expenses()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(remaining, vec![uncategorised.id, kept.id]);
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let (pool, writer, _dir) = test_database();
        let repo = CategoryRepository::new(pool, writer);

        assert!(repo.delete_category(3).await.unwrap_err().is_not_found());
    }
}

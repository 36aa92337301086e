use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use spendwise_core::errors::Error;
use spendwise_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use spendwise_core::Result;

use super::model::{ExpenseChangesetDB, ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }

    fn load_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        window: Option<(i64, i64)>,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses::table
            .filter(expenses::created_at.between(start, end))
            .select(ExpenseDB::as_select())
            .order((expenses::created_at.desc(), expenses::id.desc()))
            .into_boxed();
        if let Some((offset, limit)) = window {
            query = query.offset(offset).limit(limit);
        }
        let rows = query
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let expense = expenses::table
            .find(expense_id)
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(expense.map(Expense::from))
    }

    fn load_expenses(&self) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses::table
            .select(ExpenseDB::as_select())
            .order((expenses::created_at.desc(), expenses::id.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
        self.load_between(start, end, None)
    }

    fn count_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(expenses::table
            .filter(expenses::created_at.between(start, end))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn page_expenses_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Expense>> {
        self.load_between(start, end, Some((offset, limit)))
    }

    async fn insert_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let new_expense_db: NewExpenseDB = new_expense.into();
                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn update_expense(&self, expense_update: ExpenseUpdate) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let expense_id = expense_update.id;
                let changes = ExpenseChangesetDB::from(expense_update);
                let result_db = diesel::update(expenses::table.find(expense_id))
                    .set(&changes)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::not_found("Expense", expense_id))?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expenses::table.find(expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use spendwise_core::budgets::{Budget, BudgetRepositoryTrait, BudgetUpdate, NewBudget};
use spendwise_core::errors::Error;
use spendwise_core::Result;

use super::model::{BudgetChangesetDB, BudgetDB, NewBudgetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BudgetRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_budget(&self, budget_id: i32) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets::table
            .find(budget_id)
            .select(BudgetDB::as_select())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(Budget::try_from)
            .transpose()
    }

    fn count_budgets(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(budgets::table
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn list_budgets(&self, offset: i64, limit: i64) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        budgets::table
            .select(BudgetDB::as_select())
            .order(budgets::id.asc())
            .offset(offset)
            .limit(limit)
            .load::<BudgetDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(Budget::try_from)
            .collect()
    }

    async fn insert_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let new_budget_db: NewBudgetDB = new_budget.into();
                let result_db = diesel::insert_into(budgets::table)
                    .values(&new_budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Budget::try_from(result_db)
            })
            .await
    }

    async fn update_budget(&self, budget_update: BudgetUpdate) -> Result<Budget> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                let changes = BudgetChangesetDB::from(&budget_update);
                let result_db = diesel::update(budgets::table.find(budget_update.id))
                    .set(&changes)
                    .returning(BudgetDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::not_found("Budget", budget_update.id))?;
                Budget::try_from(result_db)
            })
            .await
    }
}

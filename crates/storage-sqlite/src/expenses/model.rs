//! Database models for expenses.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use spendwise_core::expenses::{Expense, ExpenseUpdate, NewExpense};

use crate::categories::CategoryDB;

#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(CategoryDB, foreign_key = category_id))]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDB {
    pub id: i32,
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseDB {
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// `treat_none_as_null` so clearing the category writes NULL instead of
/// skipping the column.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(treat_none_as_null = true)]
pub struct ExpenseChangesetDB {
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub updated_at: NaiveDate,
}

impl From<ExpenseDB> for Expense {
    fn from(db: ExpenseDB) -> Self {
        Expense {
            id: db.id,
            category_id: db.category_id,
            amount: db.amount,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewExpense> for NewExpenseDB {
    fn from(domain: NewExpense) -> Self {
        NewExpenseDB {
            category_id: domain.category_id,
            amount: domain.amount,
            notes: domain.notes,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<ExpenseUpdate> for ExpenseChangesetDB {
    fn from(update: ExpenseUpdate) -> Self {
        ExpenseChangesetDB {
            category_id: update.category_id,
            amount: update.amount,
            notes: update.notes,
            updated_at: update.updated_at,
        }
    }
}

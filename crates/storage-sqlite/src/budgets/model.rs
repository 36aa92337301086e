//! Database models for budgets.
//!
//! The period is stored as its day count in text form ("1", "7", "30").

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use spendwise_core::budgets::{Budget, BudgetPeriod, BudgetUpdate, NewBudget};
use spendwise_core::errors::{DatabaseError, Error};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BudgetDB {
    pub id: i32,
    pub budget_for: String,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetDB {
    pub budget_for: String,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::budgets)]
pub struct BudgetChangesetDB {
    pub budget_for: String,
    pub deadline: NaiveDate,
}

impl TryFrom<BudgetDB> for Budget {
    type Error = Error;

    fn try_from(db: BudgetDB) -> Result<Self, Self::Error> {
        let budget_for = db.budget_for.parse::<BudgetPeriod>().map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "budget {} has a corrupt period: {}",
                db.id, e
            )))
        })?;
        Ok(Budget {
            id: db.id,
            budget_for,
            created_at: db.created_at,
            deadline: db.deadline,
        })
    }
}

impl From<NewBudget> for NewBudgetDB {
    fn from(domain: NewBudget) -> Self {
        NewBudgetDB {
            budget_for: domain.budget_for.as_str().to_string(),
            created_at: domain.created_at,
            deadline: domain.deadline,
        }
    }
}

impl From<&BudgetUpdate> for BudgetChangesetDB {
    fn from(update: &BudgetUpdate) -> Self {
        BudgetChangesetDB {
            budget_for: update.budget_for.as_str().to_string(),
            deadline: update.deadline,
        }
    }
}

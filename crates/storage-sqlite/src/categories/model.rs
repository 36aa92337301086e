//! Database models for categories.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use spendwise_core::categories::{Category, CategoryUpdate, NewCategory};

#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CategoryDB {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryDB {
    pub name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Columns touched by an update. `created_at` is never rewritten.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangesetDB {
    pub name: String,
    pub updated_at: NaiveDate,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Category {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCategory> for NewCategoryDB {
    fn from(domain: NewCategory) -> Self {
        NewCategoryDB {
            name: domain.name,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<&CategoryUpdate> for CategoryChangesetDB {
    fn from(update: &CategoryUpdate) -> Self {
        CategoryChangesetDB {
            name: update.name.clone(),
            updated_at: update.updated_at,
        }
    }
}

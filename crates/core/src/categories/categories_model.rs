//! Category domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_NAME_MAX_LENGTH, REQUIRED_FIELD_MESSAGE};
use crate::errors::{FieldErrors, Result};

/// Domain model representing an expense category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Input model for inserting a category
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Input model for updating a category. `created_at` is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUpdate {
    pub id: i32,
    pub name: String,
    pub updated_at: NaiveDate,
}

/// Outcome of deleting a category together with its expenses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeletion {
    pub category_id: i32,
    pub expenses_deleted: usize,
}

/// Submitted category form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub name: Option<String>,
}

impl CategoryForm {
    /// Returns the cleaned name, or the field errors that block persistence.
    pub fn validate(&self) -> Result<String> {
        let mut errors = FieldErrors::new();
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();

        if name.is_empty() {
            errors.add("name", REQUIRED_FIELD_MESSAGE);
        } else if name.chars().count() > CATEGORY_NAME_MAX_LENGTH {
            errors.add(
                "name",
                format!(
                    "Ensure this value has at most {} characters (it has {}).",
                    CATEGORY_NAME_MAX_LENGTH,
                    name.chars().count()
                ),
            );
        }

        errors.into_result().map(|_| name.to_string())
    }
}

//! Expense domain models and form validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    INVALID_CHOICE_MESSAGE, REQUIRED_FIELD_MESSAGE, VALID_DATE_MESSAGE, WHOLE_NUMBER_MESSAGE,
};
use crate::errors::{FieldErrors, Result};

/// Domain model representing a recorded expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i32,
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Input model for inserting an expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Input model for updating an expense. The entry date is kept as recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseUpdate {
    pub id: i32,
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
    pub updated_at: NaiveDate,
}

/// Cleaned values of a valid expense form
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    pub category_id: Option<i32>,
    pub amount: i32,
    pub notes: String,
}

impl ExpenseFields {
    pub fn into_new(self, created_at: NaiveDate, updated_at: NaiveDate) -> NewExpense {
        NewExpense {
            category_id: self.category_id,
            amount: self.amount,
            notes: self.notes,
            created_at,
            updated_at,
        }
    }

    pub fn into_update(self, id: i32, updated_at: NaiveDate) -> ExpenseUpdate {
        ExpenseUpdate {
            id,
            category_id: self.category_id,
            amount: self.amount,
            notes: self.notes,
            updated_at,
        }
    }
}

/// Submitted expense form (entry dated today, or an update).
///
/// `category` and `amount` hold the raw submitted values; mistyped ones are
/// reported as field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    pub category: Option<Value>,
    pub amount: Option<Value>,
    pub notes: Option<String>,
}

/// A JSON integer or a string holding one. Null and blank strings read as absent.
fn clean_integer(value: Option<&Value>) -> std::result::Result<Option<i64>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number.as_i64().map(Some).ok_or(()),
        Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(Value::String(raw)) => raw.trim().parse::<i64>().map(Some).map_err(|_| ()),
        Some(_) => Err(()),
    }
}

/// A `YYYY-MM-DD` string. Null and blank strings read as absent.
fn clean_date(value: Option<&Value>) -> std::result::Result<Option<NaiveDate>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(Value::String(raw)) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ()),
        Some(_) => Err(()),
    }
}

impl ExpenseForm {
    /// Validates the form. `category_exists` resolves the optional category reference.
    pub fn validate<F>(&self, category_exists: F) -> Result<ExpenseFields>
    where
        F: Fn(i32) -> Result<bool>,
    {
        let mut errors = FieldErrors::new();
        let fields = self.collect(&category_exists, &mut errors)?;
        errors.into_result()?;
        fields.ok_or_else(|| crate::Error::Unexpected("expense form produced no values".into()))
    }

    fn collect<F>(&self, category_exists: &F, errors: &mut FieldErrors) -> Result<Option<ExpenseFields>>
    where
        F: Fn(i32) -> Result<bool>,
    {
        let amount = match clean_integer(self.amount.as_ref()) {
            Err(()) => {
                errors.add("amount", WHOLE_NUMBER_MESSAGE);
                None
            }
            Ok(None) => {
                errors.add("amount", REQUIRED_FIELD_MESSAGE);
                None
            }
            Ok(Some(value)) if value > i64::from(i32::MAX) => {
                errors.add(
                    "amount",
                    format!("Ensure this value is less than or equal to {}.", i32::MAX),
                );
                None
            }
            Ok(Some(value)) if value < i64::from(i32::MIN) => {
                errors.add(
                    "amount",
                    format!("Ensure this value is greater than or equal to {}.", i32::MIN),
                );
                None
            }
            Ok(Some(value)) => i32::try_from(value).ok(),
        };

        let notes = self.notes.as_deref().unwrap_or_default();
        if notes.trim().is_empty() {
            errors.add("notes", REQUIRED_FIELD_MESSAGE);
        }

        let category_id = match clean_integer(self.category.as_ref()) {
            Ok(None) => None,
            Ok(Some(raw)) => match i32::try_from(raw) {
                Ok(category_id) if category_exists(category_id)? => Some(category_id),
                _ => {
                    errors.add("category", INVALID_CHOICE_MESSAGE);
                    None
                }
            },
            Err(()) => {
                errors.add("category", INVALID_CHOICE_MESSAGE);
                None
            }
        };

        Ok(amount.map(|amount| ExpenseFields {
            category_id,
            amount,
            notes: notes.to_string(),
        }))
    }
}

/// Submitted form for a backdated expense; the caller supplies the entry date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousExpenseForm {
    #[serde(flatten)]
    pub expense: ExpenseForm,
    pub created_at: Option<Value>,
}

impl PreviousExpenseForm {
    pub fn validate<F>(&self, category_exists: F) -> Result<(ExpenseFields, NaiveDate)>
    where
        F: Fn(i32) -> Result<bool>,
    {
        let mut errors = FieldErrors::new();
        let fields = self.expense.collect(&category_exists, &mut errors)?;
        let created_at = match clean_date(self.created_at.as_ref()) {
            Ok(Some(date)) => Some(date),
            Ok(None) => {
                errors.add("createdAt", REQUIRED_FIELD_MESSAGE);
                None
            }
            Err(()) => {
                errors.add("createdAt", VALID_DATE_MESSAGE);
                None
            }
        };
        errors.into_result()?;

        match (fields, created_at) {
            (Some(fields), Some(created_at)) => Ok((fields, created_at)),
            _ => Err(crate::Error::Unexpected(
                "expense form produced no values".into(),
            )),
        }
    }
}

//! Budget domain models.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::REQUIRED_FIELD_MESSAGE;
use crate::errors::{FieldErrors, Result};

/// How long a budget runs. The wire value is the length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetPeriod {
    #[serde(rename = "1")]
    Day,
    #[serde(rename = "7")]
    Week,
    #[serde(rename = "30")]
    Month,
}

impl BudgetPeriod {
    pub const ALL: [BudgetPeriod; 3] = [BudgetPeriod::Day, BudgetPeriod::Week, BudgetPeriod::Month];

    pub fn days(self) -> u64 {
        match self {
            BudgetPeriod::Day => 1,
            BudgetPeriod::Week => 7,
            BudgetPeriod::Month => 30,
        }
    }

    /// Stored and wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetPeriod::Day => "1",
            BudgetPeriod::Week => "7",
            BudgetPeriod::Month => "30",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetPeriod::Day => "DAY",
            BudgetPeriod::Week => "WEEK",
            BudgetPeriod::Month => "MONTH",
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BudgetPeriod::ALL
            .into_iter()
            .find(|period| period.as_str() == s.trim())
            .ok_or_else(|| {
                format!(
                    "Select a valid choice. {} is not one of the available choices.",
                    s
                )
            })
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deadline of a budget created on `created_at` running for `period`.
pub fn compute_deadline(created_at: NaiveDate, period: BudgetPeriod) -> NaiveDate {
    created_at + Days::new(period.days())
}

/// Domain model representing a budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i32,
    pub budget_for: BudgetPeriod,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

/// Input model for inserting a budget
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub budget_for: BudgetPeriod,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
}

impl NewBudget {
    pub fn starting(created_at: NaiveDate, budget_for: BudgetPeriod) -> Self {
        NewBudget {
            budget_for,
            created_at,
            deadline: compute_deadline(created_at, budget_for),
        }
    }
}

/// Input model for updating a budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUpdate {
    pub id: i32,
    pub budget_for: BudgetPeriod,
    pub deadline: NaiveDate,
}

/// Submitted budget form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetForm {
    pub budget_for: Option<String>,
}

impl BudgetForm {
    pub fn validate(&self) -> Result<BudgetPeriod> {
        let mut errors = FieldErrors::new();
        let period = match self.budget_for.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("budgetFor", REQUIRED_FIELD_MESSAGE);
                None
            }
            Some(raw) => match raw.parse::<BudgetPeriod>() {
                Ok(period) => Some(period),
                Err(message) => {
                    errors.add("budgetFor", message);
                    None
                }
            },
        };
        errors.into_result()?;
        period.ok_or_else(|| crate::Error::Unexpected("budget form produced no period".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deadline_adds_period_length() {
        let created = date(2021, 3, 28);
        assert_eq!(compute_deadline(created, BudgetPeriod::Day), date(2021, 3, 29));
        assert_eq!(compute_deadline(created, BudgetPeriod::Week), date(2021, 4, 4));
        assert_eq!(compute_deadline(created, BudgetPeriod::Month), date(2021, 4, 27));
    }

    #[test]
    fn deadline_crosses_year_and_leap_day() {
        assert_eq!(
            compute_deadline(date(2020, 12, 31), BudgetPeriod::Day),
            date(2021, 1, 1)
        );
        assert_eq!(
            compute_deadline(date(2024, 2, 1), BudgetPeriod::Month),
            date(2024, 3, 2)
        );
    }

    #[test]
    fn period_round_trips_wire_values() {
        for period in BudgetPeriod::ALL {
            assert_eq!(period.as_str().parse::<BudgetPeriod>().unwrap(), period);
        }
        assert_eq!(serde_json::to_string(&BudgetPeriod::Week).unwrap(), "\"7\"");
        assert_eq!(
            serde_json::from_str::<BudgetPeriod>("\"30\"").unwrap(),
            BudgetPeriod::Month
        );
    }

    #[test]
    fn form_rejects_values_outside_the_choices() {
        let form = BudgetForm {
            budget_for: Some("14".to_string()),
        };
        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("14 is not one of the available choices"));

        assert!(BudgetForm::default().validate().is_err());
        assert_eq!(
            BudgetForm {
                budget_for: Some("1".to_string())
            }
            .validate()
            .unwrap(),
            BudgetPeriod::Day
        );
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;

/// Total spend and number of transactions over a set of expenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_amount: i64,
    pub transaction_count: i64,
}

/// Reports for the day, week and month of a reference date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReports {
    pub day: Report,
    pub week: Report,
    pub month: Report,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    pub reports: PeriodReports,
}

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn single(day: NaiveDate) -> Self {
        DateRange::new(day, day)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveKind {
    Day,
    Week,
    Month,
}

impl ArchiveKind {
    pub fn page_name(self) -> &'static str {
        match self {
            ArchiveKind::Day => "Today Expense",
            ArchiveKind::Week => "Week Expense",
            ArchiveKind::Month => "Month Expense",
        }
    }
}

/// Expenses of one archive period with their aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub kind: ArchiveKind,
    pub period: DateRange,
    pub object_list: Vec<Expense>,
    pub report: Report,
}

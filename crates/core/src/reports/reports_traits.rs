use chrono::NaiveDate;

use super::reports_model::{Archive, ArchiveKind, Dashboard, DateRange, Report};
use crate::errors::Result;

/// Trait for report service operations
pub trait ReportServiceTrait: Send + Sync {
    /// Day/week/month reports around `today` over every recorded expense.
    fn get_dashboard(&self, today: NaiveDate) -> Result<Dashboard>;
    /// Aggregate of the expenses recorded on `date`.
    fn get_day_report(&self, date: NaiveDate) -> Result<Report>;
    fn get_archive(&self, kind: ArchiveKind, period: DateRange) -> Result<Archive>;
}

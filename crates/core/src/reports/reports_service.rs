use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::aggregation::{period_reports, report};
use super::reports_model::{Archive, ArchiveKind, Dashboard, DateRange, Report};
use super::reports_traits::ReportServiceTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;

pub struct ReportService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
}

impl ReportService {
    pub fn new(expense_repo: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ReportService { expense_repo }
    }
}

impl ReportServiceTrait for ReportService {
    fn get_dashboard(&self, today: NaiveDate) -> Result<Dashboard> {
        let expenses = self.expense_repo.load_expenses()?;
        debug!("Building dashboard for {} over {} expenses", today, expenses.len());
        Ok(Dashboard {
            today,
            reports: period_reports(&expenses, today),
        })
    }

    fn get_day_report(&self, date: NaiveDate) -> Result<Report> {
        let expenses = self.expense_repo.list_expenses_between(date, date)?;
        Ok(report(&expenses))
    }

    fn get_archive(&self, kind: ArchiveKind, period: DateRange) -> Result<Archive> {
        let object_list = self
            .expense_repo
            .list_expenses_between(period.start, period.end)?;
        debug!(
            "{:?} archive {}..={} holds {} expenses",
            kind,
            period.start,
            period.end,
            object_list.len()
        );
        let report = report(&object_list);
        Ok(Archive {
            kind,
            period,
            object_list,
            report,
        })
    }
}

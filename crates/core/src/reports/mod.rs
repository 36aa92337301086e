//! Reports module - expense aggregation, archive periods, and the report service.

mod aggregation;
mod archive;
mod reports_model;
mod reports_service;
mod reports_traits;

#[cfg(test)]
mod reports_service_tests;

pub use aggregation::{period_reports, report, same_day_of_month, same_iso_week, same_month};
pub use archive::parse_month;
pub use reports_model::{Archive, ArchiveKind, Dashboard, DateRange, PeriodReports, Report};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;

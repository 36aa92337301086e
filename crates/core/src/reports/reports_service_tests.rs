#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
    use crate::reports::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- Mock ExpenseRepository (read-only) ---
    struct FixedExpenses(Vec<Expense>);

    impl FixedExpenses {
        fn of(rows: &[(i32, NaiveDate)]) -> Self {
            FixedExpenses(
                rows.iter()
                    .enumerate()
                    .map(|(i, (amount, created_at))| Expense {
                        id: i as i32 + 1,
                        category_id: None,
                        amount: *amount,
                        notes: "fixture".to_string(),
                        created_at: *created_at,
                        updated_at: *created_at,
                    })
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for FixedExpenses {
        fn get_expense(&self, expense_id: i32) -> Result<Option<Expense>> {
            Ok(self.0.iter().find(|e| e.id == expense_id).cloned())
        }

        fn load_expenses(&self) -> Result<Vec<Expense>> {
            Ok(self.0.clone())
        }

        fn list_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Expense>> {
            Ok(self
                .0
                .iter()
                .filter(|e| e.created_at >= start && e.created_at <= end)
                .cloned()
                .collect())
        }

        fn count_expenses_between(&self, start: NaiveDate, end: NaiveDate) -> Result<i64> {
            Ok(self.list_expenses_between(start, end)?.len() as i64)
        }

        fn page_expenses_between(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
            _offset: i64,
            _limit: i64,
        ) -> Result<Vec<Expense>> {
            unimplemented!()
        }

        async fn insert_expense(&self, _new_expense: NewExpense) -> Result<Expense> {
            unimplemented!()
        }

        async fn update_expense(&self, _expense_update: ExpenseUpdate) -> Result<Expense> {
            unimplemented!()
        }

        async fn delete_expense(&self, _expense_id: i32) -> Result<usize> {
            unimplemented!()
        }
    }

    #[test]
    fn month_archive_is_year_qualified() {
        let service = ReportService::new(Arc::new(FixedExpenses::of(&[
            (100, date(2021, 3, 1)),
            (250, date(2021, 3, 15)),
            (999, date(2020, 3, 15)),
        ])));

        let archive = service
            .get_archive(ArchiveKind::Month, DateRange::for_month(2021, 3).unwrap())
            .unwrap();

        assert_eq!(archive.object_list.len(), 2);
        assert_eq!(
            archive.report,
            Report {
                total_amount: 350,
                transaction_count: 2
            }
        );
    }

    #[test]
    fn empty_day_archive_reports_zero() {
        let service = ReportService::new(Arc::new(FixedExpenses::of(&[(100, date(2021, 3, 1))])));

        let archive = service
            .get_archive(ArchiveKind::Day, DateRange::for_day(2030, 1, 1).unwrap())
            .unwrap();

        assert!(archive.object_list.is_empty());
        assert_eq!(archive.report, Report::default());
    }

    #[test]
    fn dashboard_applies_period_filters() {
        let service = ReportService::new(Arc::new(FixedExpenses::of(&[
            (100, date(2021, 3, 1)),
            (250, date(2021, 3, 15)),
            (40, date(2021, 3, 28)),
        ])));

        let dashboard = service.get_dashboard(date(2021, 3, 28)).unwrap();

        assert_eq!(dashboard.today, date(2021, 3, 28));
        assert_eq!(dashboard.reports.day.total_amount, 40);
        assert_eq!(dashboard.reports.week.total_amount, 40);
        assert_eq!(dashboard.reports.month.total_amount, 390);
        assert_eq!(dashboard.reports.month.transaction_count, 3);
    }

    #[test]
    fn day_report_covers_only_that_date() {
        let service = ReportService::new(Arc::new(FixedExpenses::of(&[
            (10, date(2021, 3, 27)),
            (20, date(2021, 3, 28)),
            (30, date(2021, 3, 28)),
        ])));

        let report = service.get_day_report(date(2021, 3, 28)).unwrap();

        assert_eq!(report.total_amount, 50);
        assert_eq!(report.transaction_count, 2);
    }
}

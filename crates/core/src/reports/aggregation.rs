//! Pure aggregation over expense collections.
//!
//! The period filters compare a single calendar component against the
//! reference date and are deliberately not qualified by year (or by month,
//! for the day filter): an expense from March 2020 counts towards the month
//! report of March 2021. Archive views use [`DateRange`](super::DateRange)
//! instead, which is fully qualified.

use chrono::{Datelike, NaiveDate};

use super::reports_model::{PeriodReports, Report};
use crate::expenses::Expense;

/// Sums amounts and counts expenses. An empty collection yields zeros.
pub fn report<'a, I>(expenses: I) -> Report
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .fold(Report::default(), |acc, expense| Report {
            total_amount: acc.total_amount + i64::from(expense.amount),
            transaction_count: acc.transaction_count + 1,
        })
}

/// Same day-of-month number, any month or year.
pub fn same_day_of_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.day() == reference.day()
}

/// Same ISO-8601 week number, any year.
pub fn same_iso_week(date: NaiveDate, reference: NaiveDate) -> bool {
    date.iso_week().week() == reference.iso_week().week()
}

/// Same month of the year, any year.
pub fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.month() == reference.month()
}

pub fn period_reports(expenses: &[Expense], reference: NaiveDate) -> PeriodReports {
    let filtered = |matches: fn(NaiveDate, NaiveDate) -> bool| {
        report(
            expenses
                .iter()
                .filter(|expense| matches(expense.created_at, reference)),
        )
    };

    PeriodReports {
        day: filtered(same_day_of_month),
        week: filtered(same_iso_week),
        month: filtered(same_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: i32, amount: i32, created_at: NaiveDate) -> Expense {
        Expense {
            id,
            category_id: None,
            amount,
            notes: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn empty_collection_reports_zero() {
        assert_eq!(
            report(&Vec::<Expense>::new()),
            Report {
                total_amount: 0,
                transaction_count: 0
            }
        );
    }

    #[test]
    fn month_filter_sums_matching_expenses() {
        let expenses = vec![
            expense(1, 100, date(2021, 3, 1)),
            expense(2, 250, date(2021, 3, 15)),
        ];
        let reference = date(2021, 3, 28);

        let month = report(
            expenses
                .iter()
                .filter(|e| same_month(e.created_at, reference)),
        );

        assert_eq!(month.total_amount, 350);
        assert_eq!(month.transaction_count, 2);
    }

    #[test]
    fn period_filters_ignore_the_year() {
        let reference = date(2021, 3, 28);
        let expenses = vec![
            expense(1, 10, date(2021, 3, 28)),
            // same day-of-month, other month
            expense(2, 20, date(2021, 1, 28)),
            // same ISO week number (12), previous year
            expense(3, 40, date(2020, 3, 18)),
            // same month, previous year
            expense(4, 80, date(2020, 3, 2)),
            expense(5, 160, date(2021, 6, 5)),
        ];

        let reports = period_reports(&expenses, reference);

        assert_eq!(reports.day, Report { total_amount: 30, transaction_count: 2 });
        assert_eq!(reports.week, Report { total_amount: 50, transaction_count: 2 });
        assert_eq!(reports.month, Report { total_amount: 130, transaction_count: 3 });
    }

    #[test]
    fn negative_amounts_reduce_the_total() {
        let day = date(2021, 3, 28);
        let expenses = vec![expense(1, 500, day), expense(2, -200, day)];
        assert_eq!(report(&expenses).total_amount, 300);
        assert_eq!(report(&expenses).transaction_count, 2);
    }

    #[test]
    fn totals_do_not_overflow_the_amount_type() {
        let day = date(2021, 3, 28);
        let expenses = vec![expense(1, i32::MAX, day), expense(2, i32::MAX, day)];
        assert_eq!(report(&expenses).total_amount, 2 * i64::from(i32::MAX));
    }
}

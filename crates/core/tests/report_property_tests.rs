//! Property-based tests for the reporting engine and budget deadlines.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use spendwise_core::budgets::{compute_deadline, BudgetPeriod};
use spendwise_core::expenses::Expense;
use spendwise_core::pagination::Paginator;
use spendwise_core::reports::{period_reports, report, same_month, DateRange};

// =============================================================================
// Generators
// =============================================================================

/// Generates a date between 2000-01-01 and roughly 2040.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..14_600).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_expense() -> impl Strategy<Value = Expense> {
    (1i32..100_000, any::<i32>(), arb_date()).prop_map(|(id, amount, created_at)| Expense {
        id,
        category_id: None,
        amount,
        notes: "generated".to_string(),
        created_at,
        updated_at: created_at,
    })
}

fn arb_expenses(max_count: usize) -> impl Strategy<Value = Vec<Expense>> {
    proptest::collection::vec(arb_expense(), 0..=max_count)
}

fn arb_period() -> impl Strategy<Value = BudgetPeriod> {
    prop_oneof![
        Just(BudgetPeriod::Day),
        Just(BudgetPeriod::Week),
        Just(BudgetPeriod::Month),
    ]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The total is the arithmetic sum of the amounts and the count is the length.
    #[test]
    fn prop_report_matches_sum_and_len(expenses in arb_expenses(50)) {
        let result = report(&expenses);
        let expected: i64 = expenses.iter().map(|e| i64::from(e.amount)).sum();
        prop_assert_eq!(result.total_amount, expected);
        prop_assert_eq!(result.transaction_count, expenses.len() as i64);
    }

    /// Each period report only counts a subset of the collection.
    #[test]
    fn prop_period_reports_are_bounded(expenses in arb_expenses(50), today in arb_date()) {
        let reports = period_reports(&expenses, today);
        let all = expenses.len() as i64;
        prop_assert!(reports.day.transaction_count <= all);
        prop_assert!(reports.week.transaction_count <= all);
        prop_assert!(reports.month.transaction_count <= all);
    }

    /// Month report equals a manual filter on the month number.
    #[test]
    fn prop_month_report_filters_by_month(expenses in arb_expenses(50), today in arb_date()) {
        let reports = period_reports(&expenses, today);
        let manual = report(expenses.iter().filter(|e| e.created_at.month() == today.month()));
        prop_assert_eq!(reports.month, manual);
        prop_assert!(expenses
            .iter()
            .filter(|e| same_month(e.created_at, today))
            .all(|e| e.created_at.month() == today.month()));
    }

    /// The deadline is always exactly the period length after creation.
    #[test]
    fn prop_deadline_is_period_days_after_creation(created in arb_date(), period in arb_period()) {
        let deadline = compute_deadline(created, period);
        prop_assert_eq!((deadline - created).num_days(), period.days() as i64);
    }

    /// Every resolved page number is within 1..=num_pages.
    #[test]
    fn prop_resolved_page_is_in_range(count in 0i64..500, requested in "[-0-9a-z]{0,4}") {
        let paginator = Paginator::with_default_size(count);
        let number = paginator.resolve(Some(&requested));
        prop_assert!(number >= 1);
        prop_assert!(number <= paginator.num_pages());
    }

    /// A month range always starts on the 1st and ends on the last day of that month.
    #[test]
    fn prop_month_range_is_whole_month(year in 1990i32..2100, month in 1u32..=12) {
        let range = DateRange::for_month(year, month).unwrap();
        prop_assert_eq!(range.start.day(), 1);
        prop_assert_eq!(range.end.month(), month);
        prop_assert_ne!(range.end.succ_opt().unwrap().month(), month);
    }
}

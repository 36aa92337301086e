use chrono::{Local, NaiveDate};

/// The current calendar date in the server's local timezone.
///
/// Expenses and budgets are stamped with plain dates, so "today" is always
/// taken from the local clock rather than UTC.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

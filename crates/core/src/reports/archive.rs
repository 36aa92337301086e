//! Resolution of archive URL segments into calendar ranges.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::reports_model::DateRange;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Accepts `3`, `03` or an English abbreviation such as `mar` / `Mar`.
pub fn parse_month(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<u32>() {
        return (1..=12).contains(&number).then_some(number);
    }
    let lower = raw.to_ascii_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == lower)
        .map(|index| index as u32 + 1)
}

impl DateRange {
    pub fn for_day(year: i32, month: u32, day: u32) -> Option<DateRange> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateRange::single)
    }

    /// Week `week` of `year`, numbered with Monday as the first day of the
    /// week. Week 1 starts on the first Monday of the year and week 0 is the
    /// days before it, so week 0 may begin in December of the previous year.
    pub fn for_week(year: i32, week: u32) -> Option<DateRange> {
        if week > 53 {
            return None;
        }
        let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let lead = jan_first.weekday().num_days_from_monday();
        let week_zero = jan_first.checked_sub_days(Days::new(u64::from(lead)))?;
        // When January 1st is a Monday, weeks 0 and 1 both start on it.
        let offset = if lead == 0 { week.saturating_sub(1) } else { week };
        let start = week_zero.checked_add_days(Days::new(7 * u64::from(offset)))?;
        let end = start.checked_add_days(Days::new(6))?;
        Some(DateRange::new(start, end))
    }

    pub fn for_month(year: i32, month: u32) -> Option<DateRange> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start
            .checked_add_months(Months::new(1))?
            .checked_sub_days(Days::new(1))?;
        Some(DateRange::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_accepts_numbers_and_abbreviations() {
        assert_eq!(parse_month("3"), Some(3));
        assert_eq!(parse_month("03"), Some(3));
        assert_eq!(parse_month("mar"), Some(3));
        assert_eq!(parse_month("Dec"), Some(12));
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("march"), None);
    }

    #[test]
    fn day_range_is_a_single_date() {
        let range = DateRange::for_day(2021, 3, 28).unwrap();
        assert_eq!(range, DateRange::single(date(2021, 3, 28)));
        assert!(DateRange::for_day(2021, 2, 30).is_none());
    }

    #[test]
    fn week_starts_on_monday_of_week_number() {
        let range = DateRange::for_week(2021, 12).unwrap();
        assert_eq!(range.start, date(2021, 3, 22));
        assert_eq!(range.end, date(2021, 3, 28));
    }

    #[test]
    fn week_zero_reaches_into_previous_year() {
        // 2021-01-01 is a Friday
        let range = DateRange::for_week(2021, 0).unwrap();
        assert_eq!(range.start, date(2020, 12, 28));
        assert_eq!(range.end, date(2021, 1, 3));

        let first = DateRange::for_week(2021, 1).unwrap();
        assert_eq!(first.start, date(2021, 1, 4));
    }

    #[test]
    fn year_starting_on_monday_has_no_partial_week() {
        // 2024-01-01 is a Monday
        assert_eq!(DateRange::for_week(2024, 0).unwrap().start, date(2024, 1, 1));
        assert_eq!(DateRange::for_week(2024, 1).unwrap().start, date(2024, 1, 1));
        assert_eq!(DateRange::for_week(2024, 2).unwrap().start, date(2024, 1, 8));
        assert!(DateRange::for_week(2024, 54).is_none());
    }

    #[test]
    fn month_range_covers_whole_month() {
        let feb = DateRange::for_month(2024, 2).unwrap();
        assert_eq!(feb.start, date(2024, 2, 1));
        assert_eq!(feb.end, date(2024, 2, 29));
        assert!(feb.contains(date(2024, 2, 15)));
        assert!(!feb.contains(date(2024, 3, 1)));

        let dec = DateRange::for_month(2021, 12).unwrap();
        assert_eq!(dec.end, date(2021, 12, 31));
        assert!(DateRange::for_month(2021, 13).is_none());
    }
}

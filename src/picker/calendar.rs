//! Calendar helpers for the date wheels.

use chrono::NaiveDate;

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Long-form US date, e.g. "February 29, 2024".
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Widest `year_span` the year wheel accepts.
pub const MAX_YEAR_SPAN: u32 = 1000;

/// Range of years offered by the year wheel, newest first.
///
/// Slot 0 holds `anchor + span`, the last slot holds `anchor - span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    anchor: i32,
    span: u32,
}

impl YearWindow {
    /// `span` is capped at [`MAX_YEAR_SPAN`].
    pub fn new(anchor: i32, span: u32) -> Self {
        Self {
            anchor,
            span: span.min(MAX_YEAR_SPAN),
        }
    }

    pub fn newest(&self) -> i32 {
        self.anchor + self.span as i32
    }

    pub fn oldest(&self) -> i32 {
        self.anchor - self.span as i32
    }

    pub fn len(&self) -> usize {
        self.span as usize * 2 + 1
    }

    /// Clamp a year into the window.
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.oldest(), self.newest())
    }

    /// Slot index holding `year` (clamped into the window first).
    pub fn slot_of(&self, year: i32) -> usize {
        (self.newest() - self.clamp(year)) as usize
    }

    /// Year shown at `slot` (clamped to the last slot).
    pub fn year_at(&self, slot: usize) -> i32 {
        let slot = slot.min(self.len() - 1);
        self.newest() - slot as i32
    }

    pub fn years(&self) -> Vec<i32> {
        (self.oldest()..=self.newest()).rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in 1990..2040 {
            for month in 1..=12u32 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let expected = (next - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_format_long() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_long(date), "February 29, 2024");

        let date = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
        assert_eq!(format_long(date), "October 3, 2026");
    }

    #[test]
    fn test_year_window_is_newest_first() {
        let window = YearWindow::new(2024, 10);
        assert_eq!(window.len(), 21);
        assert_eq!(window.year_at(0), 2034);
        assert_eq!(window.year_at(20), 2014);
        assert_eq!(window.slot_of(2024), 10);
        assert_eq!(window.slot_of(2025), 9);
        assert_eq!(window.years().first(), Some(&2034));
        assert_eq!(window.years().last(), Some(&2014));
    }

    #[test]
    fn test_year_window_clamps() {
        let window = YearWindow::new(2024, 10);
        assert_eq!(window.slot_of(1980), 20);
        assert_eq!(window.slot_of(2100), 0);
        assert_eq!(window.year_at(99), 2014);
    }

    #[test]
    fn test_year_window_caps_span() {
        let window = YearWindow::new(2024, u32::MAX);
        assert_eq!(window.len(), MAX_YEAR_SPAN as usize * 2 + 1);
        assert_eq!(window.year_at(0), 2024 + MAX_YEAR_SPAN as i32);
        assert_eq!(window.clamp(i32::MIN), 2024 - MAX_YEAR_SPAN as i32);
        assert_eq!(window.slot_of(2024), MAX_YEAR_SPAN as usize);
    }
}

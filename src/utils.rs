use chrono::{Datelike, Days, Duration, NaiveDate};

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

/// Adds whole calendar months, clamping the day to the end of the target
/// month when the source day does not exist there (Jan 31 + 1 -> Feb 28).
pub fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let total = date.year() as i64 * 12 + date.month0() as i64 + months;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;
    let day = date.day().min(last_day_of_month(year, month).day());
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Adds whole calendar years with the same day-clamping rule
/// (Feb 29 + 1 year -> Feb 28).
pub fn add_years(date: NaiveDate, years: i64) -> NaiveDate {
    add_months(date, years * 12)
}

/// Calendar-field month difference, ignoring the day component.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let year_diff = end.year() as i64 - start.year() as i64;
    let month_diff = end.month() as i64 - start.month() as i64;
    year_diff * 12 + month_diff
}

pub fn years_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.year() as i64 - start.year() as i64
}

/// The Sunday on or before the given date. Weeks run Sunday through Saturday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Rounds to two decimal places for display. Internal arithmetic stays at
/// full precision; only values handed to callers go through this.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2025, 2), ymd(2025, 2, 28));
        assert_eq!(last_day_of_month(2024, 2), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(2025, 4), ymd(2025, 4, 30));
        assert_eq!(last_day_of_month(2025, 12), ymd(2025, 12, 31));
    }

    #[test]
    fn test_add_months_clamps_short_months() {
        assert_eq!(add_months(ymd(2025, 1, 31), 1), ymd(2025, 2, 28));
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2025, 1, 31), 2), ymd(2025, 3, 31));
        assert_eq!(add_months(ymd(2025, 6, 15), 1), ymd(2025, 7, 15));
    }

    #[test]
    fn test_add_months_crosses_year_boundaries() {
        assert_eq!(add_months(ymd(2025, 11, 30), 3), ymd(2026, 2, 28));
        assert_eq!(add_months(ymd(2025, 12, 31), 1), ymd(2026, 1, 31));
        assert_eq!(add_months(ymd(2025, 6, 15), 24), ymd(2027, 6, 15));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        assert_eq!(add_years(ymd(2024, 2, 29), 1), ymd(2025, 2, 28));
        assert_eq!(add_years(ymd(2024, 2, 29), 4), ymd(2028, 2, 29));
        assert_eq!(add_years(ymd(2025, 6, 15), 1), ymd(2026, 6, 15));
    }

    #[test]
    fn test_months_between() {
        assert_eq!(months_between(ymd(2025, 6, 15), ymd(2025, 7, 20)), 1);
        assert_eq!(months_between(ymd(2025, 6, 15), ymd(2025, 7, 1)), 1);
        assert_eq!(months_between(ymd(2025, 6, 15), ymd(2026, 6, 1)), 12);
        assert_eq!(months_between(ymd(2025, 6, 15), ymd(2025, 6, 30)), 0);
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2025-06-06 is a Friday; the week began Sunday 2025-06-01.
        assert_eq!(week_start(ymd(2025, 6, 6)), ymd(2025, 6, 1));
        assert_eq!(week_start(ymd(2025, 6, 1)), ymd(2025, 6, 1));
        assert_eq!(week_start(ymd(2025, 6, 7)), ymd(2025, 6, 1));
        assert_eq!(week_start(ymd(2025, 6, 8)), ymd(2025, 6, 8));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3800.004), 3800.0);
        assert_eq!(round2(1234.567), 1234.57);
        assert_eq!(round2(-0.005), -0.01);
    }
}

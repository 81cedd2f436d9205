// Date utility functions

use chrono::{Days, Local, NaiveDate, NaiveDateTime, Timelike};

/// Fetch window covering the displayed day: `[today, tomorrow)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
}

impl DayWindow {
    pub fn starting(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self { today, tomorrow }
    }

    pub fn today_param(&self) -> String {
        format_day(self.today)
    }

    pub fn tomorrow_param(&self) -> String {
        format_day(self.tomorrow)
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_crosses_month_end() {
        let window = DayWindow::starting(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(window.today_param(), "2024-01-31");
        assert_eq!(window.tomorrow_param(), "2024-02-01");
    }

    #[test]
    fn test_window_crosses_year_end() {
        let window = DayWindow::starting(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(window.tomorrow_param(), "2025-01-01");
    }

    #[test]
    fn test_local_now_has_no_fraction() {
        assert_eq!(local_now().nanosecond(), 0);
    }
}

use crate::model::WINDOW_DAYS;
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// First day covered by the report window ending on `today`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(WINDOW_DAYS as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Three-letter English month name, e.g. `Jan`.
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_start_is_six_months_back() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(window_start(today), NaiveDate::from_ymd_opt(2023, 12, 5).unwrap());
    }

    #[test]
    fn month_abbreviations() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(month_abbrev(date), "Sep");
    }
}

use chrono::Datelike;

/// Days from `today` to the next Sunday-aligned week boundary.
///
/// Sunday maps to 7 and Saturday to 1, so the result is always in `1..=7`.
/// Both the aggregator and the renderer derive their alignment from this value.
pub fn weekday_offset<D: Datelike>(today: &D) -> usize {
    7 - today.weekday().num_days_from_sunday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn maps_each_weekday() {
        // 2024-06-02 is a Sunday.
        let offsets: Vec<usize> = (0..7)
            .map(|i| weekday_offset(&(date(2024, 6, 2) + chrono::Days::new(i))))
            .collect();
        assert_eq!(offsets, vec![7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn strictly_decreasing_within_bounds() {
        let start = date(2023, 1, 1);
        let offsets: Vec<usize> = (0..7)
            .map(|i| weekday_offset(&(start + chrono::Days::new(i))))
            .collect();
        assert!(offsets.iter().all(|o| (1..=7).contains(o)));
        assert!(offsets.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn wednesday_is_four() {
        assert_eq!(weekday_offset(&date(2024, 6, 5)), 4);
    }
}

use crate::model::{CalendarGrid, DayBuckets, WeekColumn, WINDOW_DAYS};

/// Reshapes per-day counts into week columns.
///
/// Keys `1..=WINDOW_DAYS` are read in order; a column opens on day 0 of a
/// week and is stored once day 6 is reached. Week 0 therefore holds the six
/// counts for keys 1 to 6, and the unfinished oldest week is never stored.
pub fn build_columns(buckets: &DayBuckets) -> CalendarGrid {
    let mut grid = CalendarGrid::new();
    let mut column = WeekColumn::new();

    for days_ago in 1..=WINDOW_DAYS {
        let week = days_ago / 7;
        let day_in_week = days_ago % 7;

        if day_in_week == 0 {
            column = WeekColumn::new();
        }

        column.push(buckets.get(days_ago));

        if day_in_week == 6 {
            grid.insert(week, std::mem::take(&mut column));
        }
    }

    grid
}

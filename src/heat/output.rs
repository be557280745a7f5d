use crate::model::{CalendarGrid, WEEKS_IN_WINDOW};
use crate::util::{month_abbrev, window_start};
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use console::Style;
use std::io::{self, Write};

use super::offset::weekday_offset;

const LABEL_WIDTH: usize = 4;
const CELL_WIDTH: usize = 4;
const EMPTY_CELL: &str = "  - ";

/// Visual weight of a single calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    Today,
}

impl Intensity {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Intensity::None,
            1..=4 => Intensity::Low,
            5..=9 => Intensity::Medium,
            _ => Intensity::High,
        }
    }

    pub fn style(self) -> Style {
        match self {
            Intensity::None => Style::new().dim(),
            Intensity::Low => Style::new().black().on_white().bold(),
            Intensity::Medium => Style::new().black().on_yellow().bold(),
            Intensity::High => Style::new().black().on_green().bold(),
            Intensity::Today => Style::new().white().on_magenta().bold(),
        }
    }
}

/// Fixed-width text for a cell; wider numbers get less padding.
pub fn cell_text(count: u32) -> String {
    match count {
        0 => EMPTY_CELL.to_string(),
        1..=9 => format!("  {count} "),
        10..=99 => format!(" {count} "),
        _ => format!("{count} "),
    }
}

fn day_label(day: usize) -> &'static str {
    match day {
        1 => "Mon ",
        3 => "Wed ",
        5 => "Fri ",
        _ => "    ",
    }
}

/// Draws a [`CalendarGrid`] as a month header plus seven weekday rows.
#[derive(Debug, Clone)]
pub struct CalendarRenderer {
    today: NaiveDate,
    offset: usize,
    styled: bool,
}

impl CalendarRenderer {
    pub fn new<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::for_date(now.date_naive())
    }

    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            today,
            offset: weekday_offset(&today),
            styled: true,
        }
    }

    /// Emit ANSI styling. When disabled the output is plain text.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// `(week, day)` position of the current date.
    ///
    /// On Sundays this is `(0, 6)`, one past the six values of week 0, so the
    /// highlight lands on an empty cell while the day's commits sit at week 1,
    /// row 0.
    pub fn today_cell(&self) -> (usize, usize) {
        (0, self.offset - 1)
    }

    pub fn render(&self, grid: &CalendarGrid) -> String {
        let mut out = self.month_header();
        out.push('\n');
        for day in (0..7).rev() {
            out.push_str(&self.weekday_row(grid, day));
            out.push('\n');
        }
        out
    }

    pub fn print(&self, grid: &CalendarGrid) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(self.render(grid).as_bytes())?;
        handle.flush()
    }

    fn month_header(&self) -> String {
        // The header has one entry fewer than the body, so it is shifted right
        // by one cell to line up with the most recent week.
        let mut line = " ".repeat(LABEL_WIDTH + CELL_WIDTH);
        let mut week = window_start(self.today);
        let mut month = week.month0();

        while week <= self.today {
            if week.month0() != month {
                line.push_str(&format!("{} ", month_abbrev(week)));
                month = week.month0();
            } else {
                line.push_str(&" ".repeat(CELL_WIDTH));
            }

            week = match week.checked_add_days(Days::new(7)) {
                Some(next) => next,
                None => break,
            };
        }

        line
    }

    fn weekday_row(&self, grid: &CalendarGrid, day: usize) -> String {
        let mut line = String::from(day_label(day));
        for week in (0..=WEEKS_IN_WINDOW + 1).rev() {
            let count = grid
                .get(&week)
                .and_then(|column| column.get(day))
                .unwrap_or(0);
            let intensity = if (week, day) == self.today_cell() {
                Intensity::Today
            } else {
                Intensity::for_count(count)
            };
            line.push_str(&self.paint(intensity, &cell_text(count)));
        }
        line
    }

    fn paint(&self, intensity: Intensity, text: &str) -> String {
        if self.styled {
            intensity
                .style()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text.to_string()
        }
    }
}

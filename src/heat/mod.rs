pub mod aggregate;
pub mod columns;
pub mod exec;
pub mod offset;
pub mod output;

pub use aggregate::{aggregate, aggregate_with_progress, days_ago};
pub use columns::build_columns;
pub use exec::exec;
pub use offset::weekday_offset;
pub use output::{cell_text, CalendarRenderer, Intensity};

use crate::error::{ContribError, Result};
use crate::git::CommitSource;
use crate::model::{DayBuckets, WINDOW_DAYS};
use chrono::{DateTime, NaiveDate, TimeZone};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::debug;

use super::offset::weekday_offset;

/// Bucket index for a commit made on `commit_date`, seen from `today`.
///
/// Walks forward one calendar day at a time, so the count never depends on
/// the length of a day. Returns `None` once the index would leave the window.
/// Dates after `today` resolve to `offset`.
pub fn days_ago(commit_date: NaiveDate, today: NaiveDate, offset: usize) -> Option<usize> {
    if offset > WINDOW_DAYS {
        return None;
    }

    let mut day = commit_date;
    let mut days = 0usize;
    while day < today {
        day = day.succ_opt()?;
        days += 1;
        if days + offset > WINDOW_DAYS {
            return None;
        }
    }
    Some(days + offset)
}

/// Counts the commits of `author_email` across `repositories`.
///
/// The first repository that cannot be opened or walked aborts the run.
pub fn aggregate<S, Tz>(
    source: &S,
    repositories: &[PathBuf],
    author_email: &str,
    now: &DateTime<Tz>,
) -> Result<DayBuckets>
where
    S: CommitSource + ?Sized,
    Tz: TimeZone,
{
    aggregate_with_progress(source, repositories, author_email, now, &ProgressBar::hidden())
}

pub fn aggregate_with_progress<S, Tz>(
    source: &S,
    repositories: &[PathBuf],
    author_email: &str,
    now: &DateTime<Tz>,
    progress: &ProgressBar,
) -> Result<DayBuckets>
where
    S: CommitSource + ?Sized,
    Tz: TimeZone,
{
    let tz = now.timezone();
    let today = now.date_naive();
    let offset = weekday_offset(&today);
    let mut buckets = DayBuckets::new();

    for path in repositories {
        progress.set_message(format!("Reading {}", path.display()));

        let mut partial = DayBuckets::new();
        let mut seen = 0usize;
        let mut dropped = 0usize;

        source
            .for_each_commit(path, &mut |record| {
                seen += 1;
                if record.author_email != author_email {
                    return;
                }
                let commit_date = record.timestamp.with_timezone(&tz).date_naive();
                match days_ago(commit_date, today, offset) {
                    Some(index) => partial.increment(index),
                    None => dropped += 1,
                }
            })
            .map_err(|e| ContribError::repository_access(path, e))?;

        debug!(
            repo = %path.display(),
            commits = seen,
            matched = partial.total(),
            outside_window = dropped,
            "walked repository history"
        );

        buckets.merge(&partial);
        progress.inc(1);
    }

    Ok(buckets)
}

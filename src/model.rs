use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// Number of trailing days covered by the report (about six months).
pub const WINDOW_DAYS: usize = 183;

/// Whole weeks inside the window.
pub const WEEKS_IN_WINDOW: usize = 26;

/// Placeholder author used when `--email` is not given. Matches nothing.
pub const DEFAULT_EMAIL: &str = "your@email.com";

/// A single commit as seen by the aggregator, borrowed from the commit source
/// for the duration of one callback.
#[derive(Debug, Clone, Copy)]
pub struct CommitRecord<'a> {
    pub author_email: &'a str,
    pub timestamp: DateTime<FixedOffset>,
}

/// Dense per-day commit counters, indexed by days-ago.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBuckets {
    counts: [u32; WINDOW_DAYS + 1],
}

impl DayBuckets {
    pub fn new() -> Self {
        Self {
            counts: [0; WINDOW_DAYS + 1],
        }
    }

    pub fn get(&self, days_ago: usize) -> u32 {
        self.counts.get(days_ago).copied().unwrap_or(0)
    }

    /// Adds one commit to `days_ago`. Indices outside the window are ignored.
    pub fn increment(&mut self, days_ago: usize) {
        if let Some(slot) = self.counts.get_mut(days_ago) {
            *slot += 1;
        }
    }

    pub fn set(&mut self, days_ago: usize, count: u32) {
        if let Some(slot) = self.counts.get_mut(days_ago) {
            *slot = count;
        }
    }

    /// Element-wise addition of another bucket.
    pub fn merge(&mut self, other: &DayBuckets) {
        for (total, partial) in self.counts.iter_mut().zip(other.counts.iter()) {
            *total += partial;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(days_ago, count)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

impl Default for DayBuckets {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts for one week of the window, oldest-key-last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeekColumn(Vec<u32>);

impl WeekColumn {
    pub fn new() -> Self {
        Self(Vec::with_capacity(7))
    }

    pub fn push(&mut self, count: u32) {
        self.0.push(count);
    }

    /// Count at `day` within the week, or `None` when the column is short.
    pub fn get(&self, day: usize) -> Option<u32> {
        self.0.get(day).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for WeekColumn {
    fn from(counts: Vec<u32>) -> Self {
        Self(counts)
    }
}

/// Week index (0 = current week) to column.
pub type CalendarGrid = BTreeMap<usize, WeekColumn>;

//! Stateless digests of time-series records: one sentence string per record kind.

pub mod activities;
pub mod nutrition;
pub mod workouts;

use std::collections::HashSet;

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};

pub use activities::summarize_activities;
pub use nutrition::summarize_nutrition;
pub use workouts::summarize_workouts;

/// Local calendar date of a UTC timestamp.
pub(crate) fn local_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Local hour of day (0-23) of a UTC timestamp.
pub(crate) fn local_hour(ts: DateTime<Utc>) -> u32 {
    ts.with_timezone(&Local).hour()
}

pub(crate) fn distinct_local_dates(timestamps: impl Iterator<Item = DateTime<Utc>>) -> usize {
    timestamps.map(local_date).collect::<HashSet<_>>().len()
}

/// Frequency count per category, in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct TypeTally {
    counts: Vec<(String, usize)>,
}

impl TypeTally {
    pub fn record(&mut self, category: &str) {
        match self.counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((category.to_string(), 1)),
        }
    }

    /// Most frequent category; ties go to the one seen first.
    pub fn dominant(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (category, count) in &self.counts {
            if best.map_or(true, |(_, n)| *count > n) {
                best = Some((category.as_str(), *count));
            }
        }
        best
    }

    /// `type: count, type: count`.
    pub fn breakdown(&self) -> String {
        self.counts
            .iter()
            .map(|(category, count)| format!("{category}: {count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Category label, falling back when the record has none.
pub(crate) fn label<'a>(category: &'a Option<String>, fallback: &'a str) -> &'a str {
    category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback)
}

//! Grouped views and summary statistics over parsed entries.
//!
//! Every function preserves file order inside its groups. Only
//! [`sort_chronologically`] reorders entries.

pub mod granularity;

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::LogEntry;

pub use granularity::Granularity;

/// Count, time span and per-category counts of a set of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// `None` when there are no entries.
    pub earliest: Option<NaiveDateTime>,
    /// `None` when there are no entries.
    pub latest: Option<NaiveDateTime>,
    pub per_category: BTreeMap<String, usize>,
}

pub fn group_by_category(entries: &[LogEntry]) -> BTreeMap<&str, Vec<&LogEntry>> {
    let mut groups: BTreeMap<&str, Vec<&LogEntry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.category()).or_default().push(entry);
    }
    groups
}

pub fn group_by_period(
    entries: &[LogEntry],
    granularity: Granularity,
) -> BTreeMap<String, Vec<&LogEntry>> {
    let mut groups: BTreeMap<String, Vec<&LogEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(granularity.period_key(&entry.timestamp()))
            .or_default()
            .push(entry);
    }
    groups
}

/// Earliest and latest are taken over all timestamps, not first and last in
/// file order.
pub fn summarize(entries: &[LogEntry]) -> Summary {
    let mut per_category = BTreeMap::new();
    for entry in entries {
        *per_category.entry(entry.category().to_string()).or_insert(0) += 1;
    }
    Summary {
        count: entries.len(),
        earliest: entries.iter().map(LogEntry::timestamp).min(),
        latest: entries.iter().map(LogEntry::timestamp).max(),
        per_category,
    }
}

/// The most recently written entry, i.e. the last one in file order.
pub fn latest_entry(entries: &[LogEntry]) -> Option<&LogEntry> {
    entries.last()
}

/// Stable sort by timestamp; entries with equal timestamps keep file order.
pub fn sort_chronologically(entries: &[LogEntry]) -> Vec<LogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(LogEntry::timestamp);
    sorted
}

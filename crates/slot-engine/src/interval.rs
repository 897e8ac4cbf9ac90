//! Absolute time intervals: busy periods and candidate slots.
//!
//! All comparisons use half-open `[start, end)` semantics. Two intervals that
//! only touch (one ends exactly when the other starts) do NOT overlap.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An already-committed booking or blocked period for a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// An interval with `start >= end` covers no instant.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A bookable slot `[start, start + duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CandidateSlot {
    /// `None` when `start + duration` is outside chrono's range.
    pub fn new(start: DateTime<Utc>, duration: Duration) -> Option<Self> {
        let end = start.checked_add_signed(duration)?;
        Some(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn overlaps(&self, busy: &BusyInterval) -> bool {
        overlaps(self.start, self.end, busy.start, busy.end)
    }
}

/// Half-open overlap: `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && e1 > s2`.
///
/// This excludes the adjacent case where `e1 == s2` or `e2 == s1`.
pub fn overlaps(s1: DateTime<Utc>, e1: DateTime<Utc>, s2: DateTime<Utc>, e2: DateTime<Utc>) -> bool {
    s1 < e2 && e1 > s2
}

/// Merge busy intervals that overlap or touch, keeping only those that reach
/// into `[window_start, window_end)`.
///
/// Returns a sorted, non-overlapping list. Empty intervals are dropped first, so
/// an inverted `start > end` pair never blocks anything.
pub fn merge_busy(
    busy: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<BusyInterval> {
    let mut intervals: Vec<BusyInterval> = busy
        .iter()
        .filter(|b| !b.is_empty())
        .filter(|b| overlaps(b.start, b.end, window_start, window_end))
        .copied()
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|b| (b.start, b.end));

    let mut merged: Vec<BusyInterval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

//! The JSON query/response shape shared by every caller.
//!
//! ```json
//! {
//!   "date": "2026-03-04",
//!   "policy": { "timezone": "Asia/Tokyo", "workStart": "09:00", "workEnd": "17:00", "workDays": [1,2,3,4,5] },
//!   "busyIntervals": [{ "start": "2026-03-04T01:00:00Z", "end": "2026-03-04T02:00:00Z" }],
//!   "slotDurationMinutes": 60
//! }
//! ```
//!
//! The response is an array of `{start, end}` objects with RFC 3339 UTC strings,
//! ascending by `start`.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::{BusyInterval, CandidateSlot};
use crate::policy::RawPolicy;
use crate::slots::{self, DEFAULT_SLOT_MINUTES};

/// A busy interval as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInterval {
    pub start: String,
    pub end: String,
}

/// One slot-computation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub date: String,
    pub policy: RawPolicy,
    #[serde(default)]
    pub busy_intervals: Vec<RawInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_duration_minutes: Option<i64>,
}

/// A slot as returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
}

impl From<&CandidateSlot> for SlotDto {
    fn from(s: &CandidateSlot) -> Self {
        Self {
            start: format_utc(s.start),
            end: format_utc(s.end),
        }
    }
}

impl SlotQuery {
    /// The requested slot length, falling back to [`DEFAULT_SLOT_MINUTES`].
    pub fn duration_minutes(&self) -> i64 {
        self.slot_duration_minutes.unwrap_or(DEFAULT_SLOT_MINUTES)
    }

    /// Parse the wire busy intervals into absolute instants.
    pub fn busy(&self) -> Result<Vec<BusyInterval>> {
        self.busy_intervals
            .iter()
            .map(|raw| Ok(BusyInterval::new(parse_instant(&raw.start)?, parse_instant(&raw.end)?)))
            .collect()
    }

    /// Validate every field and compute the slots.
    ///
    /// # Errors
    /// Any `SlotError` input variant; nothing is computed when one field is bad.
    pub fn compute(&self) -> Result<Vec<CandidateSlot>> {
        let policy = self.policy.to_policy()?;
        let busy = self.busy()?;
        slots::compute_slots(&self.date, &policy, &busy, self.duration_minutes())
    }
}

/// Run a query and convert the result to its wire form.
pub fn run_query(query: &SlotQuery) -> Result<Vec<SlotDto>> {
    Ok(query.compute()?.iter().map(SlotDto::from).collect())
}

/// Run a query given and returned as JSON strings.
pub fn run_query_json(json: &str) -> Result<String> {
    let query: SlotQuery = serde_json::from_str(json)?;
    let dtos = run_query(&query)?;
    Ok(serde_json::to_string(&dtos)?)
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with any offset (e.g., "2026-02-17T14:00:00+09:00") and
/// naive datetimes (e.g., "2026-02-17T14:00:00"), which are read as UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SlotError::InvalidInstant(format!("'{}': {}", s, e)))
}

/// Format an instant as RFC 3339 UTC with a `Z` suffix.
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

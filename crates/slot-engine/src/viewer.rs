//! Rendering absolute slots in a viewer's timezone.
//!
//! A host in Tokyo and a patient in Los Angeles see the same instants, but the
//! patient's calendar may put a slot on the previous day. Each [`LocalizedSlot`]
//! carries the viewer-local date and weekday so the caller can group by day.

use chrono::{Datelike, SecondsFormat};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interval::CandidateSlot;
use crate::policy::parse_timezone;

/// A slot expressed in the viewer's wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedSlot {
    /// RFC 3339 with the viewer's offset, e.g. `2026-03-03T16:00:00-08:00`.
    pub start: String,
    pub end: String,
    /// Viewer-local calendar date of `start`, `YYYY-MM-DD`.
    pub local_date: String,
    /// Viewer-local weekday of `start`, 0=Sunday..6=Saturday.
    pub weekday: u32,
}

/// Render `slots` in the viewer's IANA timezone, preserving order.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` if `viewer_tz` is unknown.
pub fn localize_slots(slots: &[CandidateSlot], viewer_tz: &str) -> Result<Vec<LocalizedSlot>> {
    let tz = parse_timezone(viewer_tz)?;
    Ok(slots.iter().map(|s| localize(s, tz)).collect())
}

/// Render a single slot in `tz`.
pub fn localize(slot: &CandidateSlot, tz: Tz) -> LocalizedSlot {
    let start = slot.start.with_timezone(&tz);
    let end = slot.end.with_timezone(&tz);
    LocalizedSlot {
        start: start.to_rfc3339_opts(SecondsFormat::Secs, false),
        end: end.to_rfc3339_opts(SecondsFormat::Secs, false),
        local_date: start.date_naive().format("%Y-%m-%d").to_string(),
        weekday: start.weekday().num_days_from_sunday(),
    }
}

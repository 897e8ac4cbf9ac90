//! Wall-clock to instant resolution across DST transitions.
//!
//! A host's work window is written in local wall-clock time, so every boundary
//! must be converted with the offset in effect at that specific local date-time.
//! Two local times need a rule:
//!
//! - **Gap** (spring forward): the wall-clock time does not exist. It is read
//!   with the offset in effect just before the gap, which lands it the gap's
//!   length later on the new clock (02:30 becomes 03:30 in New York).
//! - **Fold** (fall back): the wall-clock time happens twice. The earlier
//!   instant wins.

use chrono::{DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// How far back to look for the pre-gap offset. Real gaps are at most a day
/// (Pacific/Apia skipped 2011-12-30 entirely).
const GAP_SEARCH_LIMIT_HOURS: i64 = 48;

/// Resolve a local wall-clock date-time in `tz` to an absolute instant.
///
/// Never fails: gaps shift forward, folds take the earliest instant. A local
/// time whose instant falls outside chrono's range is read as UTC.
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let offset = offset_before_gap(tz, local);
            // A fixed offset maps every local time to exactly one instant.
            local
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .unwrap_or(local)
                .and_utc()
        }
    }
}

/// Start of the calendar day `date` as understood in `tz`.
///
/// Usually local midnight; in zones that spring forward at 00:00 it is the first
/// instant of the day after the gap.
pub fn start_of_day(tz: Tz, date: NaiveDate) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// The UTC offset that was in effect immediately before the gap containing `local`.
fn offset_before_gap(tz: Tz, local: NaiveDateTime) -> FixedOffset {
    let mut candidate = local;
    for _ in 0..(GAP_SEARCH_LIMIT_HOURS * 2) {
        candidate = match candidate.checked_sub_signed(Duration::minutes(30)) {
            Some(earlier) => earlier,
            None => break,
        };
        if let Some(offset) = tz.offset_from_local_datetime(&candidate).earliest() {
            return offset.fix();
        }
    }
    // Only reached at the edges of chrono's range.
    tz.offset_from_utc_datetime(&local).fix()
}

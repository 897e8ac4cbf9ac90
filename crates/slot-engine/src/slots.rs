//! Bookable slot computation for one host.
//!
//! Given a calendar date in the host's timezone, the host's [`AvailabilityPolicy`]
//! and the host's busy intervals, walk the local work window in fixed-size steps
//! and keep every step that no busy interval overlaps.
//!
//! The output is a list of absolute instants. Rendering them for a viewer in
//! another zone is a separate step (see [`crate::viewer`]).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use tracing::debug;

use crate::dst;
use crate::error::{Result, SlotError};
use crate::interval::{self, BusyInterval, CandidateSlot};
use crate::policy::AvailabilityPolicy;

/// Slot length used when the caller does not specify one.
pub const DEFAULT_SLOT_MINUTES: i64 = 60;

/// Calendar years [`parse_date`] accepts.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Longest date range [`compute_slots_range`] accepts, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Compute the bookable slots for `date` (`YYYY-MM-DD`, host-local).
///
/// # Arguments
///
/// * `date` — Calendar date as understood in `policy.timezone`.
/// * `policy` — The host's working hours and work days.
/// * `busy` — Already-booked intervals. Only those reaching into the work window matter.
/// * `slot_duration_minutes` — Length of each slot; [`DEFAULT_SLOT_MINUTES`] in the common case.
///
/// Returns slots ascending by start. An empty list means the host does not work
/// that day or the day is fully booked.
///
/// # Errors
/// Returns `SlotError::InvalidDate` if `date` is not a valid `YYYY-MM-DD` date.
/// Returns `SlotError::InvalidDuration` if `slot_duration_minutes <= 0`.
pub fn compute_slots(
    date: &str,
    policy: &AvailabilityPolicy,
    busy: &[BusyInterval],
    slot_duration_minutes: i64,
) -> Result<Vec<CandidateSlot>> {
    let date = parse_date(date)?;
    let duration = slot_duration(slot_duration_minutes)?;
    Ok(compute_slots_on(date, policy, busy, duration))
}

/// Compute the bookable slots for an already-validated date and duration.
///
/// `duration` must be positive; a non-positive duration yields no slots.
pub fn compute_slots_on(
    date: NaiveDate,
    policy: &AvailabilityPolicy,
    busy: &[BusyInterval],
    duration: Duration,
) -> Vec<CandidateSlot> {
    let tz = policy.timezone;
    // The weekday belongs to the host's calendar, not to UTC or the viewer.
    let weekday = date.weekday();
    if !policy.works_on(weekday) {
        debug!("Host in {} does not work on {} ({})", tz, date, weekday);
        return Vec::new();
    }

    // A date the zone skipped entirely (Pacific/Apia 2011-12-30) starts on the next day.
    let day_start = dst::start_of_day(tz, date);
    if day_start.with_timezone(&tz).date_naive() != date {
        debug!("{} does not exist in {}", date, tz);
        return Vec::new();
    }

    if !policy.has_window() || duration <= Duration::zero() {
        return Vec::new();
    }

    let (window_start, window_end) = work_window(date, policy);
    let blocked = interval::merge_busy(busy, window_start, window_end);

    let mut slots = Vec::new();
    let mut next_busy = 0;
    let mut cursor = window_start;

    // A slot ending exactly at closing time is still bookable.
    while let Some(end) = cursor
        .checked_add_signed(duration)
        .filter(|end| *end <= window_end)
    {
        let candidate = CandidateSlot { start: cursor, end };

        // Busy blocks that ended at or before this slot's start can never
        // overlap a later slot either.
        while next_busy < blocked.len() && blocked[next_busy].end <= candidate.start {
            next_busy += 1;
        }
        let is_blocked = blocked
            .get(next_busy)
            .is_some_and(|b| candidate.overlaps(b));

        if !is_blocked {
            slots.push(candidate);
        }
        cursor = end;
    }

    debug!(
        "Computed {} slots for {} in {} ({} busy blocks in window)",
        slots.len(),
        date,
        tz,
        blocked.len()
    );

    slots
}

/// Compute slots for every host-local date from `from` to `to`, inclusive.
///
/// The per-day results are concatenated in date order, so the output stays
/// ascending. `from > to` yields an empty list.
///
/// # Errors
/// Returns `SlotError::InvalidDate` for a malformed date,
/// `SlotError::InvalidDuration` for a non-positive duration, and
/// `SlotError::InvalidRange` when the range spans more than [`MAX_RANGE_DAYS`].
pub fn compute_slots_range(
    from: &str,
    to: &str,
    policy: &AvailabilityPolicy,
    busy: &[BusyInterval],
    slot_duration_minutes: i64,
) -> Result<Vec<CandidateSlot>> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    let duration = slot_duration(slot_duration_minutes)?;

    if from > to {
        return Ok(Vec::new());
    }

    let days = (to - from).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(SlotError::InvalidRange(format!(
            "{} to {} spans {} days (max {})",
            from, to, days, MAX_RANGE_DAYS
        )));
    }

    Ok(from
        .iter_days()
        .take_while(|d| *d <= to)
        .flat_map(|d| compute_slots_on(d, policy, busy, duration))
        .collect())
}

/// The host's work window on `date` as absolute instants.
///
/// Each boundary is resolved with the UTC offset in effect at that local time,
/// so on a DST transition day the window's absolute length differs from its
/// wall-clock length.
pub fn work_window(date: NaiveDate, policy: &AvailabilityPolicy) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = dst::resolve_local(policy.timezone, date.and_time(policy.work_start));
    let end = dst::resolve_local(policy.timezone, date.and_time(policy.work_end));
    (start, end)
}

/// Parse a `YYYY-MM-DD` calendar date with a year in [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
        .ok_or_else(|| SlotError::InvalidDate(s.to_string()))
}

fn slot_duration(minutes: i64) -> Result<Duration> {
    if minutes <= 0 {
        return Err(SlotError::InvalidDuration(minutes));
    }
    Duration::try_minutes(minutes).ok_or(SlotError::InvalidDuration(minutes))
}

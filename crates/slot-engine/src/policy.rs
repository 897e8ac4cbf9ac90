//! Host working-hour policies.
//!
//! An [`AvailabilityPolicy`] is the validated form of what a host configures:
//! an IANA timezone, a daily work window in local wall-clock time, and the
//! weekdays they work. Parsing from strings happens once, here, so the slot
//! walk itself never fails.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A set of weekdays, indexed 0=Sunday..6=Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct WorkDays(u8);

impl WorkDays {
    /// Monday through Friday.
    pub const WEEKDAYS: WorkDays = WorkDays(0b0011_1110);
    /// All seven days.
    pub const ALL: WorkDays = WorkDays(0b0111_1111);

    /// Build from weekday indices (0=Sunday..6=Saturday). Duplicates are fine.
    pub fn from_indices<I>(indices: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut bits = 0u8;
        for index in indices {
            if !(0..=6).contains(&index) {
                return Err(SlotError::InvalidWeekday(index));
            }
            bits |= 1 << index;
        }
        Ok(WorkDays(bits))
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_sunday()) != 0
    }

    /// The member indices in ascending order.
    pub fn indices(&self) -> Vec<u8> {
        (0..7).filter(|i| self.0 & (1 << i) != 0).collect()
    }
}

/// A host's recurring weekly availability.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityPolicy {
    pub timezone: Tz,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub work_days: WorkDays,
}

impl AvailabilityPolicy {
    pub fn new(timezone: Tz, work_start: NaiveTime, work_end: NaiveTime, work_days: WorkDays) -> Self {
        Self {
            timezone,
            work_start,
            work_end,
            work_days,
        }
    }

    /// Parse a policy from its string form.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` for an unknown IANA identifier,
    /// `SlotError::InvalidTimeOfDay` for an unparseable `HH:MM`, and
    /// `SlotError::InvalidWeekday` for an index outside 0..=6.
    ///
    /// A window with `work_start >= work_end` is accepted; it has no slots.
    pub fn parse(timezone: &str, work_start: &str, work_end: &str, work_days: &[i64]) -> Result<Self> {
        Ok(Self {
            timezone: parse_timezone(timezone)?,
            work_start: parse_time_of_day(work_start)?,
            work_end: parse_time_of_day(work_end)?,
            work_days: WorkDays::from_indices(work_days.iter().copied())?,
        })
    }

    /// Whether the host works on the given host-local weekday.
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.work_days.contains(weekday)
    }

    /// Whether the window can hold any slot at all.
    ///
    /// Cross-midnight windows (`work_start > work_end`) are not extended into the next day.
    pub fn has_window(&self) -> bool {
        self.work_start < self.work_end
    }
}

/// Parse an IANA timezone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
}

/// Parse a local time-of-day, `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| SlotError::InvalidTimeOfDay(s.to_string()))
}

/// The raw, serializable form of a policy, as callers send it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPolicy {
    pub timezone: String,
    pub work_start: String,
    pub work_end: String,
    pub work_days: Vec<i64>,
}

impl RawPolicy {
    pub fn to_policy(&self) -> Result<AvailabilityPolicy> {
        AvailabilityPolicy::parse(&self.timezone, &self.work_start, &self.work_end, &self.work_days)
    }
}

impl From<&AvailabilityPolicy> for RawPolicy {
    fn from(p: &AvailabilityPolicy) -> Self {
        Self {
            timezone: p.timezone.name().to_string(),
            work_start: p.work_start.format("%H:%M").to_string(),
            work_end: p.work_end.format("%H:%M").to_string(),
            work_days: p.work_days.indices().into_iter().map(i64::from).collect(),
        }
    }
}

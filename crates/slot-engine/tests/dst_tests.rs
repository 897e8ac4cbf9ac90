//! DST transition days: the work window follows local wall-clock time, so its
//! UTC boundaries move with the offset in effect on that date.

use chrono::{DateTime, Utc};
use slot_engine::{compute_slots, AvailabilityPolicy};

const EVERY_DAY: [i64; 7] = [0, 1, 2, 3, 4, 5, 6];

fn at(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn policy(tz: &str, start: &str, end: &str) -> AvailabilityPolicy {
    AvailabilityPolicy::parse(tz, start, end, &EVERY_DAY).unwrap()
}

#[test]
fn new_york_spring_forward_uses_daylight_offset() {
    // 2026-03-08: 02:00 EST -> 03:00 EDT. 09:00 EDT is 13:00 UTC, not 14:00.
    let slots = compute_slots("2026-03-08", &policy("America/New_York", "09:00", "17:00"), &[], 60).unwrap();

    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0].start, at("2026-03-08T13:00:00Z"));
    assert_eq!(slots[7].end, at("2026-03-08T21:00:00Z"));
}

#[test]
fn new_york_day_before_spring_forward_uses_standard_offset() {
    let slots = compute_slots("2026-03-07", &policy("America/New_York", "09:00", "17:00"), &[], 60).unwrap();
    assert_eq!(slots[0].start, at("2026-03-07T14:00:00Z"));
    assert_eq!(slots[7].end, at("2026-03-07T22:00:00Z"));
}

#[test]
fn window_spanning_spring_forward_loses_an_hour() {
    // 00:00 EST (05:00Z) to 04:00 EDT (08:00Z): three absolute hours.
    let slots = compute_slots("2026-03-08", &policy("America/New_York", "00:00", "04:00"), &[], 60).unwrap();

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].start, at("2026-03-08T05:00:00Z"));
    assert_eq!(slots[2].end, at("2026-03-08T08:00:00Z"));
}

#[test]
fn window_spanning_fall_back_gains_an_hour() {
    // 2026-11-01: 02:00 EDT -> 01:00 EST. 00:00 EDT (04:00Z) to 03:00 EST (08:00Z).
    let slots = compute_slots("2026-11-01", &policy("America/New_York", "00:00", "03:00"), &[], 60).unwrap();

    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0].start, at("2026-11-01T04:00:00Z"));
    assert_eq!(slots[3].end, at("2026-11-01T08:00:00Z"));
}

#[test]
fn window_starting_inside_gap_shifts_forward() {
    // 02:30 does not exist on 2026-03-08; it reads as 03:30 EDT (07:30Z).
    let slots = compute_slots("2026-03-08", &policy("America/New_York", "02:30", "05:30"), &[], 60).unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].start, at("2026-03-08T07:30:00Z"));
    assert_eq!(slots[1].end, at("2026-03-08T09:30:00Z"));
}

#[test]
fn window_starting_in_fold_uses_first_occurrence() {
    // 01:00 happens twice on 2026-11-01; the first is 05:00Z (EDT).
    let slots = compute_slots("2026-11-01", &policy("America/New_York", "01:00", "03:00"), &[], 60).unwrap();

    assert_eq!(slots[0].start, at("2026-11-01T05:00:00Z"));
    // 03:00 EST is 08:00Z, so three absolute hours fit.
    assert_eq!(slots.len(), 3);
}

#[test]
fn window_ending_in_fold_uses_first_occurrence() {
    // 01:30 closes at its first occurrence, 05:30Z (EDT), not 06:30Z (EST).
    let slots = compute_slots("2026-11-01", &policy("America/New_York", "00:00", "01:30"), &[], 30).unwrap();

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0].start, at("2026-11-01T04:00:00Z"));
    assert_eq!(slots[2].end, at("2026-11-01T05:30:00Z"));
}

#[test]
fn calendar_day_skipped_by_the_zone_has_no_slots() {
    // Samoa jumped from 2011-12-29 23:59 (-10) to 2011-12-31 00:00 (+14).
    let p = policy("Pacific/Apia", "09:00", "17:00");
    assert!(compute_slots("2011-12-30", &p, &[], 60).unwrap().is_empty());

    let slots = compute_slots("2011-12-31", &p, &[], 60).unwrap();
    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0].start, at("2011-12-30T19:00:00Z"));
}

#[test]
fn skipped_day_is_empty_even_when_next_day_is_a_work_day() {
    // 2011-12-30 was a Friday; only Saturday is a work day here.
    let p = AvailabilityPolicy::parse("Pacific/Apia", "09:00", "17:00", &[6]).unwrap();
    assert!(compute_slots("2011-12-30", &p, &[], 60).unwrap().is_empty());
    assert_eq!(compute_slots("2011-12-31", &p, &[], 60).unwrap().len(), 8);
}

#[test]
fn london_and_berlin_follow_european_rules() {
    // EU clocks change on 2026-03-29; the US already changed on 2026-03-08.
    let london = policy("Europe/London", "09:00", "17:00");
    let before = compute_slots("2026-03-28", &london, &[], 60).unwrap();
    let after = compute_slots("2026-03-30", &london, &[], 60).unwrap();
    assert_eq!(before[0].start, at("2026-03-28T09:00:00Z"));
    assert_eq!(after[0].start, at("2026-03-30T08:00:00Z"));

    let berlin = policy("Europe/Berlin", "09:00", "17:00");
    let on_change = compute_slots("2026-03-29", &berlin, &[], 60).unwrap();
    assert_eq!(on_change.len(), 8);
    assert_eq!(on_change[0].start, at("2026-03-29T07:00:00Z"));
}

#[test]
fn southern_hemisphere_transition() {
    // Sydney leaves daylight time on 2026-04-05 (03:00 AEDT -> 02:00 AEST).
    let sydney = policy("Australia/Sydney", "09:00", "17:00");
    let before = compute_slots("2026-04-04", &sydney, &[], 60).unwrap();
    let after = compute_slots("2026-04-05", &sydney, &[], 60).unwrap();
    assert_eq!(before[0].start, at("2026-04-03T22:00:00Z"));
    assert_eq!(after[0].start, at("2026-04-04T23:00:00Z"));
}

#[test]
fn zone_without_dst_is_stable_year_round() {
    let tokyo = policy("Asia/Tokyo", "09:00", "17:00");
    for date in ["2026-01-15", "2026-03-08", "2026-07-15", "2026-11-01"] {
        let slots = compute_slots(date, &tokyo, &[], 60).unwrap();
        assert_eq!(slots.len(), 8, "{}", date);
        assert_eq!(slots[0].start.format("%H:%M").to_string(), "00:00", "{}", date);
    }
}

//! Free-slot search within one work day.
//!
//! # Responsibility
//! - Produce ordered candidate slots of a fixed duration for one date.
//!
//! # Invariants
//! - Candidates start on a 30-minute grid anchored at each region's lower
//!   bound; the stride never depends on the requested duration, so adjacent
//!   candidates may overlap.
//! - A candidate is emitted only when it ends at or before its region's
//!   upper bound. In regions closed by an event, the cursor also stops once
//!   it reaches that bound.
//! - Regions are clipped to the business-hours window.
//! - Events started on an earlier date that run into the window move every
//!   region's lower bound up to their end.
//! - Output order is: before first event, gaps in time order, after last
//!   event; ascending start within a region. Index 0 is the top suggestion.

use crate::config::BusinessHours;
use crate::model::event::Event;
use crate::model::schedule::Slot;
use crate::service::schedule_reader::events_on;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Cursor step between candidate starts.
pub const SLOT_STRIDE_MINUTES: i64 = 30;

/// How a region's upper bound limits the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpperBound {
    /// Open work window: a candidate may start on the bound itself.
    Inclusive,
    /// Closed by an event: the cursor stops on reaching the bound.
    Exclusive,
}

/// Finds candidate slots of `duration_minutes` on `date`.
///
/// Regions come from events starting on `date`. Earlier-dated events still
/// running after opening time only delay the first usable minute.
/// Returns an empty list when nothing fits, the window is closed, or the
/// window falls outside the representable calendar.
pub fn find_slots(
    events: &[Event],
    date: NaiveDate,
    duration_minutes: u32,
    hours: BusinessHours,
) -> Vec<Slot> {
    let hours = hours.with_overrides(None, None);
    if !hours.is_open() {
        return Vec::new();
    }

    let midnight = date.and_time(NaiveTime::MIN);
    let (Some(work_start), Some(work_end)) = (
        midnight.checked_add_signed(Duration::hours(i64::from(hours.start_hour))),
        midnight.checked_add_signed(Duration::hours(i64::from(hours.end_hour))),
    ) else {
        return Vec::new();
    };
    let duration = Duration::minutes(i64::from(duration_minutes));
    let open_from = carried_over_end(events, date, work_start);

    let day_events = events_on(events, date);
    let mut slots = Vec::new();

    let (Some(first), Some(last)) = (day_events.first(), day_events.last()) else {
        scan_region(open_from, work_end, UpperBound::Inclusive, duration, &mut slots);
        return slots;
    };

    scan_region(
        open_from,
        first.start_time.min(work_end),
        UpperBound::Exclusive,
        duration,
        &mut slots,
    );

    for pair in day_events.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if next.start_time - current.end_time < duration {
            continue;
        }
        scan_region(
            current.end_time.max(open_from),
            next.start_time.min(work_end),
            UpperBound::Exclusive,
            duration,
            &mut slots,
        );
    }

    scan_region(
        last.end_time.max(open_from),
        work_end,
        UpperBound::Exclusive,
        duration,
        &mut slots,
    );

    slots
}

/// Latest end among earlier-dated events still running at `work_start`,
/// or `work_start` when none are.
fn carried_over_end(
    events: &[Event],
    date: NaiveDate,
    work_start: NaiveDateTime,
) -> NaiveDateTime {
    events
        .iter()
        .filter(|event| event.start_date() < date && event.end_time > work_start)
        .map(|event| event.end_time)
        .fold(work_start, NaiveDateTime::max)
}

fn scan_region(
    lower: NaiveDateTime,
    upper: NaiveDateTime,
    bound: UpperBound,
    duration: Duration,
    slots: &mut Vec<Slot>,
) {
    let stride = Duration::minutes(SLOT_STRIDE_MINUTES);
    let mut cursor = lower;
    loop {
        if bound == UpperBound::Exclusive && cursor >= upper {
            break;
        }
        let Some(end) = cursor.checked_add_signed(duration) else {
            break;
        };
        if end > upper {
            break;
        }
        slots.push(Slot {
            start_time: cursor,
            end_time: end,
        });
        let Some(next) = cursor.checked_add_signed(stride) else {
            break;
        };
        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::find_slots;
    use crate::config::BusinessHours;
    use crate::model::event::Event;
    use crate::model::wall_clock::{format_wall_clock, parse_wall_clock};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 19).expect("valid date")
    }

    fn event(id: &str, start: &str, end: &str) -> Event {
        Event::new(
            id,
            "block",
            parse_wall_clock(start).expect("start parses"),
            parse_wall_clock(end).expect("end parses"),
        )
        .expect("valid event")
    }

    fn starts(events: &[Event], duration: u32, hours: BusinessHours) -> Vec<String> {
        find_slots(events, day(), duration, hours)
            .iter()
            .map(|slot| format_wall_clock(slot.start_time))
            .collect()
    }

    #[test]
    fn stride_is_thirty_minutes_regardless_of_duration() {
        let found = starts(&[], 90, BusinessHours::new(9, 11));
        assert_eq!(found, vec!["2024-03-19T09:00", "2024-03-19T09:30"]);
    }

    #[test]
    fn narrow_gap_is_skipped_entirely() {
        let events = vec![
            event("a", "2024-03-19T09:00", "2024-03-19T10:00"),
            event("b", "2024-03-19T10:45", "2024-03-19T16:00"),
        ];
        let found = starts(&events, 60, BusinessHours::default());
        assert_eq!(found, vec!["2024-03-19T16:00"]);
    }

    #[test]
    fn gap_scan_anchors_on_previous_event_end() {
        let events = vec![
            event("a", "2024-03-19T09:00", "2024-03-19T10:15"),
            event("b", "2024-03-19T11:45", "2024-03-19T17:00"),
        ];
        let found = starts(&events, 60, BusinessHours::default());
        assert_eq!(found, vec!["2024-03-19T10:15", "2024-03-19T10:45"]);
    }

    #[test]
    fn events_outside_hours_do_not_leak_slots_outside_hours() {
        let events = vec![
            event("early", "2024-03-19T06:00", "2024-03-19T07:00"),
            event("late", "2024-03-19T19:00", "2024-03-19T20:00"),
        ];
        let found = find_slots(&events, day(), 60, BusinessHours::new(9, 11));
        let labels: Vec<_> = found.iter().map(|s| format_wall_clock(s.start_time)).collect();
        assert_eq!(
            labels,
            vec!["2024-03-19T09:00", "2024-03-19T09:30", "2024-03-19T10:00"]
        );
    }

    #[test]
    fn closed_window_yields_nothing() {
        assert!(find_slots(&[], day(), 30, BusinessHours::new(17, 9)).is_empty());
        assert!(find_slots(&[], day(), 30, BusinessHours::new(12, 12)).is_empty());
    }

    #[test]
    fn end_hour_twenty_four_reaches_midnight() {
        let found = find_slots(&[], day(), 60, BusinessHours::new(22, 24));
        let last = found.last().expect("late slots exist");
        assert_eq!(format_wall_clock(last.end_time), "2024-03-20T00:00");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn zero_duration_never_starts_on_an_event_boundary() {
        let events = vec![
            event("a", "2024-03-19T10:00", "2024-03-19T11:00"),
            event("b", "2024-03-19T12:00", "2024-03-19T13:00"),
        ];
        let found = starts(&events, 0, BusinessHours::new(9, 14));
        assert_eq!(
            found,
            vec![
                "2024-03-19T09:00",
                "2024-03-19T09:30",
                "2024-03-19T11:00",
                "2024-03-19T11:30",
                "2024-03-19T13:00",
                "2024-03-19T13:30"
            ]
        );
    }

    #[test]
    fn zero_duration_on_empty_day_includes_closing_time() {
        let found = starts(&[], 0, BusinessHours::new(9, 10));
        assert_eq!(
            found,
            vec!["2024-03-19T09:00", "2024-03-19T09:30", "2024-03-19T10:00"]
        );
    }

    #[test]
    fn overnight_event_from_previous_day_delays_opening() {
        let events = vec![event("night", "2024-03-18T22:00", "2024-03-19T10:00")];
        let found = starts(&events, 60, BusinessHours::new(9, 12));
        assert_eq!(
            found,
            vec!["2024-03-19T10:00", "2024-03-19T10:30", "2024-03-19T11:00"]
        );
    }

    #[test]
    fn overnight_event_also_clips_later_regions() {
        let events = vec![
            event("night", "2024-03-18T20:00", "2024-03-19T12:00"),
            event("a", "2024-03-19T09:00", "2024-03-19T09:30"),
        ];
        let found = starts(&events, 60, BusinessHours::new(9, 14));
        assert_eq!(
            found,
            vec!["2024-03-19T12:00", "2024-03-19T12:30", "2024-03-19T13:00"]
        );
    }

    #[test]
    fn window_past_the_calendar_end_yields_nothing() {
        let found = find_slots(&[], NaiveDate::MAX, 60, BusinessHours::new(9, 24));
        assert!(found.is_empty());
    }
}

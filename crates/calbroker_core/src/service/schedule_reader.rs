//! Day-by-day schedule projection.
//!
//! # Responsibility
//! - Select the events filed under a date and order them.
//! - Build contiguous multi-day views over a snapshot.
//!
//! # Invariants
//! - An event belongs to the day of its start timestamp, with no zone math.
//! - A view for `day_count` days has exactly `day_count` entries, except at
//!   the end of the representable calendar.
//! - Empty days produce empty event lists, never errors.

use crate::model::event::Event;
use crate::model::schedule::{DailySchedule, ScheduleView};
use chrono::NaiveDate;

/// Returns the events starting on `date`, sorted ascending by start time.
///
/// Events sharing a start time keep store order.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<Event> {
    let mut day_events: Vec<Event> = events
        .iter()
        .filter(|event| event.start_date() == date)
        .cloned()
        .collect();
    day_events.sort_by_key(|event| event.start_time);
    day_events
}

/// Builds the view for `day_count` consecutive days starting at `start_date`.
pub fn build_schedule_view(
    events: &[Event],
    start_date: NaiveDate,
    day_count: u32,
) -> ScheduleView {
    let schedules = start_date
        .iter_days()
        .take(day_count as usize)
        .map(|date| DailySchedule {
            date,
            events: events_on(events, date),
        })
        .collect();

    ScheduleView { schedules }
}

#[cfg(test)]
mod tests {
    use super::{build_schedule_view, events_on};
    use crate::store::seed::seed_events;
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test date should parse")
    }

    #[test]
    fn events_on_filters_by_start_date_and_sorts() {
        let mut events = seed_events();
        events.reverse();

        let day = events_on(&events, date("2024-03-19"));
        let ids: Vec<_> = day.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn view_spans_month_boundaries() {
        let view = build_schedule_view(&seed_events(), date("2024-11-29"), 5);
        let dates: Vec<_> = view.schedules.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-11-29",
                "2024-11-30",
                "2024-12-01",
                "2024-12-02",
                "2024-12-03"
            ]
        );
        assert_eq!(view.event_count(), 1);
        assert_eq!(view.schedules[3].events[0].id, "6");
    }

    #[test]
    fn zero_days_yields_empty_view() {
        let view = build_schedule_view(&seed_events(), date("2024-03-19"), 0);
        assert!(view.is_empty());
    }
}

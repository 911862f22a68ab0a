//! Fixed startup data for the managed calendar.

use crate::model::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

struct SeedEvent {
    id: &'static str,
    title: &'static str,
    day: (i32, u32, u32),
    start: (u32, u32),
    end: (u32, u32),
    description: &'static str,
    attendees: &'static [&'static str],
}

const SEED_EVENTS: &[SeedEvent] = &[
    SeedEvent {
        id: "1",
        title: "Team Standup",
        day: (2024, 3, 19),
        start: (9, 0),
        end: (9, 30),
        description: "Daily team sync",
        attendees: &["team@company.com"],
    },
    SeedEvent {
        id: "2",
        title: "Lunch Break",
        day: (2024, 3, 19),
        start: (12, 0),
        end: (13, 0),
        description: "Reserved for lunch",
        attendees: &[],
    },
    SeedEvent {
        id: "3",
        title: "Product Review",
        day: (2024, 3, 19),
        start: (14, 0),
        end: (15, 30),
        description: "Q1 product roadmap review",
        attendees: &["product@company.com"],
    },
    SeedEvent {
        id: "4",
        title: "Client Meeting",
        day: (2024, 3, 20),
        start: (10, 0),
        end: (11, 0),
        description: "Project status update",
        attendees: &["client@company.com"],
    },
    SeedEvent {
        id: "5",
        title: "Team Training",
        day: (2024, 3, 20),
        start: (15, 0),
        end: (16, 30),
        description: "New tools training session",
        attendees: &["team@company.com"],
    },
    SeedEvent {
        id: "6",
        title: "Team Training",
        day: (2024, 12, 2),
        start: (15, 0),
        end: (16, 30),
        description: "New tools training session",
        attendees: &["team@company.com"],
    },
];

/// Returns the events every fresh store starts with.
pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS.iter().map(SeedEvent::to_event).collect()
}

impl SeedEvent {
    fn to_event(&self) -> Event {
        let (year, month, day) = self.day;
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date");
        let at = |(hour, minute): (u32, u32)| -> NaiveDateTime {
            date.and_hms_opt(hour, minute, 0).expect("valid seed time")
        };

        Event {
            id: self.id.to_string(),
            title: self.title.to_string(),
            start_time: at(self.start),
            end_time: at(self.end),
            description: Some(self.description.to_string()),
            attendees: self.attendees.iter().map(|a| a.to_string()).collect(),
        }
    }
}

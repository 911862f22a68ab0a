use calbroker_core::{
    parse_date, today_info, Event, InMemoryEventStore, NewEventRequest, SchedulingService,
    SlotRequest,
};

#[test]
fn event_serialization_uses_wall_clock_wire_fields() {
    let service = SchedulingService::new(InMemoryEventStore::seeded());
    let view = service.get_schedule(Some(parse_date("2024-03-19").unwrap()), Some(1));
    let standup = &view.schedules[0].events[0];

    let json = serde_json::to_value(standup).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["title"], "Team Standup");
    assert_eq!(json["startTime"], "2024-03-19T09:00");
    assert_eq!(json["endTime"], "2024-03-19T09:30");
    assert_eq!(json["description"], "Daily team sync");
    assert_eq!(json["attendees"], serde_json::json!(["team@company.com"]));

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(&decoded, standup);
}

#[test]
fn schedule_view_serializes_dates_as_plain_strings() {
    let service = SchedulingService::new(InMemoryEventStore::seeded());
    let view = service.get_schedule(Some(parse_date("2024-12-01").unwrap()), Some(2));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["schedules"][0]["date"], "2024-12-01");
    assert_eq!(json["schedules"][0]["events"], serde_json::json!([]));
    assert_eq!(json["schedules"][1]["date"], "2024-12-02");
    assert_eq!(json["schedules"][1]["events"][0]["startTime"], "2024-12-02T15:00");
}

#[test]
fn deserialize_rejects_inverted_event_window() {
    let value = serde_json::json!({
        "id": "x",
        "title": "bad",
        "startTime": "2024-03-19T10:00",
        "endTime": "2024-03-19T09:00",
        "attendees": []
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("must be after start"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_defaults_missing_optional_fields() {
    let value = serde_json::json!({
        "id": "x",
        "title": "minimal",
        "startTime": "2024-03-19T10:00",
        "endTime": "2024-03-19T10:30"
    });

    let event: Event = serde_json::from_value(value).unwrap();
    assert_eq!(event.description, None);
    assert!(event.attendees.is_empty());

    let json = serde_json::to_value(&event).unwrap();
    assert!(json.get("description").is_none());
}

#[test]
fn tool_payloads_deserialize_into_requests() {
    let booking: NewEventRequest = serde_json::from_value(serde_json::json!({
        "title": "Sync",
        "startTime": "2024-03-21T10:00",
        "endTime": "2024-03-21T10:30"
    }))
    .unwrap();
    assert_eq!(
        booking,
        NewEventRequest::new("Sync", "2024-03-21T10:00", "2024-03-21T10:30")
    );

    let search: SlotRequest = serde_json::from_value(serde_json::json!({
        "date": "2024-03-21",
        "durationMinutes": 45,
        "endHour": 12
    }))
    .unwrap();
    assert_eq!(search.duration_minutes, Some(45));
    assert_eq!(search.start_hour, None);
    assert_eq!(search.end_hour, Some(12));
}

#[test]
fn slot_serialization_uses_wall_clock_strings() {
    let service = SchedulingService::new(InMemoryEventStore::empty());
    let slots = service.find_available_slots(&SlotRequest::new(
        parse_date("2024-03-21").unwrap(),
        30,
    ));

    let json = serde_json::to_value(slots[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "startTime": "2024-03-21T09:00",
            "endTime": "2024-03-21T09:30"
        })
    );
}

#[test]
fn today_info_wire_fields() {
    let info = today_info(parse_date("2024-03-19").unwrap());
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "date": "2024-03-19",
            "dayOfWeek": "Tuesday",
            "formatted": "March 19, 2024"
        })
    );
}

#[test]
fn service_today_describes_local_date() {
    let service = SchedulingService::new(InMemoryEventStore::empty());
    let before = chrono::Local::now().date_naive();
    let info = service.today();
    let after = chrono::Local::now().date_naive();

    assert!(info.date == before || info.date == after);
    assert_eq!(info, today_info(info.date));
}

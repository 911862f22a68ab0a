//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `calbroker_core` linkage.
//! - Print a deterministic summary of the seeded calendar.
//! - Write engine logs under the system temp directory.

use calbroker_core::{InMemoryEventStore, SchedulingService, SlotRequest};
use chrono::NaiveDate;

fn main() {
    let log_dir = std::env::temp_dir().join("calbroker-cli-logs");
    let log_level = calbroker_core::default_log_level();
    match calbroker_core::init_logging(log_level, &log_dir.to_string_lossy()) {
        Ok(()) => println!("logging level={} dir={}", log_level, log_dir.display()),
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    println!("calbroker_core ping={}", calbroker_core::ping());
    println!("calbroker_core version={}", calbroker_core::core_version());

    let service = SchedulingService::new(InMemoryEventStore::seeded());
    let hours = service.config().business_hours;
    println!(
        "seed events={} business_hours={}-{}",
        service.event_count(),
        hours.start_hour,
        hours.end_hour
    );

    let Some(probe_date) = NaiveDate::from_ymd_opt(2024, 3, 19) else {
        return;
    };
    let suggestion = service.suggest_time(&SlotRequest::new(probe_date, 60));
    let day_events = suggestion
        .schedule
        .day(probe_date)
        .map_or(0, |schedule| schedule.events.len());
    println!(
        "probe date={} events={} first_slot={}",
        probe_date,
        day_events,
        suggestion.suggested_time().as_deref().unwrap_or("none")
    );
}

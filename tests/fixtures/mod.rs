// Test fixtures - reusable test data
// Provides consistent events across the integration and property tests

#![allow(dead_code)]

use weekly_planner::models::day::DayOfWeek;
use weekly_planner::models::event::EventRecord;
use weekly_planner::models::time_slot::TimeSlot;

/// Slot for a 24-hour clock time
pub fn at(hour: u8, minute: u8) -> TimeSlot {
    TimeSlot::from_hm(hour, minute).unwrap()
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Monday 9:00 AM - 10:00 AM
    pub fn morning_lecture() -> EventRecord {
        EventRecord::new("Lecture", "Hall A", DayOfWeek::Monday, at(9, 0), at(10, 0)).unwrap()
    }

    /// Monday 10:00 AM - 11:00 AM, directly after the lecture
    pub fn office_hours() -> EventRecord {
        EventRecord::new("Office Hours", "Room 210", DayOfWeek::Monday, at(10, 0), at(11, 0))
            .unwrap()
    }

    /// Monday 9:30 AM - 10:30 AM, overlapping the lecture
    pub fn coffee_chat() -> EventRecord {
        EventRecord::new("Coffee", "Cafe", DayOfWeek::Monday, at(9, 30), at(10, 30)).unwrap()
    }

    /// Four Monday events that all overlap one another, in chronological order
    pub fn crowded_morning() -> Vec<EventRecord> {
        [(9, 0), (9, 15), (9, 30), (9, 45)]
            .into_iter()
            .enumerate()
            .map(|(i, (hour, minute))| {
                EventRecord::new(
                    format!("Meeting {}", i + 1),
                    "",
                    DayOfWeek::Monday,
                    at(hour, minute),
                    at(11, 0),
                )
                .unwrap()
            })
            .collect()
    }
}

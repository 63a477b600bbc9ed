// Event module
// The immutable record of a single planner entry

use thiserror::Error;

use crate::models::day::DayOfWeek;
use crate::models::time_slot::TimeSlot;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event must end after it starts ({start} - {end})")]
    InvalidTimeRange { start: TimeSlot, end: TimeSlot },
}

/// A scheduled item for one day of the week.
///
/// Only [`EventRecord::new`] builds one, so `end` is always after `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    name: String,
    location: String,
    day: DayOfWeek,
    start: TimeSlot,
    end: TimeSlot,
}

impl EventRecord {
    /// Create a new event record
    ///
    /// # Arguments
    /// * `name` - Event name (may be empty)
    /// * `location` - Where it happens (may be empty)
    /// * `day` - Day column the event belongs to
    /// * `start` - First slot of the event
    /// * `end` - Slot the event ends at, strictly after `start`
    ///
    /// # Examples
    /// ```
    /// use weekly_planner::models::day::DayOfWeek;
    /// use weekly_planner::models::event::EventRecord;
    /// use weekly_planner::models::time_slot::TimeSlot;
    ///
    /// let start = TimeSlot::from_hm(9, 0).unwrap();
    /// let end = TimeSlot::from_hm(10, 0).unwrap();
    /// let record = EventRecord::new("Standup", "Room 4", DayOfWeek::Monday, start, end).unwrap();
    /// assert_eq!(record.duration(), 4);
    /// ```
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        day: DayOfWeek,
        start: TimeSlot,
        end: TimeSlot,
    ) -> Result<Self, EventError> {
        if end <= start {
            return Err(EventError::InvalidTimeRange { start, end });
        }

        Ok(Self {
            name: name.into(),
            location: location.into(),
            day,
            start,
            end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn start(&self) -> TimeSlot {
        self.start
    }

    pub fn end(&self) -> TimeSlot {
        self.end
    }

    /// Length of the event in quarter-hour slots, always at least 1
    pub fn duration(&self) -> u8 {
        self.end.index() - self.start.index()
    }

    /// "9:00 AM - 10:30 AM"
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

// Time slot module
// Quarter-hour slots covering a single day

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of quarter-hour slots in a day
pub const SLOTS_PER_DAY: u8 = 96;

/// Number of slots in one hour
pub const SLOTS_PER_HOUR: u8 = 4;

/// Minutes covered by a single slot
pub const SLOT_MINUTES: u8 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeSlotError {
    #[error("time slot {0} is outside the range 0..=95")]
    OutOfRange(u8),
    #[error("'{0}' is not a valid quarter-hour time label")]
    InvalidLabel(String),
}

/// A quarter-hour offset from midnight, always in `0..=95`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const MIDNIGHT: TimeSlot = TimeSlot(0);
    pub const LAST: TimeSlot = TimeSlot(SLOTS_PER_DAY - 1);

    /// Create a slot from its index
    ///
    /// # Examples
    /// ```
    /// use weekly_planner::models::time_slot::TimeSlot;
    ///
    /// let nine = TimeSlot::new(36).unwrap();
    /// assert_eq!(nine.label(), "9:00 AM");
    /// assert!(TimeSlot::new(96).is_err());
    /// ```
    pub fn new(index: u8) -> Result<Self, TimeSlotError> {
        if index >= SLOTS_PER_DAY {
            return Err(TimeSlotError::OutOfRange(index));
        }
        Ok(Self(index))
    }

    /// Create a slot from a 24-hour clock time; minutes must be a multiple of 15
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeSlotError> {
        if hour >= 24 || minute >= 60 || minute % SLOT_MINUTES != 0 {
            return Err(TimeSlotError::InvalidLabel(format!("{hour:02}:{minute:02}")));
        }
        Self::new(hour * SLOTS_PER_HOUR + minute / SLOT_MINUTES)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn hour(self) -> u8 {
        self.0 / SLOTS_PER_HOUR
    }

    pub fn minute(self) -> u8 {
        (self.0 % SLOTS_PER_HOUR) * SLOT_MINUTES
    }

    /// 12-hour clock label, e.g. "9:00 AM" or "12:15 PM"
    pub fn label(self) -> String {
        let (hour, meridiem) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{}:{:02} {}", hour, self.minute(), meridiem)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl TryFrom<u8> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TimeSlot> for u8 {
    fn from(slot: TimeSlot) -> Self {
        slot.0
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    /// Parse a label produced by [`TimeSlot::label`] back into its slot
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeSlotError::InvalidLabel(s.to_string());

        let (clock, meridiem) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }

        let hour = match meridiem.trim().to_ascii_uppercase().as_str() {
            "AM" => hour % 12,
            "PM" => hour % 12 + 12,
            _ => return Err(invalid()),
        };

        Self::from_hm(hour, minute).map_err(|_| invalid())
    }
}

/// Label for a raw slot index. Indices past the end of the day clamp to 11:45 PM.
pub fn slot_to_label(slot: u8) -> String {
    TimeSlot::new(slot).unwrap_or(TimeSlot::LAST).label()
}

/// Iterator over every slot of a day, in 15 minute increments
#[derive(Debug, Clone, Default)]
pub struct DaySlots {
    next: u8,
}

impl Iterator for DaySlots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = TimeSlot::new(self.next).ok()?;
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SLOTS_PER_DAY.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DaySlots {}

/// The 96 slots of a day. Each call starts again from midnight.
pub fn slots_for_day() -> DaySlots {
    DaySlots::default()
}

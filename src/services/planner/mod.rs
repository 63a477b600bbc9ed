// Planner service
// Owns the seven day columns and routes submitted events into them

use thiserror::Error;

use crate::models::day::DayOfWeek;
use crate::models::event::{EventError, EventRecord};
use crate::models::settings::Settings;
use crate::models::time_slot::TimeSlot;
use crate::services::layout::{
    self, BlockHandle, ColumnGeometry, DayColumn, EventBlock, Placement, PlacementError,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("event must end after it starts ({start} - {end})")]
    InvalidTimeRange { start: TimeSlot, end: TimeSlot },
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl PlannerError {
    /// Message shown to the user when a submission is refused
    pub fn user_message(&self) -> &'static str {
        match self {
            PlannerError::InvalidTimeRange { .. } => "Please choose a time frame that is valid.",
            PlannerError::Placement(PlacementError::OverlapCapExceeded { .. }) => {
                "Unable to add event, maximum columns of three created for overlapping events."
            }
            PlannerError::Placement(PlacementError::DayMismatch { .. }) => {
                "Unable to add event to that day."
            }
        }
    }
}

impl From<EventError> for PlannerError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::InvalidTimeRange { start, end } => {
                PlannerError::InvalidTimeRange { start, end }
            }
        }
    }
}

/// The week's seven day columns, Sunday first
#[derive(Debug, Clone)]
pub struct WeeklyPlanner {
    columns: [DayColumn; 7],
}

impl WeeklyPlanner {
    pub fn new(geometry: ColumnGeometry) -> Self {
        Self {
            columns: DayOfWeek::ALL.map(|day| DayColumn::new(day, geometry)),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ColumnGeometry::from(settings))
    }

    /// Validate a submission and place it in its day column.
    ///
    /// Nothing is mounted when an error is returned. On success the result
    /// carries the new block's handle and the blocks it overlapped.
    pub fn submit(
        &mut self,
        name: &str,
        location: &str,
        day: DayOfWeek,
        start: TimeSlot,
        end: TimeSlot,
    ) -> Result<Placement, PlannerError> {
        let record = EventRecord::new(name, location, day, start, end).map_err(|err| {
            log::warn!("Rejected submission '{}': {}", name, err);
            PlannerError::from(err)
        })?;
        self.place(record)
    }

    /// Place an already-built record
    pub fn place(&mut self, record: EventRecord) -> Result<Placement, PlannerError> {
        let column = &mut self.columns[record.day().index()];
        let placement = layout::place_event(record, column)?;
        log::info!(
            "Added event to {} ({} event(s), {} column(s))",
            placement.handle.day,
            column.len(),
            column.column_count()
        );
        Ok(placement)
    }

    pub fn column(&self, day: DayOfWeek) -> &DayColumn {
        &self.columns[day.index()]
    }

    pub fn columns(&self) -> impl Iterator<Item = &DayColumn> {
        self.columns.iter()
    }

    pub fn block(&self, handle: BlockHandle) -> Option<&EventBlock> {
        self.column(handle.day).block(handle)
    }

    pub fn event_count(&self) -> usize {
        self.columns.iter().map(DayColumn::len).sum()
    }

    /// Empty every column and return them to a single track
    pub fn clear(&mut self) {
        for column in &mut self.columns {
            *column = DayColumn::new(column.day(), column.geometry());
        }
        log::info!("Cleared all events");
    }
}

impl Default for WeeklyPlanner {
    fn default() -> Self {
        Self::new(ColumnGeometry::default())
    }
}

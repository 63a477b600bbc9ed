//! Event layout engine.
//!
//! Places event records into a day column: computes each block's vertical
//! geometry from its time range, finds the blocks it visually overlaps, and
//! grows the column into a grid of up to three tracks so overlapping events
//! sit side-by-side.

pub mod column;
pub mod geometry;
pub mod reflow;

use thiserror::Error;

use crate::models::day::DayOfWeek;
use crate::models::event::EventRecord;

pub use column::{BlockHandle, DayColumn, EventBlock, PositionMode, MAX_COLUMNS};
pub use geometry::{BlockRect, ColumnGeometry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{day} already shows {overlapping} overlapping events side-by-side")]
    OverlapCapExceeded { day: DayOfWeek, overlapping: usize },
    #[error("event for {event} cannot be placed in the {column} column")]
    DayMismatch { event: DayOfWeek, column: DayOfWeek },
}

/// A successfully mounted block and the blocks it overlapped when it landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub handle: BlockHandle,
    /// Overlap set at placement time, in insertion order. Empty when the
    /// block stayed absolute.
    pub overlapped: Vec<BlockHandle>,
}

/// Place an event into its day column.
///
/// The block is mounted at an absolute offset and checked against every other
/// block in the column. With no overlap it stays absolute. Overlapping one or
/// two blocks adds a grid track (up to [`MAX_COLUMNS`]), switches the new and
/// overlapped blocks to grid placement and corrects their offsets. Overlapping
/// three or more is rejected and the column is left as it was.
///
/// Overlap is only tested against the new block. Events that overlap must be
/// added in chronological order within a day: adding one earlier than an
/// already-adjusted group, or a third event after two have been adjusted, can
/// leave blocks at the wrong height, and earlier blocks are never re-laid-out
/// when the grid gains rows later.
///
/// The returned overlap set is the one the decision was made on. After the
/// switch to grid placement the blocks sit in separate cells, so
/// [`DayColumn::overlaps_of`] no longer reports them.
pub fn place_event(
    record: EventRecord,
    column: &mut DayColumn,
) -> Result<Placement, PlacementError> {
    if record.day() != column.day() {
        return Err(PlacementError::DayMismatch {
            event: record.day(),
            column: column.day(),
        });
    }

    let geometry = column.geometry();
    let top = geometry.top_for(record.start().index());
    let height = geometry.height_for(record.duration());
    let name = record.name().to_string();

    let index = column.push(EventBlock::new(record, top, height));
    let handle = column.handle(index);
    let overlapped = column.overlapping_indices(index);

    if overlapped.is_empty() {
        log::debug!(
            "Placed '{}' in {} at {:.1}px ({:.1}px tall)",
            name,
            column.day(),
            top,
            height
        );
        return Ok(Placement {
            handle,
            overlapped: Vec::new(),
        });
    }

    if overlapped.len() >= MAX_COLUMNS as usize {
        column.pop();
        log::warn!(
            "Rejected '{}' in {}: overlaps {} events",
            name,
            column.day(),
            overlapped.len()
        );
        return Err(PlacementError::OverlapCapExceeded {
            day: column.day(),
            overlapping: overlapped.len(),
        });
    }

    if column.grow_columns() {
        log::debug!(
            "{} grid grew to {} columns",
            column.day(),
            column.column_count()
        );
    }

    column.block_mut(index).make_relative();
    let adjusted = reflow::fix_relative_positions(column, index, &overlapped);
    for &other in &overlapped {
        column.block_mut(other).make_relative();
    }

    log::debug!(
        "Placed '{}' in {} beside {} overlapping event(s), {} offset(s) corrected",
        name,
        column.day(),
        overlapped.len(),
        adjusted.len()
    );

    Ok(Placement {
        handle,
        overlapped: overlapped.into_iter().map(|i| column.handle(i)).collect(),
    })
}

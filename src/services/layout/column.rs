//! Day columns and the event blocks placed in them.
//!
//! A column renders its blocks in one of two ways. Absolute blocks float at
//! their `top` offset across the full column width. Once a column has had an
//! overlap it becomes a grid of `column_count` equal tracks, and relative
//! blocks are auto-placed into its cells in insertion order, each shifted down
//! from its cell origin by its `top` offset.

use super::geometry::{BlockRect, ColumnGeometry};
use crate::models::day::DayOfWeek;
use crate::models::event::EventRecord;

/// Maximum number of side-by-side tracks a day column may grow to
pub const MAX_COLUMNS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionMode {
    Absolute,
    Relative,
}

/// Identifies a block mounted in one of the planner's day columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHandle {
    pub day: DayOfWeek,
    pub index: usize,
}

/// The placed form of an event record
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    record: EventRecord,
    top: f32,
    height: f32,
    position_mode: PositionMode,
}

impl EventBlock {
    pub(crate) fn new(record: EventRecord, top: f32, height: f32) -> Self {
        Self {
            record,
            top,
            height,
            position_mode: PositionMode::Absolute,
        }
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn position_mode(&self) -> PositionMode {
        self.position_mode
    }

    pub fn is_relative(&self) -> bool {
        self.position_mode == PositionMode::Relative
    }

    pub(crate) fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    /// One-way switch into grid placement
    pub(crate) fn make_relative(&mut self) {
        self.position_mode = PositionMode::Relative;
    }
}

#[derive(Debug, Clone)]
pub struct DayColumn {
    day: DayOfWeek,
    geometry: ColumnGeometry,
    column_count: u8,
    blocks: Vec<EventBlock>,
}

impl DayColumn {
    pub fn new(day: DayOfWeek, geometry: ColumnGeometry) -> Self {
        Self {
            day,
            geometry,
            column_count: 1,
            blocks: Vec::new(),
        }
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn geometry(&self) -> ColumnGeometry {
        self.geometry
    }

    /// Number of grid tracks, 1 until the first overlap
    pub fn column_count(&self) -> u8 {
        self.column_count
    }

    pub fn blocks(&self) -> &[EventBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = BlockHandle> + '_ {
        (0..self.blocks.len()).map(|index| self.handle(index))
    }

    pub fn block(&self, handle: BlockHandle) -> Option<&EventBlock> {
        self.index_of(handle).map(|index| &self.blocks[index])
    }

    /// Number of grid rows currently occupied by relative blocks
    pub fn row_track_count(&self) -> usize {
        let in_flow = self.blocks.iter().filter(|b| b.is_relative()).count();
        in_flow.div_ceil(self.column_count as usize).max(1)
    }

    pub fn row_track_height(&self) -> f32 {
        self.geometry.height / self.row_track_count() as f32
    }

    /// Where a block currently shows up inside the column
    pub fn rendered_rect(&self, handle: BlockHandle) -> Option<BlockRect> {
        self.index_of(handle).map(|index| self.rendered_rect_at(index))
    }

    /// Rendered rectangles of every block, in insertion order
    pub fn rendered_rects(&self) -> Vec<BlockRect> {
        (0..self.blocks.len())
            .map(|index| self.rendered_rect_at(index))
            .collect()
    }

    /// Blocks whose rendered rectangle currently intersects the given block's.
    /// Reading this does not change the column. Blocks already moved into
    /// separate grid cells no longer count; the overlap set a block was placed
    /// with is returned by `place_event`.
    pub fn overlaps_of(&self, handle: BlockHandle) -> Vec<BlockHandle> {
        match self.index_of(handle) {
            Some(index) => self
                .overlapping_indices(index)
                .into_iter()
                .map(|other| self.handle(other))
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn handle(&self, index: usize) -> BlockHandle {
        BlockHandle {
            day: self.day,
            index,
        }
    }

    pub(crate) fn overlapping_indices(&self, index: usize) -> Vec<usize> {
        let rects = self.rendered_rects();
        let target = rects[index];
        rects
            .iter()
            .enumerate()
            .filter(|(other, rect)| *other != index && target.intersects(rect))
            .map(|(other, _)| other)
            .collect()
    }

    pub(crate) fn push(&mut self, block: EventBlock) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    pub(crate) fn pop(&mut self) -> Option<EventBlock> {
        self.blocks.pop()
    }

    pub(crate) fn block_mut(&mut self, index: usize) -> &mut EventBlock {
        &mut self.blocks[index]
    }

    /// Add one grid track, up to [`MAX_COLUMNS`]. Returns whether the count changed.
    pub(crate) fn grow_columns(&mut self) -> bool {
        if self.column_count < MAX_COLUMNS {
            self.column_count += 1;
            true
        } else {
            false
        }
    }

    fn index_of(&self, handle: BlockHandle) -> Option<usize> {
        (handle.day == self.day && handle.index < self.blocks.len()).then_some(handle.index)
    }

    fn rendered_rect_at(&self, index: usize) -> BlockRect {
        let block = &self.blocks[index];
        if !block.is_relative() {
            return BlockRect::from_min_size(0.0, block.top, self.geometry.width, block.height);
        }

        // Grid auto-placement: relative blocks fill cells left to right, top to bottom
        let cell = self.blocks[..index]
            .iter()
            .filter(|b| b.is_relative())
            .count();
        let columns = self.column_count as usize;
        let track_width = self.geometry.width / columns as f32;
        let row = cell / columns;
        let track = cell % columns;

        BlockRect::from_min_size(
            track as f32 * track_width,
            row as f32 * self.row_track_height() + block.top,
            track_width,
            block.height,
        )
    }
}

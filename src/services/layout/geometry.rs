//! Pixel geometry for day columns and the blocks placed in them.

use crate::models::settings::{Settings, SLOT_SPAN};

/// Axis-aligned rectangle in column-local pixels (origin at the column's top left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BlockRect {
    pub fn from_min_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Two rectangles overlap unless one lies entirely left of, right of,
    /// above, or below the other. Shared edges do not count as overlap.
    pub fn intersects(&self, other: &BlockRect) -> bool {
        !(self.right <= other.left
            || self.left >= other.right
            || self.bottom <= other.top
            || self.top >= other.bottom)
    }
}

/// Fixed dimensions of a day column's display area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    pub height: f32,
    pub padding: f32,
    pub width: f32,
    pub block_min_height: f32,
}

impl ColumnGeometry {
    /// Pixels per quarter-hour slot
    pub fn height_step(&self) -> f32 {
        (self.height - self.padding - self.block_min_height) / SLOT_SPAN
    }

    /// Offset from the column top for an event starting at `start` slots
    pub fn top_for(&self, start: u8) -> f32 {
        self.height_step() * start as f32
    }

    /// Block height for an event lasting `duration` slots
    pub fn height_for(&self, duration: u8) -> f32 {
        self.block_min_height + self.height_step() * duration.saturating_sub(1) as f32
    }
}

impl Default for ColumnGeometry {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for ColumnGeometry {
    fn from(settings: &Settings) -> Self {
        Self {
            height: settings.column_height,
            padding: settings.column_padding,
            width: settings.column_width,
            block_min_height: settings.block_min_height,
        }
    }
}

//! Offset correction for blocks entering grid placement.
//!
//! An absolute block's `top` is measured from the column top. Once it becomes
//! relative it is measured from its grid cell instead, so a block landing on a
//! lower row would be pushed down by every row above it. Reflow subtracts that
//! shift so the block keeps the vertical position it had while absolute.

use super::column::DayColumn;

/// Correct the offsets of a block that just turned relative and of the
/// not-yet-relative blocks it overlaps.
///
/// Must run after `new_index` is relative and before the overlapped blocks
/// are. Blocks that were already relative keep the offset they were given
/// when they first switched. Returns the indices whose offset was rewritten.
pub fn fix_relative_positions(
    column: &mut DayColumn,
    new_index: usize,
    overlapped: &[usize],
) -> Vec<usize> {
    let row_tracks = column.row_track_count();
    if row_tracks <= 1 {
        return Vec::new();
    }

    let shift = column.row_track_height() * (row_tracks - 1) as f32;
    let geometry = column.geometry();

    let adjusted: Vec<usize> = std::iter::once(new_index)
        .chain(
            overlapped
                .iter()
                .copied()
                .filter(|&index| !column.blocks()[index].is_relative()),
        )
        .collect();

    for &index in &adjusted {
        let start = column.blocks()[index].record().start().index();
        let fixed_top = geometry.top_for(start) - shift;
        column.block_mut(index).set_top(fixed_top);
    }

    log::debug!(
        "Reflowed {} block(s) in {} across {} row tracks (shift {:.1}px)",
        adjusted.len(),
        column.day(),
        row_tracks,
        shift
    );

    adjusted
}

// Property-based tests for the layout engine
// Checks placement invariants with random time ranges

#[path = "../fixtures/mod.rs"]
mod fixtures;

use proptest::prelude::*;
use weekly_planner::models::day::DayOfWeek;
use weekly_planner::models::event::EventRecord;
use weekly_planner::models::time_slot::TimeSlot;
use weekly_planner::services::layout::{
    place_event, ColumnGeometry, DayColumn, PositionMode, MAX_COLUMNS,
};
use weekly_planner::services::planner::{PlannerError, WeeklyPlanner};

fn record(start: u8, end: u8) -> EventRecord {
    EventRecord::new(
        "",
        "",
        DayOfWeek::Wednesday,
        TimeSlot::new(start).unwrap(),
        TimeSlot::new(end).unwrap(),
    )
    .unwrap()
}

/// A valid (start, end) pair of slots
fn time_range() -> impl Strategy<Value = (u8, u8)> {
    (0u8..95).prop_flat_map(|start| (Just(start), (start + 1)..=95u8))
}

proptest! {
    /// Property: the first event of a day is absolute at height_step * start
    #[test]
    fn prop_first_event_is_absolute((start, end) in time_range()) {
        let mut column = DayColumn::new(DayOfWeek::Wednesday, ColumnGeometry::default());
        let placement = place_event(record(start, end), &mut column).unwrap();

        prop_assert!(placement.overlapped.is_empty());
        let block = column.block(placement.handle).unwrap();
        prop_assert_eq!(block.position_mode(), PositionMode::Absolute);
        prop_assert_eq!(block.top(), column.geometry().height_step() * start as f32);
    }

    /// Property: events that do not share any time never overlap
    #[test]
    fn prop_disjoint_ranges_do_not_overlap(
        (start, split) in time_range(),
        extra in 1u8..20,
    ) {
        let end = split.saturating_add(extra).min(95);
        prop_assume!(end > split);

        let mut column = DayColumn::new(DayOfWeek::Wednesday, ColumnGeometry::default());
        place_event(record(start, split), &mut column).unwrap();
        let later = place_event(record(split, end), &mut column).unwrap();

        prop_assert!(later.overlapped.is_empty());
        prop_assert!(column.overlaps_of(later.handle).is_empty());
        prop_assert_eq!(column.column_count(), 1);
    }

    /// Property: column count never exceeds the cap, and a rejected event
    /// leaves the column untouched
    #[test]
    fn prop_column_count_is_capped(ranges in prop::collection::vec(time_range(), 1..25)) {
        let mut column = DayColumn::new(DayOfWeek::Wednesday, ColumnGeometry::default());

        for (start, end) in ranges {
            let before = column.len();
            let count_before = column.column_count();
            match place_event(record(start, end), &mut column) {
                Ok(placement) => {
                    prop_assert_eq!(column.len(), before + 1);
                    prop_assert!(placement.overlapped.len() < MAX_COLUMNS as usize);
                }
                Err(_) => {
                    prop_assert_eq!(column.len(), before);
                    prop_assert_eq!(column.column_count(), count_before);
                }
            }
            prop_assert!(column.column_count() >= count_before);
            prop_assert!(column.column_count() <= MAX_COLUMNS);
        }
    }

    /// Property: any pair of slots either builds a record that places cleanly
    /// or is refused as an invalid time range
    #[test]
    fn prop_only_forward_ranges_are_placed(start in 0u8..96, end in 0u8..96) {
        let mut planner = WeeklyPlanner::default();
        let result = planner.submit(
            "",
            "",
            DayOfWeek::Thursday,
            TimeSlot::new(start).unwrap(),
            TimeSlot::new(end).unwrap(),
        );

        if end > start {
            let placement = result.unwrap();
            let block = planner.block(placement.handle).unwrap();
            prop_assert!(block.record().duration() >= 1);
            prop_assert!(block.height() > 0.0);
        } else {
            prop_assert!(matches!(result, Err(PlannerError::InvalidTimeRange { .. })), "expected InvalidTimeRange error");
            prop_assert_eq!(planner.event_count(), 0);
        }
    }

    /// Property: reading overlap sets does not change them
    #[test]
    fn prop_overlap_sets_are_idempotent(ranges in prop::collection::vec(time_range(), 1..12)) {
        let mut column = DayColumn::new(DayOfWeek::Wednesday, ColumnGeometry::default());
        for (start, end) in ranges {
            let _ = place_event(record(start, end), &mut column);
        }

        let first: Vec<_> = column.handles().map(|h| column.overlaps_of(h)).collect();
        let second: Vec<_> = column.handles().map(|h| column.overlaps_of(h)).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: a block turns relative at most once and never back
    #[test]
    fn prop_relative_is_permanent(ranges in prop::collection::vec(time_range(), 2..15)) {
        let mut column = DayColumn::new(DayOfWeek::Wednesday, ColumnGeometry::default());
        let mut relative_so_far = Vec::new();

        for (start, end) in ranges {
            let _ = place_event(record(start, end), &mut column);
            for index in relative_so_far.iter().copied() {
                let handle = column.handles().nth(index).unwrap();
                prop_assert!(column.block(handle).unwrap().is_relative());
            }
            relative_so_far = column
                .blocks()
                .iter()
                .enumerate()
                .filter(|(_, b)| b.is_relative())
                .map(|(i, _)| i)
                .collect();
        }
    }
}

#[test]
fn test_fixture_overlap_example() {
    let mut column = DayColumn::new(DayOfWeek::Monday, ColumnGeometry::default());
    let lecture = place_event(fixtures::events::morning_lecture(), &mut column).unwrap();
    let coffee = place_event(fixtures::events::coffee_chat(), &mut column).unwrap();

    assert_eq!(coffee.overlapped, vec![lecture.handle]);
    assert_eq!(column.column_count(), 2);
}

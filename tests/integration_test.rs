// Integration tests for the planner: submissions flowing through layout
mod fixtures;

use fixtures::{at, events};
use pretty_assertions::assert_eq;
use weekly_planner::models::day::DayOfWeek;
use weekly_planner::models::settings::Settings;
use weekly_planner::services::layout::{PlacementError, PositionMode};
use weekly_planner::services::planner::{PlannerError, WeeklyPlanner};
use weekly_planner::services::settings::SettingsService;

#[test]
fn test_first_event_is_absolute_at_its_start() {
    let mut planner = WeeklyPlanner::default();
    let handle = planner.place(events::morning_lecture()).unwrap().handle;

    let column = planner.column(DayOfWeek::Monday);
    let block = planner.block(handle).unwrap();
    assert_eq!(block.position_mode(), PositionMode::Absolute);
    assert_eq!(block.top(), column.geometry().height_step() * 36.0);
}

#[test]
fn test_back_to_back_events_stay_in_one_column() {
    let mut planner = WeeklyPlanner::default();
    planner.place(events::morning_lecture()).unwrap();
    let placement = planner.place(events::office_hours()).unwrap();

    let column = planner.column(DayOfWeek::Monday);
    assert!(placement.overlapped.is_empty());
    assert!(column.overlaps_of(placement.handle).is_empty());
    assert_eq!(column.column_count(), 1);
}

#[test]
fn test_overlapping_events_sit_side_by_side() {
    let mut planner = WeeklyPlanner::default();
    let lecture = planner.place(events::morning_lecture()).unwrap().handle;
    let coffee = planner.place(events::coffee_chat()).unwrap();

    let column = planner.column(DayOfWeek::Monday);
    assert_eq!(coffee.overlapped, vec![lecture]);
    assert_eq!(column.column_count(), 2);

    // Once side by side they no longer overlap on screen
    let left = column.rendered_rect(lecture).unwrap();
    let right = column.rendered_rect(coffee.handle).unwrap();
    assert!(left.right <= right.left);
    assert!(column.overlaps_of(coffee.handle).is_empty());
}

#[test]
fn test_crowded_morning_hits_the_cap() {
    let mut planner = WeeklyPlanner::default();
    let mut crowded = events::crowded_morning();
    let fourth = crowded.pop().unwrap();
    for record in crowded {
        planner.place(record).unwrap();
    }

    let result = planner.place(fourth);

    assert_eq!(
        result,
        Err(PlannerError::Placement(PlacementError::OverlapCapExceeded {
            day: DayOfWeek::Monday,
            overlapping: 3,
        }))
    );
    let column = planner.column(DayOfWeek::Monday);
    assert_eq!(column.len(), 3);
    assert_eq!(column.column_count(), 3);
}

#[test]
fn test_other_days_are_unaffected() {
    let mut planner = WeeklyPlanner::default();
    planner.place(events::morning_lecture()).unwrap();
    planner.place(events::coffee_chat()).unwrap();
    planner
        .submit("Swim", "Pool", DayOfWeek::Tuesday, at(9, 0), at(10, 0))
        .unwrap();

    assert_eq!(planner.column(DayOfWeek::Tuesday).column_count(), 1);
    assert_eq!(planner.event_count(), 3);
}

#[test]
fn test_planner_uses_settings_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let service = SettingsService::new(dir.path().join("settings.toml"));

    let settings = Settings {
        column_height: 2000.0,
        column_width: 90.0,
        ..Settings::default()
    };
    service.update(&settings).expect("Failed to save settings");

    let loaded = service.get().expect("Failed to load settings");
    let planner = WeeklyPlanner::from_settings(&loaded);

    let geometry = planner.column(DayOfWeek::Saturday).geometry();
    assert_eq!(geometry.height, 2000.0);
    assert_eq!(geometry.width, 90.0);
}

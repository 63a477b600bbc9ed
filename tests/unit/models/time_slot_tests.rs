// Unit tests for quarter-hour slot labels
// Parameterized over the boundaries of the 12-hour clock

use test_case::test_case;
use weekly_planner::models::time_slot::{slot_to_label, slots_for_day, TimeSlot};

#[test_case(0, "12:00 AM" ; "midnight")]
#[test_case(1, "12:15 AM" ; "quarter past midnight")]
#[test_case(4, "1:00 AM" ; "one in the morning")]
#[test_case(36, "9:00 AM" ; "nine in the morning")]
#[test_case(47, "11:45 AM" ; "last morning slot")]
#[test_case(48, "12:00 PM" ; "noon")]
#[test_case(49, "12:15 PM" ; "quarter past noon")]
#[test_case(50, "12:30 PM" ; "half past noon")]
#[test_case(52, "1:00 PM" ; "one in the afternoon")]
#[test_case(95, "11:45 PM" ; "last slot of the day")]
fn test_slot_label(slot: u8, expected: &str) {
    assert_eq!(slot_to_label(slot), expected);
}

#[test_case("12:00 AM", 0 ; "midnight")]
#[test_case("12:45 AM", 3 ; "before one")]
#[test_case("12:00 PM", 48 ; "noon")]
#[test_case("7:30 PM", 78 ; "evening")]
fn test_parse_label(label: &str, expected: u8) {
    assert_eq!(label.parse::<TimeSlot>().unwrap().index(), expected);
}

#[test_case("" ; "empty")]
#[test_case("0:00 AM" ; "hour zero")]
#[test_case("12:60 PM" ; "minute overflow")]
#[test_case("9:20 AM" ; "not a quarter hour")]
#[test_case("9:00 XM" ; "bad meridiem")]
fn test_parse_label_rejects(label: &str) {
    assert!(label.parse::<TimeSlot>().is_err());
}

#[test]
fn test_every_label_parses_back() {
    for slot in slots_for_day() {
        assert_eq!(slot.label().parse::<TimeSlot>().unwrap(), slot);
    }
}

#[test]
fn test_labels_are_unique() {
    let mut labels: Vec<String> = slots_for_day().map(|s| s.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 96);
}

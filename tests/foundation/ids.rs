//! Integration tests for identity types

use larder_foundation::{Height, MonthDay, Principal, RecordId, RecordKind};

// =============================================================================
// Record Identities
// =============================================================================

#[test]
fn record_id_round_trips_raw_value() {
    assert_eq!(RecordId::new(17).get(), 17);
    assert_eq!(RecordId::from(17), RecordId::new(17));
}

#[test]
fn record_id_displays_bare_number() {
    assert_eq!(RecordId::new(3).to_string(), "3");
}

// =============================================================================
// Principals
// =============================================================================

#[test]
fn principals_compare_by_text() {
    let a = Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let b = Principal::new(String::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"));
    let c = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.as_str(), "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
}

// =============================================================================
// Heights and Dates
// =============================================================================

#[test]
fn height_next_saturates() {
    assert_eq!(Height::new(1).next(), Height::new(2));
    assert_eq!(Height::new(u64::MAX).next(), Height::new(u64::MAX));
    assert_eq!(Height::default(), Height::new(0));
}

#[test]
fn month_day_displays_padded() {
    assert_eq!(MonthDay::new(6, 1).to_string(), "06-01");
    assert_eq!(MonthDay::new(12, 31).to_string(), "12-31");
}

#[test]
fn month_day_is_not_range_checked() {
    let odd = MonthDay::new(13, 40);
    assert_eq!((odd.month, odd.day), (13, 40));
}

// =============================================================================
// Record Kinds
// =============================================================================

#[test]
fn kind_names_are_kebab_case() {
    assert_eq!(RecordKind::EducationalResource.to_string(), "educational-resource");
    assert_eq!(RecordKind::Event.name(), "event");
}

//! Integration tests for submitting an ordered call stream

use larder_foundation::{ErrorCode, Height, Principal, RecordId};
use larder_registry::Outcome;
use larder_runtime::{Operation, Receipt, Registry, TickingHeight};

const TEACHER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
const STUDENT: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

/// The class scenario as it would arrive on the wire.
const CALLS: &str = r#"[
  ["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", {"op": "register-teacher",
    "name": "Maria Rodriguez", "expertise": "Fermentation", "experience_years": 15,
    "region": "Mediterranean", "contact_info": "maria@example.com", "bio": "Expert"}],
  ["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", {"op": "create-class",
    "teacher_id": 1, "technique_id": 1, "title": "Fermentation Basics",
    "description": "Basics", "max_participants": 10, "duration_hours": 3,
    "prerequisites": "None", "materials_needed": "Jars", "location": "Center",
    "scheduled_date": 1000}],
  ["ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG", {"op": "register-for-class",
    "class_id": 1, "notes": "Excited to learn!"}],
  ["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", {"op": "update-class-status",
    "id": 1, "status": "full"}],
  ["ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC", {"op": "register-for-class",
    "class_id": 1, "notes": "Me too"}]
]"#;

#[test]
fn wire_stream_produces_expected_envelopes() {
    let calls: Vec<(String, Operation)> = serde_json::from_str(CALLS).unwrap();
    let registry = Registry::new(TickingHeight::starting_at(Height::new(1)));

    let outcomes = registry.submit_all(calls).unwrap();
    let json: Vec<String> = outcomes
        .iter()
        .map(|o| serde_json::to_string(o).unwrap())
        .collect();

    assert_eq!(json[0], r#"{"value":{"id":1}}"#);
    assert_eq!(json[1], r#"{"value":{"id":1}}"#);
    assert_eq!(
        outcomes[2],
        Outcome::Value(Receipt::Participant(larder_registry::RelationKey::new(
            RecordId::new(1),
            Principal::from(STUDENT)
        )))
    );
    assert_eq!(json[3], r#"{"value":{"id":1}}"#);
    assert_eq!(json[4], r#"{"error":400}"#);
}

#[test]
fn each_call_gets_its_own_height() {
    let registry = Registry::new(TickingHeight::starting_at(Height::new(50)));
    let calls: Vec<(String, Operation)> = serde_json::from_str(CALLS).unwrap();
    registry.submit_all(calls).unwrap();

    let (teacher_height, class_height, joined_height) = registry
        .read(|l| {
            (
                l.teacher(RecordId::new(1)).unwrap().registration_date,
                l.class(RecordId::new(1)).unwrap().created_at,
                l.class_participant(RecordId::new(1), &Principal::from(STUDENT))
                    .unwrap()
                    .registration_date,
            )
        })
        .unwrap();

    assert_eq!(teacher_height, Height::new(50));
    assert_eq!(class_height, Height::new(51));
    assert_eq!(joined_height, Height::new(52));
}

#[test]
fn forbidden_call_is_reported_not_raised() {
    let registry = Registry::new(TickingHeight::starting_at(Height::new(1)));
    let outcome = registry
        .submit(
            TEACHER,
            Operation::UpdateEventStatus {
                id: RecordId::new(1),
                status: "done".to_string(),
            },
        )
        .unwrap();

    assert_eq!(outcome.error_code(), Some(ErrorCode::NotFound));
    assert!(registry.snapshot().unwrap().is_empty());
}

//! Integration tests for relation stores
//!
//! Tests composite keys, overwrite semantics, and Status checks.

use larder_foundation::{RecordId, RecordKind};
use larder_storage::{RelationKey, RelationStore, Status};

#[test]
fn keys_with_same_parent_are_independent() {
    let mut steps = RelationStore::new(RecordKind::TechniqueStep);
    let t = RecordId::new(1);
    steps.put(RelationKey::new(t, 1_u32), "chop");
    steps.put(RelationKey::new(t, 2_u32), "salt");

    assert_eq!(steps.len(), 2);
    assert_eq!(steps.get(&RelationKey::new(t, 1)), Some(&"chop"));
    assert_eq!(steps.get(&RelationKey::new(t, 2)), Some(&"salt"));
}

#[test]
fn put_reports_replacement() {
    let mut steps = RelationStore::new(RecordKind::TechniqueStep);
    let key = RelationKey::new(RecordId::new(1), 1_u32);

    assert!(!steps.put(key.clone(), "first"));
    assert!(steps.put(key.clone(), "second"));
    assert_eq!(steps.len(), 1);
    assert_eq!(steps.get(&key), Some(&"second"));
}

#[test]
fn require_missing_relation_names_key() {
    let store: RelationStore<u32, ()> = RelationStore::new(RecordKind::TechniqueStep);
    let err = store
        .require(&RelationKey::new(RecordId::new(7), 3))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("7/3"));
}

#[test]
fn status_open_check_is_exact() {
    assert!(
        Status::open()
            .require(Status::OPEN, RecordKind::Class, 1)
            .is_ok()
    );

    let err = Status::new("OPEN")
        .require(Status::OPEN, RecordKind::Class, 1)
        .unwrap_err();
    assert!(err.is_invalid_state());
}

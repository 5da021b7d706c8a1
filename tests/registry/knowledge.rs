//! Integration tests for teachers, classes, participants, certifications,
//! and educational resources

use larder_registry::{
    Ledger, NewCertification, NewResource, Principal, RecordId, RecordKind, Status,
    TeacherUpdate,
};

use crate::fixtures::{OUTSIDER, STUDENT, TEACHER, as_caller, fermentation_basics, maria};

fn with_class() -> (Ledger, RecordId, RecordId) {
    let (ledger, teacher) = Ledger::new()
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();
    let (ledger, class) = ledger
        .create_class(&as_caller(TEACHER), fermentation_basics(teacher))
        .unwrap();
    (ledger, teacher, class)
}

// =============================================================================
// Teachers
// =============================================================================

#[test]
fn teacher_ids_are_contiguous_per_kind() {
    let ledger = Ledger::new();
    let (ledger, a) = ledger
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();
    let (ledger, b) = ledger
        .register_teacher(&as_caller(STUDENT), maria())
        .unwrap();

    assert_eq!((a, b), (RecordId::new(1), RecordId::new(2)));
    assert_eq!(ledger.last_id(RecordKind::Teacher), Some(b));
    assert_eq!(ledger.last_id(RecordKind::Class), None);
}

#[test]
fn update_teacher_missing_is_not_found_and_unchanged() {
    let ledger = Ledger::new();
    let err = ledger
        .update_teacher(
            &as_caller(TEACHER),
            RecordId::new(1),
            TeacherUpdate {
                expertise: String::new(),
                experience_years: 0,
                contact_info: String::new(),
                bio: String::new(),
            },
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(ledger.is_empty());
}

#[test]
fn update_teacher_by_non_owner_is_denied_and_unchanged() {
    let (ledger, id) = Ledger::new()
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();
    let before = ledger.teacher(id).unwrap().clone();

    let err = ledger
        .update_teacher(
            &as_caller(STUDENT),
            id,
            TeacherUpdate {
                expertise: "Smoking".to_string(),
                experience_years: 1,
                contact_info: "student@example.com".to_string(),
                bio: "Not Maria".to_string(),
            },
        )
        .unwrap_err();

    assert!(err.is_permission_denied());
    assert_eq!(ledger.teacher(id), Some(&before));
    assert_eq!(ledger.teacher_count(), 1);
}

#[test]
fn update_teacher_keeps_name_and_region() {
    let (ledger, id) = Ledger::new()
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();
    let (ledger, _) = ledger
        .update_teacher(
            &as_caller(TEACHER),
            id,
            TeacherUpdate {
                expertise: "Fermentation, Pickling, Smoking".to_string(),
                experience_years: 16,
                contact_info: "maria@newmail.com".to_string(),
                bio: "Updated bio".to_string(),
            },
        )
        .unwrap();

    let teacher = ledger.teacher(id).unwrap();
    assert_eq!(teacher.experience_years, 16);
    assert_eq!(teacher.name, "Maria Rodriguez");
    assert_eq!(teacher.region, "Mediterranean");
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn create_class_by_non_owner_consumes_no_id() {
    let (ledger, teacher) = Ledger::new()
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();

    let err = ledger
        .create_class(&as_caller(STUDENT), fermentation_basics(teacher))
        .unwrap_err();
    assert!(err.is_permission_denied());

    let (_, class) = ledger
        .create_class(&as_caller(TEACHER), fermentation_basics(teacher))
        .unwrap();
    assert_eq!(class, RecordId::new(1));
}

#[test]
fn new_class_is_open() {
    let (ledger, teacher, class) = with_class();
    let class = ledger.class(class).unwrap();

    assert_eq!(class.status, Status::open());
    assert_eq!(class.teacher_id, teacher);
}

#[test]
fn update_class_status_checks_teacher_owner() {
    let (ledger, _, class) = with_class();

    let err = ledger
        .update_class_status(&as_caller(STUDENT), class, "cancelled")
        .unwrap_err();
    assert!(err.is_permission_denied());

    let (ledger, _) = ledger
        .update_class_status(&as_caller(TEACHER), class, "cancelled")
        .unwrap();
    assert_eq!(ledger.class(class).unwrap().status.as_str(), "cancelled");
}

#[test]
fn update_class_status_missing_class_is_not_found() {
    let err = Ledger::new()
        .update_class_status(&as_caller(TEACHER), RecordId::new(5), "full")
        .unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// Participants
// =============================================================================

#[test]
fn register_for_open_class_creates_one_participant() {
    let (ledger, _, class) = with_class();
    let (ledger, key) = ledger
        .register_for_class(&as_caller(STUDENT), class, "Excited to learn!")
        .unwrap();

    assert_eq!(key.parent, class);
    assert_eq!(key.child, Principal::from(STUDENT));
    assert_eq!(ledger.participant_count(), 1);

    let participant = ledger
        .class_participant(class, &Principal::from(STUDENT))
        .unwrap();
    assert_eq!(participant.attendance_status.as_str(), "registered");
    assert_eq!(participant.notes, "Excited to learn!");
}

#[test]
fn registering_twice_overwrites() {
    let (ledger, _, class) = with_class();
    let (ledger, _) = ledger
        .register_for_class(&as_caller(STUDENT), class, "first")
        .unwrap();
    let (ledger, _) = ledger
        .register_for_class(&as_caller(STUDENT), class, "second")
        .unwrap();

    assert_eq!(ledger.participant_count(), 1);
    assert_eq!(
        ledger
            .class_participant(class, &Principal::from(STUDENT))
            .unwrap()
            .notes,
        "second"
    );
}

#[test]
fn register_for_missing_class_is_not_found() {
    let err = Ledger::new()
        .register_for_class(&as_caller(STUDENT), RecordId::new(1), "")
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn register_for_closed_class_is_invalid_state() {
    let (ledger, _, class) = with_class();
    let (ledger, _) = ledger
        .update_class_status(&as_caller(TEACHER), class, "in-progress")
        .unwrap();

    let err = ledger
        .register_for_class(&as_caller(OUTSIDER), class, "")
        .unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(ledger.participant_count(), 0);
}

// =============================================================================
// Certifications and Resources
// =============================================================================

#[test]
fn certification_requires_teacher_owner() {
    let (ledger, teacher) = Ledger::new()
        .register_teacher(&as_caller(TEACHER), maria())
        .unwrap();
    let cert = NewCertification {
        recipient: Principal::from(STUDENT),
        teacher_id: teacher,
        technique_id: RecordId::new(1),
        expiry_date: 5_000,
        skill_level: "Intermediate".to_string(),
        assessment_notes: "Excellent technique".to_string(),
    };

    let err = ledger
        .issue_certification(&as_caller(STUDENT), cert.clone())
        .unwrap_err();
    assert!(err.is_permission_denied());

    let (ledger, id) = ledger
        .issue_certification(&as_caller(TEACHER), cert)
        .unwrap();
    let issued = ledger.certification(id).unwrap();
    assert_eq!(issued.recipient, Principal::from(STUDENT));
    assert_eq!(issued.certification_date.get(), 100);
}

#[test]
fn certification_for_missing_teacher_is_not_found() {
    let err = Ledger::new()
        .issue_certification(
            &as_caller(TEACHER),
            NewCertification {
                recipient: Principal::from(STUDENT),
                teacher_id: RecordId::new(9),
                technique_id: RecordId::new(1),
                expiry_date: 0,
                skill_level: String::new(),
                assessment_notes: String::new(),
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn any_caller_may_add_resources() {
    let (ledger, id) = Ledger::new()
        .add_educational_resource(
            &as_caller(OUTSIDER),
            NewResource {
                title: "Fermentation Guide".to_string(),
                description: "Complete guide".to_string(),
                resource_type: "PDF".to_string(),
                technique_id: RecordId::new(404),
                content_hash: "QmXoypizjW3WknFiJnKLwHCnL72vedxjQkDDP1mXWo6uco".to_string(),
            },
        )
        .unwrap();

    let resource = ledger.educational_resource(id).unwrap();
    assert_eq!(resource.author, Principal::from(OUTSIDER));
    assert_eq!(resource.technique_id, RecordId::new(404));
}

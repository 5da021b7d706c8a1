//! Knowledge transfer: teachers, classes, participants, certifications,
//! and educational resources.
//!
//! Teachers own themselves. A class carries no principal of its own; its
//! owning teacher's owner is the only caller allowed to create it or
//! change its status. Certifications are issued through a teacher in the
//! same way. Resources are registered by any caller, who becomes the
//! author.
//!
//! Technique ids on classes, certifications, and resources are stored as
//! given and never resolved.

use std::sync::Arc;

use larder_foundation::{Height, Principal, RecordId, RecordKind, Result};
use larder_storage::{Owned, RelationKey, Status, authorize};
use serde::{Deserialize, Serialize};

use crate::context::CallContext;
use crate::ledger::Ledger;

/// A registered practitioner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// The principal that registered this teacher.
    pub owner: Principal,
    /// Display name.
    pub name: String,
    /// Areas of expertise.
    pub expertise: String,
    /// Years of practice.
    pub experience_years: u32,
    /// Home region.
    pub region: String,
    /// How to reach the teacher.
    pub contact_info: String,
    /// Free-form biography.
    pub bio: String,
    /// Height at registration.
    pub registration_date: Height,
}

impl Owned for Teacher {
    fn owner(&self) -> &Principal {
        &self.owner
    }
}

/// Fields supplied to [`Ledger::register_teacher`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    /// Display name.
    pub name: String,
    /// Areas of expertise.
    pub expertise: String,
    /// Years of practice.
    pub experience_years: u32,
    /// Home region.
    pub region: String,
    /// How to reach the teacher.
    pub contact_info: String,
    /// Free-form biography.
    pub bio: String,
}

/// Fields replaced by [`Ledger::update_teacher`].
///
/// Name and region are fixed at registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUpdate {
    /// Areas of expertise.
    pub expertise: String,
    /// Years of practice.
    pub experience_years: u32,
    /// How to reach the teacher.
    pub contact_info: String,
    /// Free-form biography.
    pub bio: String,
}

/// An instructional session run by a teacher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// The teacher running the class.
    pub teacher_id: RecordId,
    /// The technique taught. Not checked for existence.
    pub technique_id: RecordId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Intended capacity. Informational only.
    pub max_participants: u32,
    /// Length of the session.
    pub duration_hours: u32,
    /// What participants should already know.
    pub prerequisites: String,
    /// What participants should bring.
    pub materials_needed: String,
    /// Where the class is held.
    pub location: String,
    /// When the class is held, as an opaque timestamp.
    pub scheduled_date: u64,
    /// Free-form status; `"open"` at creation.
    pub status: Status,
    /// Height at creation.
    pub created_at: Height,
}

/// Fields supplied to [`Ledger::create_class`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClass {
    /// The teacher running the class; must be owned by the caller.
    pub teacher_id: RecordId,
    /// The technique taught.
    pub technique_id: RecordId,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Intended capacity.
    pub max_participants: u32,
    /// Length of the session.
    pub duration_hours: u32,
    /// What participants should already know.
    pub prerequisites: String,
    /// What participants should bring.
    pub materials_needed: String,
    /// Where the class is held.
    pub location: String,
    /// When the class is held.
    pub scheduled_date: u64,
}

/// A principal's registration in a class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassParticipant {
    /// Height at registration.
    pub registration_date: Height,
    /// `"registered"` at creation.
    pub attendance_status: Status,
    /// Notes supplied by the participant.
    pub notes: String,
}

/// A competency attestation issued through a teacher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// The certified principal.
    pub recipient: Principal,
    /// The issuing teacher.
    pub teacher_id: RecordId,
    /// The technique certified. Not checked for existence.
    pub technique_id: RecordId,
    /// Height at issue.
    pub certification_date: Height,
    /// Expiry, as an opaque height or timestamp.
    pub expiry_date: u64,
    /// Assessed skill level.
    pub skill_level: String,
    /// Assessor's notes.
    pub assessment_notes: String,
}

/// Fields supplied to [`Ledger::issue_certification`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCertification {
    /// The certified principal.
    pub recipient: Principal,
    /// The issuing teacher; must be owned by the caller.
    pub teacher_id: RecordId,
    /// The technique certified.
    pub technique_id: RecordId,
    /// Expiry.
    pub expiry_date: u64,
    /// Assessed skill level.
    pub skill_level: String,
    /// Assessor's notes.
    pub assessment_notes: String,
}

/// A learning resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalResource {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Resource type, e.g. `"PDF"`.
    pub resource_type: String,
    /// The technique covered. Not checked for existence.
    pub technique_id: RecordId,
    /// Fingerprint of the content, e.g. an IPFS CID.
    pub content_hash: String,
    /// The principal that added the resource.
    pub author: Principal,
    /// Height at creation.
    pub created_at: Height,
}

/// Fields supplied to [`Ledger::add_educational_resource`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResource {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Resource type.
    pub resource_type: String,
    /// The technique covered.
    pub technique_id: RecordId,
    /// Fingerprint of the content.
    pub content_hash: String,
}

impl Ledger {
    // --- Teachers ---

    /// Registers a teacher owned by the caller.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn register_teacher(
        &self,
        ctx: &CallContext,
        new: NewTeacher,
    ) -> Result<(Ledger, RecordId)> {
        let mut teachers = (*self.teachers).clone();
        let id = teachers.insert_next(Teacher {
            owner: ctx.caller.clone(),
            name: new.name,
            expertise: new.expertise,
            experience_years: new.experience_years,
            region: new.region,
            contact_info: new.contact_info,
            bio: new.bio,
            registration_date: ctx.height,
        });
        tracing::debug!(%id, caller = %ctx.caller, height = %ctx.height, "registered teacher");

        Ok((
            Ledger {
                teachers: Arc::new(teachers),
                ..self.clone()
            },
            id,
        ))
    }

    /// Replaces a teacher's expertise, experience, contact info, and bio.
    ///
    /// # Errors
    ///
    /// Returns not found if the teacher does not exist, or permission
    /// denied if the caller is not its owner.
    pub fn update_teacher(
        &self,
        ctx: &CallContext,
        id: RecordId,
        update: TeacherUpdate,
    ) -> Result<(Ledger, RecordId)> {
        let current = self.teachers.require_owned(id, &ctx.caller)?;
        let updated = Teacher {
            expertise: update.expertise,
            experience_years: update.experience_years,
            contact_info: update.contact_info,
            bio: update.bio,
            ..current.clone()
        };

        let mut teachers = (*self.teachers).clone();
        teachers.put(id, updated);
        tracing::debug!(%id, caller = %ctx.caller, "updated teacher");

        Ok((
            Ledger {
                teachers: Arc::new(teachers),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a teacher by id.
    #[must_use]
    pub fn teacher(&self, id: RecordId) -> Option<&Teacher> {
        self.teachers.get(id)
    }

    /// Returns the number of registered teachers.
    #[must_use]
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    // --- Classes ---

    /// Creates an open class run by one of the caller's teachers.
    ///
    /// No class id is consumed unless the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns not found if the teacher does not exist, or permission
    /// denied if the caller does not own it.
    pub fn create_class(&self, ctx: &CallContext, new: NewClass) -> Result<(Ledger, RecordId)> {
        self.teachers.require_owned(new.teacher_id, &ctx.caller)?;
        if !self.techniques.contains(new.technique_id) {
            tracing::debug!(
                technique_id = %new.technique_id,
                "class references unregistered technique"
            );
        }

        let mut classes = (*self.classes).clone();
        let id = classes.insert_next(Class {
            teacher_id: new.teacher_id,
            technique_id: new.technique_id,
            title: new.title,
            description: new.description,
            max_participants: new.max_participants,
            duration_hours: new.duration_hours,
            prerequisites: new.prerequisites,
            materials_needed: new.materials_needed,
            location: new.location,
            scheduled_date: new.scheduled_date,
            status: Status::open(),
            created_at: ctx.height,
        });
        tracing::debug!(%id, teacher_id = %new.teacher_id, caller = %ctx.caller, "created class");

        Ok((
            Ledger {
                classes: Arc::new(classes),
                ..self.clone()
            },
            id,
        ))
    }

    /// Sets a class's status to any label.
    ///
    /// Authorization goes through the class's teacher: the class must
    /// exist, then its teacher must exist, then the caller must own that
    /// teacher.
    ///
    /// # Errors
    ///
    /// Returns not found if the class or its teacher is missing, or
    /// permission denied if the caller does not own the teacher.
    pub fn update_class_status(
        &self,
        ctx: &CallContext,
        id: RecordId,
        status: impl Into<Status>,
    ) -> Result<(Ledger, RecordId)> {
        let current = self.classes.require(id)?;
        let teacher = self.teachers.require(current.teacher_id)?;
        authorize(teacher, RecordKind::Class, id, &ctx.caller)?;

        let status = status.into();
        tracing::debug!(%id, from = %current.status, to = %status, "class status changed");
        let updated = Class {
            status,
            ..current.clone()
        };

        let mut classes = (*self.classes).clone();
        classes.put(id, updated);

        Ok((
            Ledger {
                classes: Arc::new(classes),
                ..self.clone()
            },
            id,
        ))
    }

    /// Registers the caller as a participant of an open class.
    ///
    /// Registering again under the same class overwrites the earlier
    /// registration.
    ///
    /// # Errors
    ///
    /// Returns not found if the class does not exist, or invalid state if
    /// its status is not exactly `"open"`.
    pub fn register_for_class(
        &self,
        ctx: &CallContext,
        class_id: RecordId,
        notes: impl Into<String>,
    ) -> Result<(Ledger, RelationKey<Principal>)> {
        let class = self.classes.require(class_id)?;
        class
            .status
            .require(Status::OPEN, RecordKind::Class, class_id)?;

        let key = RelationKey::new(class_id, ctx.caller.clone());
        let mut participants = (*self.participants).clone();
        let replaced = participants.put(
            key.clone(),
            ClassParticipant {
                registration_date: ctx.height,
                attendance_status: Status::registered(),
                notes: notes.into(),
            },
        );
        tracing::debug!(%class_id, participant = %ctx.caller, replaced, "registered for class");

        Ok((
            Ledger {
                participants: Arc::new(participants),
                ..self.clone()
            },
            key,
        ))
    }

    /// Gets a class by id.
    #[must_use]
    pub fn class(&self, id: RecordId) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Returns the number of created classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Gets a participant's registration in a class.
    #[must_use]
    pub fn class_participant(
        &self,
        class_id: RecordId,
        participant: &Principal,
    ) -> Option<&ClassParticipant> {
        self.participants
            .get(&RelationKey::new(class_id, participant.clone()))
    }

    /// Returns the number of class registrations across all classes.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    // --- Certifications ---

    /// Issues a certification through one of the caller's teachers.
    ///
    /// No certification id is consumed unless the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns not found if the teacher does not exist, or permission
    /// denied if the caller does not own it.
    pub fn issue_certification(
        &self,
        ctx: &CallContext,
        new: NewCertification,
    ) -> Result<(Ledger, RecordId)> {
        self.teachers.require_owned(new.teacher_id, &ctx.caller)?;

        let mut certifications = (*self.certifications).clone();
        let id = certifications.insert_next(Certification {
            recipient: new.recipient,
            teacher_id: new.teacher_id,
            technique_id: new.technique_id,
            certification_date: ctx.height,
            expiry_date: new.expiry_date,
            skill_level: new.skill_level,
            assessment_notes: new.assessment_notes,
        });
        tracing::debug!(
            %id,
            teacher_id = %new.teacher_id,
            caller = %ctx.caller,
            "issued certification"
        );

        Ok((
            Ledger {
                certifications: Arc::new(certifications),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a certification by id.
    #[must_use]
    pub fn certification(&self, id: RecordId) -> Option<&Certification> {
        self.certifications.get(id)
    }

    /// Returns the number of issued certifications.
    #[must_use]
    pub fn certification_count(&self) -> usize {
        self.certifications.len()
    }

    // --- Educational resources ---

    /// Adds a resource authored by the caller.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn add_educational_resource(
        &self,
        ctx: &CallContext,
        new: NewResource,
    ) -> Result<(Ledger, RecordId)> {
        let mut resources = (*self.resources).clone();
        let id = resources.insert_next(EducationalResource {
            title: new.title,
            description: new.description,
            resource_type: new.resource_type,
            technique_id: new.technique_id,
            content_hash: new.content_hash,
            author: ctx.caller.clone(),
            created_at: ctx.height,
        });
        tracing::debug!(%id, caller = %ctx.caller, "added educational resource");

        Ok((
            Ledger {
                resources: Arc::new(resources),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a resource by id.
    #[must_use]
    pub fn educational_resource(&self, id: RecordId) -> Option<&EducationalResource> {
        self.resources.get(id)
    }

    /// Returns the number of added resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

//! The preservation knowledge registry.
//!
//! This crate provides:
//! - [`Ledger`] - Immutable snapshot of every store, with all operations
//! - [`CallContext`] - The caller and height supplied with each call
//! - [`knowledge`] - Teachers, classes, participants, certifications, resources
//! - [`seasonal`] - Seasons, preservation schedules, scheduled events
//! - [`technique`] - Techniques, steps, ingredients, technique ingredients
//! - [`Outcome`] - The `{value}` / `{error}` result envelope
//!
//! Every write takes `&self` and returns a new [`Ledger`] on success. A
//! failed write returns an error and leaves the original snapshot as it was.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod knowledge;
pub mod ledger;
pub mod outcome;
pub mod seasonal;
pub mod technique;

pub use context::CallContext;
pub use knowledge::{
    Certification, Class, ClassParticipant, EducationalResource, NewCertification,
    NewClass, NewResource, NewTeacher, Teacher, TeacherUpdate,
};
pub use ledger::Ledger;
pub use outcome::Outcome;
pub use seasonal::{
    NewEvent, NewSchedule, NewSeason, PreservationSchedule, ScheduledEvent, Season, SeasonUpdate,
};
pub use technique::{
    Ingredient, NewTechnique, Technique, TechniqueIngredient, TechniqueStep, TechniqueUpdate,
};

pub use larder_foundation::{
    Error, ErrorCode, ErrorKind, Height, MonthDay, Principal, RecordId, RecordKind, Result,
};
pub use larder_storage::{RelationKey, Status};

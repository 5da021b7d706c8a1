//! The mutating calls a caller can submit, and what they return.
//!
//! An [`Operation`] is one call in the external ordered stream. Applying
//! it to a [`Ledger`] dispatches to the matching ledger write and wraps
//! the write's return value in a [`Receipt`].

use larder_foundation::{Principal, RecordId, Result};
use larder_registry::{
    CallContext, Ingredient, Ledger, NewCertification, NewClass, NewEvent, NewResource,
    NewSchedule, NewSeason, NewTeacher, NewTechnique, RelationKey, SeasonUpdate, TeacherUpdate,
    TechniqueIngredient, TechniqueStep, TechniqueUpdate,
};
use serde::{Deserialize, Serialize};

/// One mutating call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Operation {
    // Knowledge transfer
    /// Register a teacher owned by the caller.
    RegisterTeacher(NewTeacher),
    /// Replace a teacher's mutable fields.
    UpdateTeacher {
        /// Teacher id.
        id: RecordId,
        /// New values.
        update: TeacherUpdate,
    },
    /// Create an open class.
    CreateClass(NewClass),
    /// Replace a class's status.
    UpdateClassStatus {
        /// Class id.
        id: RecordId,
        /// New status label.
        status: String,
    },
    /// Register the caller for an open class.
    RegisterForClass {
        /// Class id.
        class_id: RecordId,
        /// Participant notes.
        notes: String,
    },
    /// Issue a certification through a teacher.
    IssueCertification(NewCertification),
    /// Add an educational resource.
    AddEducationalResource(NewResource),

    // Seasonal scheduling
    /// Register a season.
    RegisterSeason(NewSeason),
    /// Replace a season's mutable fields.
    UpdateSeason {
        /// Season id.
        id: RecordId,
        /// New values.
        update: SeasonUpdate,
    },
    /// Create a preservation schedule.
    CreateSchedule(NewSchedule),
    /// Create an event for a schedule.
    CreateEvent(NewEvent),
    /// Replace an event's status.
    UpdateEventStatus {
        /// Event id.
        id: RecordId,
        /// New status label.
        status: String,
    },

    // Technique registration
    /// Register a technique owned by the caller.
    RegisterTechnique(NewTechnique),
    /// Replace a technique's mutable fields.
    UpdateTechnique {
        /// Technique id.
        id: RecordId,
        /// New values.
        update: TechniqueUpdate,
    },
    /// Write a numbered step of a technique.
    AddTechniqueStep {
        /// Technique id.
        technique_id: RecordId,
        /// Step number.
        step_number: u32,
        /// Step contents.
        step: TechniqueStep,
    },
    /// Register an ingredient.
    RegisterIngredient(Ingredient),
    /// Record a technique's use of an ingredient.
    AddTechniqueIngredient {
        /// Technique id.
        technique_id: RecordId,
        /// Ingredient id.
        ingredient_id: RecordId,
        /// How the ingredient is used.
        usage: TechniqueIngredient,
    },
}

/// The value returned by a successful [`Operation`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Receipt {
    /// A newly issued or updated entity identity.
    Id(RecordId),
    /// The key of a class participant.
    Participant(RelationKey<Principal>),
    /// The key of a technique step.
    Step(RelationKey<u32>),
    /// The key of a technique ingredient.
    TechniqueIngredient(RelationKey<RecordId>),
}

impl Receipt {
    /// Returns the entity identity, if this receipt carries one.
    #[must_use]
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }
}

impl Operation {
    /// Returns the operation's name as it appears on the wire.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::RegisterTeacher(_) => "register-teacher",
            Self::UpdateTeacher { .. } => "update-teacher",
            Self::CreateClass(_) => "create-class",
            Self::UpdateClassStatus { .. } => "update-class-status",
            Self::RegisterForClass { .. } => "register-for-class",
            Self::IssueCertification(_) => "issue-certification",
            Self::AddEducationalResource(_) => "add-educational-resource",
            Self::RegisterSeason(_) => "register-season",
            Self::UpdateSeason { .. } => "update-season",
            Self::CreateSchedule(_) => "create-schedule",
            Self::CreateEvent(_) => "create-event",
            Self::UpdateEventStatus { .. } => "update-event-status",
            Self::RegisterTechnique(_) => "register-technique",
            Self::UpdateTechnique { .. } => "update-technique",
            Self::AddTechniqueStep { .. } => "add-technique-step",
            Self::RegisterIngredient(_) => "register-ingredient",
            Self::AddTechniqueIngredient { .. } => "add-technique-ingredient",
        }
    }

    /// Applies the operation to `ledger` as `ctx`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying ledger write returns.
    pub fn apply(self, ledger: &Ledger, ctx: &CallContext) -> Result<(Ledger, Receipt)> {
        let (next, receipt) = match self {
            Self::RegisterTeacher(new) => with_id(ledger.register_teacher(ctx, new))?,
            Self::UpdateTeacher { id, update } => with_id(ledger.update_teacher(ctx, id, update))?,
            Self::CreateClass(new) => with_id(ledger.create_class(ctx, new))?,
            Self::UpdateClassStatus { id, status } => {
                with_id(ledger.update_class_status(ctx, id, status))?
            }
            Self::RegisterForClass { class_id, notes } => {
                let (next, key) = ledger.register_for_class(ctx, class_id, notes)?;
                (next, Receipt::Participant(key))
            }
            Self::IssueCertification(new) => with_id(ledger.issue_certification(ctx, new))?,
            Self::AddEducationalResource(new) => {
                with_id(ledger.add_educational_resource(ctx, new))?
            }
            Self::RegisterSeason(new) => with_id(ledger.register_season(ctx, new))?,
            Self::UpdateSeason { id, update } => with_id(ledger.update_season(ctx, id, update))?,
            Self::CreateSchedule(new) => with_id(ledger.create_schedule(ctx, new))?,
            Self::CreateEvent(new) => with_id(ledger.create_event(ctx, new))?,
            Self::UpdateEventStatus { id, status } => {
                with_id(ledger.update_event_status(ctx, id, status))?
            }
            Self::RegisterTechnique(new) => with_id(ledger.register_technique(ctx, new))?,
            Self::UpdateTechnique { id, update } => {
                with_id(ledger.update_technique(ctx, id, update))?
            }
            Self::AddTechniqueStep {
                technique_id,
                step_number,
                step,
            } => {
                let (next, key) = ledger.add_technique_step(ctx, technique_id, step_number, step)?;
                (next, Receipt::Step(key))
            }
            Self::RegisterIngredient(ingredient) => {
                with_id(ledger.register_ingredient(ctx, ingredient))?
            }
            Self::AddTechniqueIngredient {
                technique_id,
                ingredient_id,
                usage,
            } => {
                let (next, key) =
                    ledger.add_technique_ingredient(ctx, technique_id, ingredient_id, usage)?;
                (next, Receipt::TechniqueIngredient(key))
            }
        };
        Ok((next, receipt))
    }
}

fn with_id(result: Result<(Ledger, RecordId)>) -> Result<(Ledger, Receipt)> {
    result.map(|(ledger, id)| (ledger, Receipt::Id(id)))
}

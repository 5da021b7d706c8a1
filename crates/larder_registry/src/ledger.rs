//! Registry state with immutable snapshots.
//!
//! The `Ledger` is the unified interface to every record and relation
//! store. It uses persistent data structures for O(1) cloning and
//! structural sharing, so each write can build its result from a copy and
//! simply drop it when a precondition fails.

use std::sync::Arc;

use larder_foundation::{Principal, RecordId, RecordKind};
use larder_storage::{RecordStore, RelationStore};
use serde::{Deserialize, Serialize};

use crate::knowledge::{Certification, Class, ClassParticipant, EducationalResource, Teacher};
use crate::seasonal::{PreservationSchedule, ScheduledEvent, Season};
use crate::technique::{Ingredient, Technique, TechniqueIngredient, TechniqueStep};

/// Immutable snapshot of registry state.
///
/// Clone is O(1) due to structural sharing via `Arc`. All write methods
/// return a new `Ledger`; the receiver is never modified.
///
/// The serialized layout is one counter and one primary map per entity
/// class, and one map per composite relation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Registered teachers.
    pub(crate) teachers: Arc<RecordStore<Teacher>>,
    /// Classes run by teachers.
    pub(crate) classes: Arc<RecordStore<Class>>,
    /// Participants by (class, participant).
    pub(crate) participants: Arc<RelationStore<Principal, ClassParticipant>>,
    /// Issued certifications.
    pub(crate) certifications: Arc<RecordStore<Certification>>,
    /// Educational resources.
    pub(crate) resources: Arc<RecordStore<EducationalResource>>,
    /// Regional seasons.
    pub(crate) seasons: Arc<RecordStore<Season>>,
    /// Preservation schedules.
    pub(crate) schedules: Arc<RecordStore<PreservationSchedule>>,
    /// Scheduled events.
    pub(crate) events: Arc<RecordStore<ScheduledEvent>>,
    /// Preservation techniques.
    pub(crate) techniques: Arc<RecordStore<Technique>>,
    /// Technique steps by (technique, step number).
    pub(crate) steps: Arc<RelationStore<u32, TechniqueStep>>,
    /// Ingredients.
    pub(crate) ingredients: Arc<RecordStore<Ingredient>>,
    /// Technique ingredients by (technique, ingredient).
    pub(crate) technique_ingredients: Arc<RelationStore<RecordId, TechniqueIngredient>>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger: every counter at zero, every map empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            teachers: Arc::new(RecordStore::new(RecordKind::Teacher)),
            classes: Arc::new(RecordStore::new(RecordKind::Class)),
            participants: Arc::new(RelationStore::new(RecordKind::ClassParticipant)),
            certifications: Arc::new(RecordStore::new(RecordKind::Certification)),
            resources: Arc::new(RecordStore::new(RecordKind::EducationalResource)),
            seasons: Arc::new(RecordStore::new(RecordKind::Season)),
            schedules: Arc::new(RecordStore::new(RecordKind::Schedule)),
            events: Arc::new(RecordStore::new(RecordKind::Event)),
            techniques: Arc::new(RecordStore::new(RecordKind::Technique)),
            steps: Arc::new(RelationStore::new(RecordKind::TechniqueStep)),
            ingredients: Arc::new(RecordStore::new(RecordKind::Ingredient)),
            technique_ingredients: Arc::new(RelationStore::new(RecordKind::TechniqueIngredient)),
        }
    }

    /// Returns the number of records of `kind`.
    #[must_use]
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Teacher => self.teachers.len(),
            RecordKind::Class => self.classes.len(),
            RecordKind::ClassParticipant => self.participants.len(),
            RecordKind::Certification => self.certifications.len(),
            RecordKind::EducationalResource => self.resources.len(),
            RecordKind::Season => self.seasons.len(),
            RecordKind::Schedule => self.schedules.len(),
            RecordKind::Event => self.events.len(),
            RecordKind::Technique => self.techniques.len(),
            RecordKind::TechniqueStep => self.steps.len(),
            RecordKind::Ingredient => self.ingredients.len(),
            RecordKind::TechniqueIngredient => self.technique_ingredients.len(),
        }
    }

    /// Returns the most recently issued identity of an entity class.
    ///
    /// Relations have no allocator and always return `None`.
    #[must_use]
    pub fn last_id(&self, kind: RecordKind) -> Option<RecordId> {
        match kind {
            RecordKind::Teacher => self.teachers.last_id(),
            RecordKind::Class => self.classes.last_id(),
            RecordKind::Certification => self.certifications.last_id(),
            RecordKind::EducationalResource => self.resources.last_id(),
            RecordKind::Season => self.seasons.last_id(),
            RecordKind::Schedule => self.schedules.last_id(),
            RecordKind::Event => self.events.last_id(),
            RecordKind::Technique => self.techniques.last_id(),
            RecordKind::Ingredient => self.ingredients.last_id(),
            RecordKind::ClassParticipant
            | RecordKind::TechniqueStep
            | RecordKind::TechniqueIngredient => None,
        }
    }

    /// Returns true if no record of any kind is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ALL_KINDS.iter().all(|kind| self.count(*kind) == 0)
    }
}

/// Every record kind, in declaration order.
pub const ALL_KINDS: [RecordKind; 12] = [
    RecordKind::Teacher,
    RecordKind::Class,
    RecordKind::ClassParticipant,
    RecordKind::Certification,
    RecordKind::EducationalResource,
    RecordKind::Season,
    RecordKind::Schedule,
    RecordKind::Event,
    RecordKind::Technique,
    RecordKind::TechniqueStep,
    RecordKind::Ingredient,
    RecordKind::TechniqueIngredient,
];

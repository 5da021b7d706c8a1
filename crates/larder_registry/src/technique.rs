//! Technique registration: techniques, their steps, ingredients, and the
//! ingredients each technique uses.
//!
//! Steps and technique ingredients are relations keyed under the
//! technique; only the technique's owner may add them. Step numbers are
//! chosen by the caller. The ingredient id of a technique ingredient is
//! not resolved.

use std::sync::Arc;

use larder_foundation::{Height, Principal, RecordId, Result};
use larder_storage::{Owned, RelationKey};
use serde::{Deserialize, Serialize};

use crate::context::CallContext;
use crate::ledger::Ledger;

/// A registered preservation method with provenance metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    /// The principal that registered the technique.
    pub owner: Principal,
    /// Name, e.g. `"Lacto-Fermentation"`.
    pub name: String,
    /// Description.
    pub description: String,
    /// Where the technique comes from.
    pub origin_region: String,
    /// Cultural background.
    pub cultural_context: String,
    /// Approximate age of the practice.
    pub estimated_age_years: u32,
    /// Equipment required.
    pub equipment_needed: String,
    /// Difficulty, e.g. `"Beginner"`.
    pub difficulty_level: String,
    /// Height at registration.
    pub registration_date: Height,
}

impl Owned for Technique {
    fn owner(&self) -> &Principal {
        &self.owner
    }
}

/// Fields supplied to [`Ledger::register_technique`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTechnique {
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Origin region.
    pub origin_region: String,
    /// Cultural context.
    pub cultural_context: String,
    /// Approximate age.
    pub estimated_age_years: u32,
    /// Equipment required.
    pub equipment_needed: String,
    /// Difficulty.
    pub difficulty_level: String,
}

/// Fields replaced by [`Ledger::update_technique`].
///
/// Name, origin, cultural context, and age are fixed at registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueUpdate {
    /// Description.
    pub description: String,
    /// Equipment required.
    pub equipment_needed: String,
    /// Difficulty.
    pub difficulty_level: String,
}

/// One numbered step of a technique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueStep {
    /// What to do.
    pub description: String,
    /// How long it takes.
    pub duration_minutes: u32,
    /// Working temperature, as free text.
    pub temperature: String,
    /// Anything else worth knowing.
    pub special_notes: String,
}

/// An ingredient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Name.
    pub name: String,
    /// Category, e.g. `"Vegetable"`.
    pub category: String,
    /// Description.
    pub description: String,
}

/// An ingredient's use within a technique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechniqueIngredient {
    /// How much.
    pub quantity: String,
    /// How it is prepared.
    pub preparation: String,
    /// Acceptable substitutes.
    pub substitutes: String,
}

impl Ledger {
    // --- Techniques ---

    /// Registers a technique owned by the caller.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn register_technique(
        &self,
        ctx: &CallContext,
        new: NewTechnique,
    ) -> Result<(Ledger, RecordId)> {
        let mut techniques = (*self.techniques).clone();
        let id = techniques.insert_next(Technique {
            owner: ctx.caller.clone(),
            name: new.name,
            description: new.description,
            origin_region: new.origin_region,
            cultural_context: new.cultural_context,
            estimated_age_years: new.estimated_age_years,
            equipment_needed: new.equipment_needed,
            difficulty_level: new.difficulty_level,
            registration_date: ctx.height,
        });
        tracing::debug!(%id, caller = %ctx.caller, height = %ctx.height, "registered technique");

        Ok((
            Ledger {
                techniques: Arc::new(techniques),
                ..self.clone()
            },
            id,
        ))
    }

    /// Replaces a technique's description, equipment, and difficulty.
    ///
    /// # Errors
    ///
    /// Returns not found if the technique does not exist, or permission
    /// denied if the caller is not its owner.
    pub fn update_technique(
        &self,
        ctx: &CallContext,
        id: RecordId,
        update: TechniqueUpdate,
    ) -> Result<(Ledger, RecordId)> {
        let current = self.techniques.require_owned(id, &ctx.caller)?;
        let updated = Technique {
            description: update.description,
            equipment_needed: update.equipment_needed,
            difficulty_level: update.difficulty_level,
            ..current.clone()
        };

        let mut techniques = (*self.techniques).clone();
        techniques.put(id, updated);
        tracing::debug!(%id, caller = %ctx.caller, "updated technique");

        Ok((
            Ledger {
                techniques: Arc::new(techniques),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets a technique by id.
    #[must_use]
    pub fn technique(&self, id: RecordId) -> Option<&Technique> {
        self.techniques.get(id)
    }

    /// Returns the number of registered techniques.
    #[must_use]
    pub fn technique_count(&self) -> usize {
        self.techniques.len()
    }

    // --- Steps ---

    /// Writes step `step_number` of one of the caller's techniques.
    ///
    /// Writing an existing step number replaces that step.
    ///
    /// # Errors
    ///
    /// Returns not found if the technique does not exist, or permission
    /// denied if the caller is not its owner.
    pub fn add_technique_step(
        &self,
        ctx: &CallContext,
        technique_id: RecordId,
        step_number: u32,
        step: TechniqueStep,
    ) -> Result<(Ledger, RelationKey<u32>)> {
        self.techniques.require_owned(technique_id, &ctx.caller)?;

        let key = RelationKey::new(technique_id, step_number);
        let mut steps = (*self.steps).clone();
        let replaced = steps.put(key.clone(), step);
        tracing::debug!(%technique_id, step_number, replaced, "wrote technique step");

        Ok((
            Ledger {
                steps: Arc::new(steps),
                ..self.clone()
            },
            key,
        ))
    }

    /// Gets a step of a technique.
    #[must_use]
    pub fn technique_step(
        &self,
        technique_id: RecordId,
        step_number: u32,
    ) -> Option<&TechniqueStep> {
        self.steps.get(&RelationKey::new(technique_id, step_number))
    }

    /// Returns the number of steps across all techniques.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    // --- Ingredients ---

    /// Registers an ingredient. Ingredients have no owner.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` like every other write.
    pub fn register_ingredient(
        &self,
        ctx: &CallContext,
        ingredient: Ingredient,
    ) -> Result<(Ledger, RecordId)> {
        let mut ingredients = (*self.ingredients).clone();
        let id = ingredients.insert_next(ingredient);
        tracing::debug!(%id, caller = %ctx.caller, "registered ingredient");

        Ok((
            Ledger {
                ingredients: Arc::new(ingredients),
                ..self.clone()
            },
            id,
        ))
    }

    /// Gets an ingredient by id.
    #[must_use]
    pub fn ingredient(&self, id: RecordId) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    /// Returns the number of registered ingredients.
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    // --- Technique ingredients ---

    /// Records how one of the caller's techniques uses an ingredient.
    ///
    /// Writing an existing (technique, ingredient) pair replaces it.
    ///
    /// # Errors
    ///
    /// Returns not found if the technique does not exist, or permission
    /// denied if the caller is not its owner.
    pub fn add_technique_ingredient(
        &self,
        ctx: &CallContext,
        technique_id: RecordId,
        ingredient_id: RecordId,
        usage: TechniqueIngredient,
    ) -> Result<(Ledger, RelationKey<RecordId>)> {
        self.techniques.require_owned(technique_id, &ctx.caller)?;
        if !self.ingredients.contains(ingredient_id) {
            tracing::debug!(%ingredient_id, "technique references unregistered ingredient");
        }

        let key = RelationKey::new(technique_id, ingredient_id);
        let mut technique_ingredients = (*self.technique_ingredients).clone();
        let replaced = technique_ingredients.put(key.clone(), usage);
        tracing::debug!(%technique_id, %ingredient_id, replaced, "wrote technique ingredient");

        Ok((
            Ledger {
                technique_ingredients: Arc::new(technique_ingredients),
                ..self.clone()
            },
            key,
        ))
    }

    /// Gets how a technique uses an ingredient.
    #[must_use]
    pub fn technique_ingredient(
        &self,
        technique_id: RecordId,
        ingredient_id: RecordId,
    ) -> Option<&TechniqueIngredient> {
        self.technique_ingredients
            .get(&RelationKey::new(technique_id, ingredient_id))
    }

    /// Returns the number of technique ingredients across all techniques.
    #[must_use]
    pub fn technique_ingredient_count(&self) -> usize {
        self.technique_ingredients.len()
    }
}

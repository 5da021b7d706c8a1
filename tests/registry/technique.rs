//! Integration tests for techniques, steps, and ingredients

use larder_registry::{
    Height, Ingredient, Ledger, Principal, RecordId, TechniqueIngredient, TechniqueStep,
    TechniqueUpdate,
};

use crate::fixtures::{STUDENT, TEACHER, as_caller, lacto_fermentation};

fn step(description: &str, minutes: u32) -> TechniqueStep {
    TechniqueStep {
        description: description.to_string(),
        duration_minutes: minutes,
        temperature: "Room temperature".to_string(),
        special_notes: "Use non-iodized salt".to_string(),
    }
}

#[test]
fn register_technique_round_trips_all_fields() {
    let new = lacto_fermentation();
    let (ledger, id) = Ledger::new()
        .register_technique(&as_caller(TEACHER), new.clone())
        .unwrap();

    let technique = ledger.technique(id).unwrap();
    assert_eq!(technique.name, new.name);
    assert_eq!(technique.description, new.description);
    assert_eq!(technique.origin_region, new.origin_region);
    assert_eq!(technique.cultural_context, new.cultural_context);
    assert_eq!(technique.estimated_age_years, new.estimated_age_years);
    assert_eq!(technique.equipment_needed, new.equipment_needed);
    assert_eq!(technique.difficulty_level, new.difficulty_level);
    assert_eq!(technique.owner, Principal::from(TEACHER));
    assert_eq!(technique.registration_date, Height::new(100));
}

#[test]
fn update_missing_technique_is_not_found() {
    let ledger = Ledger::new();
    let err = ledger
        .update_technique(
            &as_caller(TEACHER),
            RecordId::new(1),
            TechniqueUpdate {
                description: "Updated description".to_string(),
                equipment_needed: "Glass jars".to_string(),
                difficulty_level: "Intermediate".to_string(),
            },
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(ledger.technique_count(), 0);
}

#[test]
fn steps_one_and_two_are_independent() {
    let (ledger, t) = Ledger::new()
        .register_technique(&as_caller(TEACHER), lacto_fermentation())
        .unwrap();
    let (ledger, _) = ledger
        .add_technique_step(&as_caller(TEACHER), t, 1, step("Clean and chop vegetables", 30))
        .unwrap();
    let (ledger, _) = ledger
        .add_technique_step(&as_caller(TEACHER), t, 2, step("Mix with salt", 15))
        .unwrap();

    assert_eq!(ledger.technique_step(t, 1).unwrap().description, "Clean and chop vegetables");
    assert_eq!(ledger.technique_step(t, 2).unwrap().description, "Mix with salt");
    assert_eq!(ledger.step_count(), 2);
}

#[test]
fn rewriting_a_step_replaces_it() {
    let (ledger, t) = Ledger::new()
        .register_technique(&as_caller(TEACHER), lacto_fermentation())
        .unwrap();
    let (ledger, _) = ledger
        .add_technique_step(&as_caller(TEACHER), t, 1, step("draft", 5))
        .unwrap();
    let (ledger, _) = ledger
        .add_technique_step(&as_caller(TEACHER), t, 1, step("final", 10))
        .unwrap();

    assert_eq!(ledger.step_count(), 1);
    assert_eq!(ledger.technique_step(t, 1).unwrap().duration_minutes, 10);
}

#[test]
fn only_owner_adds_technique_ingredients() {
    let (ledger, t) = Ledger::new()
        .register_technique(&as_caller(TEACHER), lacto_fermentation())
        .unwrap();
    let (ledger, salt) = ledger
        .register_ingredient(
            &as_caller(STUDENT),
            Ingredient {
                name: "Salt".to_string(),
                category: "Mineral".to_string(),
                description: "Non-iodized sea salt".to_string(),
            },
        )
        .unwrap();
    let usage = TechniqueIngredient {
        quantity: "2 tablespoons".to_string(),
        preparation: "Dissolved".to_string(),
        substitutes: "Kosher salt".to_string(),
    };

    let err = ledger
        .add_technique_ingredient(&as_caller(STUDENT), t, salt, usage.clone())
        .unwrap_err();
    assert!(err.is_permission_denied());

    let (ledger, key) = ledger
        .add_technique_ingredient(&as_caller(TEACHER), t, salt, usage)
        .unwrap();
    assert_eq!((key.parent, key.child), (t, salt));
    assert_eq!(ledger.technique_ingredient_count(), 1);
}

#[test]
fn technique_ingredient_on_missing_technique_is_not_found() {
    let err = Ledger::new()
        .add_technique_ingredient(
            &as_caller(TEACHER),
            RecordId::new(1),
            RecordId::new(1),
            TechniqueIngredient {
                quantity: String::new(),
                preparation: String::new(),
                substitutes: String::new(),
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
}

//! Shared callers and record builders.

use larder_registry::{
    CallContext, Height, MonthDay, NewClass, NewSeason, NewTeacher, NewTechnique, RecordId,
};

pub const TEACHER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const STUDENT: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
pub const OUTSIDER: &str = "ST2JHG361ZXG51QTKY2NQCVBPPRRE2KZB1HR05NNC";

pub fn as_caller(caller: &str) -> CallContext {
    CallContext::new(caller, Height::new(100))
}

pub fn maria() -> NewTeacher {
    NewTeacher {
        name: "Maria Rodriguez".to_string(),
        expertise: "Fermentation, Pickling".to_string(),
        experience_years: 15,
        region: "Mediterranean".to_string(),
        contact_info: "maria@example.com".to_string(),
        bio: "Traditional fermentation expert".to_string(),
    }
}

pub fn fermentation_basics(teacher_id: RecordId) -> NewClass {
    NewClass {
        teacher_id,
        technique_id: RecordId::new(1),
        title: "Fermentation Basics".to_string(),
        description: "Learn the basics of vegetable fermentation".to_string(),
        max_participants: 10,
        duration_hours: 3,
        prerequisites: "None".to_string(),
        materials_needed: "Jars, salt, vegetables".to_string(),
        location: "Community Center".to_string(),
        scheduled_date: 1_000,
    }
}

pub fn summer() -> NewSeason {
    NewSeason {
        name: "Summer".to_string(),
        start: MonthDay::new(6, 1),
        end: MonthDay::new(8, 31),
        region: "Northern Hemisphere".to_string(),
        climate_notes: "Hot and humid".to_string(),
    }
}

pub fn lacto_fermentation() -> NewTechnique {
    NewTechnique {
        name: "Lacto-Fermentation".to_string(),
        description: "Preserving vegetables using salt brine".to_string(),
        origin_region: "Global".to_string(),
        cultural_context: "Found in many cultures worldwide".to_string(),
        estimated_age_years: 5000,
        equipment_needed: "Glass jars, weights, salt".to_string(),
        difficulty_level: "Beginner".to_string(),
    }
}

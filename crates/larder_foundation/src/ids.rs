//! Record identities, caller principals, and ledger heights.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a record within one entity class.
///
/// Identities are issued by an `IdentityAllocator`, start at 1 and are
/// never reused. Zero is never issued.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a record id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of a caller.
///
/// Principals are opaque strings supplied by the execution environment
/// with each call. Equality is exact; no normalization is applied.
/// Cloning is O(1).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Principal(Arc<str>);

impl Principal {
    /// Creates a principal from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Principal {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A position in the external, monotonically increasing height sequence.
///
/// Recorded on records as their registration or creation timestamp.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Height(u64);

impl Height {
    /// Creates a height from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the following height.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month and day, without a year.
///
/// Values are stored exactly as supplied; range checking is left to callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthDay {
    /// Month of the year (1-12 by convention).
    pub month: u8,
    /// Day of the month (1-31 by convention).
    pub day: u8,
}

impl MonthDay {
    /// Creates a month/day pair.
    #[must_use]
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// The entity classes and relations held by the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RecordKind {
    /// A registered practitioner.
    Teacher,
    /// An instructional session run by a teacher.
    Class,
    /// A participant's registration in a class.
    ClassParticipant,
    /// A competency attestation.
    Certification,
    /// A learning resource.
    EducationalResource,
    /// A regional season.
    Season,
    /// An optimal window for applying a technique to a food item.
    Schedule,
    /// A calendared occurrence of a schedule.
    Event,
    /// A preservation technique.
    Technique,
    /// A numbered step of a technique.
    TechniqueStep,
    /// An ingredient.
    Ingredient,
    /// An ingredient's use within a technique.
    TechniqueIngredient,
}

impl RecordKind {
    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Class => "class",
            Self::ClassParticipant => "class-participant",
            Self::Certification => "certification",
            Self::EducationalResource => "educational-resource",
            Self::Season => "season",
            Self::Schedule => "schedule",
            Self::Event => "event",
            Self::Technique => "technique",
            Self::TechniqueStep => "technique-step",
            Self::Ingredient => "ingredient",
            Self::TechniqueIngredient => "technique-ingredient",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Free-form status labels.
//!
//! Classes and scheduled events carry a status string. Any value may
//! replace any other; there is no transition table. The only rule read
//! from a status is the exact-match check in [`Status::require`].

use std::fmt;

use larder_foundation::{Error, RecordKind, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A status label attached to a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Status(String);

impl Status {
    /// Initial status of a class; the only status that accepts registrations.
    pub const OPEN: &'static str = "open";
    /// Initial status of a scheduled event.
    pub const SCHEDULED: &'static str = "scheduled";
    /// Initial attendance status of a class participant.
    pub const REGISTERED: &'static str = "registered";

    /// Creates a status from any string.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The initial status of a class.
    #[must_use]
    pub fn open() -> Self {
        Self::new(Self::OPEN)
    }

    /// The initial status of a scheduled event.
    #[must_use]
    pub fn scheduled() -> Self {
        Self::new(Self::SCHEDULED)
    }

    /// The initial attendance status of a participant.
    #[must_use]
    pub fn registered() -> Self {
        Self::new(Self::REGISTERED)
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the label equals `label` exactly.
    #[must_use]
    pub fn is(&self, label: &str) -> bool {
        self.0 == label
    }

    /// Requires the label to equal `expected` exactly.
    ///
    /// # Errors
    ///
    /// Returns an invalid state error naming the record and both labels.
    pub fn require(&self, expected: &str, kind: RecordKind, key: impl fmt::Display) -> Result<()> {
        if self.is(expected) {
            Ok(())
        } else {
            Err(Error::invalid_state(kind, key, expected, self.0.as_str()))
        }
    }
}

impl From<&str> for Status {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Status {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

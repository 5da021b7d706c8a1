//! Monotonic identity allocation.
//!
//! The `IdentityAllocator` issues the identities of one entity class.
//! Identities start at 1, increase by one per allocation, and are never
//! reused: records are never destroyed, so there is no free list.

use larder_foundation::RecordId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Issues identities for one entity class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentityAllocator {
    /// The most recently issued identity, or 0 if none has been issued.
    last: u64,
}

impl IdentityAllocator {
    /// Creates a new allocator with its counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns the identity the next allocation will issue, without consuming it.
    #[must_use]
    pub fn peek(&self) -> RecordId {
        RecordId::new(self.last + 1)
    }

    /// Issues the next identity and persists the increment.
    pub fn allocate(&mut self) -> RecordId {
        self.last += 1;
        RecordId::new(self.last)
    }

    /// Returns the number of identities issued so far.
    #[must_use]
    pub fn last(&self) -> u64 {
        self.last
    }
}

//! Primary record storage keyed by allocated identity.
//!
//! A `RecordStore` pairs an [`IdentityAllocator`] with a persistent map
//! from identity to record. Records are never removed; `put` replaces a
//! record in place and keeps its identity.

use larder_foundation::{Error, Principal, RecordId, RecordKind, RecordMap, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::allocator::IdentityAllocator;
use crate::guard::{Owned, authorize};

/// Stores the records of one entity class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "R: Clone + Serialize",
        deserialize = "R: Clone + Deserialize<'de>"
    ))
)]
pub struct RecordStore<R>
where
    R: Clone,
{
    /// The entity class stored here.
    kind: RecordKind,
    /// Counter for this class.
    ids: IdentityAllocator,
    /// Records by identity.
    records: RecordMap<RecordId, R>,
}

impl<R: Clone> RecordStore<R> {
    /// Creates an empty store for `kind` with its counter at zero.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            ids: IdentityAllocator::new(),
            records: RecordMap::new(),
        }
    }

    /// Returns the entity class of this store.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Gets a record by identity.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(&id)
    }

    /// Returns true if a record exists under `id`.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Gets a record that must exist.
    ///
    /// # Errors
    ///
    /// Returns a not found error if no record has this identity.
    pub fn require(&self, id: RecordId) -> Result<&R> {
        self.get(id).ok_or_else(|| Error::not_found(self.kind, id))
    }

    /// Allocates the next identity and inserts `record` under it.
    pub fn insert_next(&mut self, record: R) -> RecordId {
        let id = self.ids.allocate();
        self.records = self.records.insert(id, record);
        id
    }

    /// Unconditionally writes `record` under `id`.
    ///
    /// Callers are responsible for existence and authorization checks.
    pub fn put(&mut self, id: RecordId, record: R) {
        self.records = self.records.insert(id, record);
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recently issued identity, if any.
    #[must_use]
    pub fn last_id(&self) -> Option<RecordId> {
        match self.ids.last() {
            0 => None,
            last => Some(RecordId::new(last)),
        }
    }

    /// Returns the identity the next insertion will receive.
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        self.ids.peek()
    }
}

impl<R: Clone + Owned> RecordStore<R> {
    /// Gets a record that must exist and be owned by `caller`.
    ///
    /// Existence is checked before ownership.
    ///
    /// # Errors
    ///
    /// Returns a not found error if the record is absent, or a permission
    /// denied error if `caller` is not its owner.
    pub fn require_owned(&self, id: RecordId, caller: &Principal) -> Result<&R> {
        let record = self.require(id)?;
        authorize(record, self.kind, id, caller)?;
        Ok(record)
    }
}

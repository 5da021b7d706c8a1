//! Association records keyed by a composite tuple.
//!
//! Relations hang off a parent record: a class's participants, a
//! technique's steps, a technique's ingredients. The key is the parent
//! identity followed by a child key, and the full tuple identifies the
//! record. Writing an existing tuple overwrites it.

use std::fmt;

use larder_foundation::{Error, RecordId, RecordKind, RecordMap, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Composite key of a relation record: parent identity first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationKey<K> {
    /// Identity of the owning parent record.
    pub parent: RecordId,
    /// Child key within the parent.
    pub child: K,
}

impl<K> RelationKey<K> {
    /// Creates a key from its parts.
    #[must_use]
    pub const fn new(parent: RecordId, child: K) -> Self {
        Self { parent, child }
    }
}

impl<K: fmt::Display> fmt::Display for RelationKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.child)
    }
}

/// Stores the records of one relation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: Ord + Clone + Serialize, R: Clone + Serialize",
        deserialize = "K: Ord + Clone + Deserialize<'de>, R: Clone + Deserialize<'de>"
    ))
)]
pub struct RelationStore<K, R>
where
    K: Ord + Clone,
    R: Clone,
{
    /// The relation stored here.
    kind: RecordKind,
    /// Records by composite key.
    records: RecordMap<RelationKey<K>, R>,
}

impl<K: Ord + Clone + fmt::Display, R: Clone> RelationStore<K, R> {
    /// Creates an empty relation store.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            records: RecordMap::new(),
        }
    }

    /// Returns the relation kind of this store.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Gets a record by its full key.
    #[must_use]
    pub fn get(&self, key: &RelationKey<K>) -> Option<&R> {
        self.records.get(key)
    }

    /// Returns true if a record exists under `key`.
    #[must_use]
    pub fn contains(&self, key: &RelationKey<K>) -> bool {
        self.records.contains_key(key)
    }

    /// Gets a record that must exist.
    ///
    /// # Errors
    ///
    /// Returns a not found error if no record has this key.
    pub fn require(&self, key: &RelationKey<K>) -> Result<&R> {
        self.get(key)
            .ok_or_else(|| Error::not_found(self.kind, key))
    }

    /// Writes `record` under `key`, replacing any existing record.
    ///
    /// Returns true if a record was replaced.
    pub fn put(&mut self, key: RelationKey<K>, record: R) -> bool {
        let replaced = self.records.contains_key(&key);
        self.records = self.records.insert(key, record);
        replaced
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
}

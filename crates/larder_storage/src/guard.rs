//! Ownership checks applied before mutating an owned record.

use std::fmt;

use larder_foundation::{Error, Principal, RecordKind, Result};

/// A record with a designated owner, creator, or adder.
///
/// The owner is fixed when the record is created; only that principal
/// may mutate the record or hang relations off it.
pub trait Owned {
    /// Returns the principal allowed to mutate this record.
    fn owner(&self) -> &Principal;
}

/// Checks that `caller` owns `record`.
///
/// `kind` and `key` identify the record in the error.
///
/// # Errors
///
/// Returns a permission denied error if the caller is not the owner.
pub fn authorize<R: Owned>(
    record: &R,
    kind: RecordKind,
    key: impl fmt::Display,
    caller: &Principal,
) -> Result<()> {
    if record.owner() == caller {
        Ok(())
    } else {
        Err(Error::permission_denied(kind, key, caller))
    }
}

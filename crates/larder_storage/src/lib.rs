//! Identity allocation, record storage, relations, and ownership for Larder.
//!
//! This crate provides:
//! - [`IdentityAllocator`] - Monotonic per-class identity issuing
//! - [`RecordStore`] - One record per allocated identity
//! - [`RelationStore`] - Records keyed by a composite parent/child tuple
//! - [`Owned`] and [`authorize`] - Ownership checks before mutation
//! - [`Status`] - Free-form status labels

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod allocator;
pub mod guard;
pub mod record;
pub mod relation;
pub mod status;

pub use allocator::IdentityAllocator;
pub use guard::{Owned, authorize};
pub use record::RecordStore;
pub use relation::{RelationKey, RelationStore};
pub use status::Status;

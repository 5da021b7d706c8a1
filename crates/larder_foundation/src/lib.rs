//! Identities, errors, and persistent collections for Larder.
//!
//! This crate provides:
//! - [`RecordId`] - Monotonic per-class record identities
//! - [`Principal`] - Caller identities that own records
//! - [`Height`] - Externally supplied creation timestamps
//! - [`RecordKind`] - The entity classes and relations of the registry
//! - [`Error`] - Structured error values with wire codes
//! - [`RecordMap`] - Ordered persistent map with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod ids;

pub use collections::RecordMap;
pub use error::{Error, ErrorCode, ErrorContext, ErrorKind, Result};
pub use ids::{Height, MonthDay, Principal, RecordId, RecordKind};

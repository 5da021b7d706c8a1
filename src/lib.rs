//! Larder - Registry of food-preservation knowledge
//!
//! This crate re-exports all layers of the Larder system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: larder_runtime    - Call boundary, snapshots, config, logging
//! Layer 2: larder_registry   - Teachers, classes, seasons, techniques
//! Layer 1: larder_storage    - Identity allocation, record and relation stores
//! Layer 0: larder_foundation - Core types (RecordId, Principal, Error)
//! ```

pub use larder_foundation as foundation;
pub use larder_registry as registry;
pub use larder_runtime as runtime;
pub use larder_storage as storage;

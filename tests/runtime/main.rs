//! Integration tests for Layer 3: Runtime
//!
//! Tests the serialized call boundary, snapshots, and configuration.

mod stream;

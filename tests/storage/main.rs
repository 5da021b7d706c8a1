//! Integration tests for Layer 1: Storage
//!
//! Tests for identity allocation, record stores, relation stores, and
//! ownership checks.

mod relations;

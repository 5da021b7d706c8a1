//! Runtime for the Larder registry.
//!
//! This crate provides:
//! - [`Registry`] - The single serialization point for submitted calls
//! - [`Operation`] / [`Receipt`] - The call stream and its return values
//! - [`HeightSource`] - Where each call's height comes from
//! - [`snapshot`] - `MessagePack` save and load of the whole ledger
//! - [`RuntimeConfig`] and [`telemetry`] - Environment configuration and logging

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod height;
pub mod operation;
pub mod registry;
pub mod snapshot;
pub mod telemetry;

pub use config::RuntimeConfig;
pub use height::{FixedHeight, HeightSource, TickingHeight};
pub use operation::{Operation, Receipt};
pub use registry::Registry;
pub use snapshot::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use telemetry::init_tracing;

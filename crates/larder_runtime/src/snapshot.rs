//! Ledger snapshots in `MessagePack`.
//!
//! A snapshot is the whole [`Ledger`] with named fields: one counter and
//! one map per entity class, one map per relation, each map in key order.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use larder_foundation::{Error, ErrorKind, Result};
use larder_registry::Ledger;

/// Serializes a ledger to `MessagePack` bytes.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn to_bytes(ledger: &Ledger) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(ledger)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a ledger from `MessagePack` bytes.
///
/// # Errors
///
/// Returns a serialization error if the bytes are not a ledger.
pub fn from_bytes(bytes: &[u8]) -> Result<Ledger> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Writes a ledger snapshot to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written, or a
/// serialization error if encoding fails.
pub fn save_to_file<P: AsRef<Path>>(ledger: &Ledger, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(ledger)?;

    let file = File::create(path).map_err(|e| io_error("create", path, &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error("write to", path, &e))?;
    writer.flush().map_err(|e| io_error("flush", path, &e))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved ledger snapshot");
    Ok(())
}

/// Reads a ledger snapshot from `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a serialization
/// error if its contents are not a ledger.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Ledger> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| io_error("read", path, &e))?;
    let ledger = from_bytes(&bytes)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded ledger snapshot");
    Ok(ledger)
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(format!(
        "failed to {action} file '{}': {err}",
        path.display()
    )))
}

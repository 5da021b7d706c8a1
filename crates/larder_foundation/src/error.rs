//! Error types for the Larder registry.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failed operation returns one of these as a value; nothing in the
//! registry aborts control flow.

use std::fmt;

use thiserror::Error;

use crate::ids::{Principal, RecordKind};

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Larder operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a record not found error.
    #[must_use]
    pub fn not_found(kind: RecordKind, key: impl fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound {
            kind,
            key: key.to_string(),
        })
    }

    /// Creates a permission denied error for `caller` acting on a record.
    #[must_use]
    pub fn permission_denied(kind: RecordKind, key: impl fmt::Display, caller: &Principal) -> Self {
        Self::new(ErrorKind::PermissionDenied {
            kind,
            key: key.to_string(),
            caller: caller.clone(),
        })
    }

    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(
        kind: RecordKind,
        key: impl fmt::Display,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidState {
            kind,
            key: key.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Returns the wire code for domain errors.
    ///
    /// Ambient failures (serialization, I/O, configuration) have no code.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        self.kind.code()
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }

    /// Returns true if this is a permission denied error.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.kind, ErrorKind::PermissionDenied { .. })
    }

    /// Returns true if this is an invalid state error.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidState { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The referenced record does not exist.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// The kind of record that was looked up.
        kind: RecordKind,
        /// The identity or composite key that was looked up.
        key: String,
    },

    /// The caller is not the record's owner or creator.
    #[error("permission denied: {caller} does not own {kind} {key}")]
    PermissionDenied {
        /// The kind of the owned record.
        kind: RecordKind,
        /// The identity of the owned record.
        key: String,
        /// The caller that was rejected.
        caller: Principal,
    },

    /// The record exists and the caller may act, but its state forbids it.
    #[error("invalid state: {kind} {key} is {actual:?}, expected {expected:?}")]
    InvalidState {
        /// The kind of record whose state was checked.
        kind: RecordKind,
        /// The identity of that record.
        key: String,
        /// The state the operation requires.
        expected: String,
        /// The state the record is in.
        actual: String,
    },

    /// Snapshot encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Snapshot file access failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Runtime configuration could not be loaded.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns the wire code for domain errors.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::NotFound { .. } => Some(ErrorCode::NotFound),
            Self::PermissionDenied { .. } => Some(ErrorCode::Forbidden),
            Self::InvalidState { .. } => Some(ErrorCode::BadRequest),
            Self::SerializationError(_)
            | Self::IoError(_)
            | Self::ConfigError(_)
            | Self::Internal(_) => None,
        }
    }
}

/// Numeric codes returned to callers in place of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// A state precondition failed (e.g., class not open).
    BadRequest = 400,
    /// The caller is not the record's owner or creator.
    Forbidden = 403,
    /// The referenced record is absent.
    NotFound = 404,
}

impl ErrorCode {
    /// Returns the numeric value of this code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Parses a numeric code.
    #[must_use]
    pub const fn from_u16(code: u16) -> Option<Self> {
        match code {
            400 => Some(Self::BadRequest),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::ErrorCode;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    impl Serialize for ErrorCode {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_u16(self.as_u16())
        }
    }

    impl<'de> Deserialize<'de> for ErrorCode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let code = u16::deserialize(deserializer)?;
            ErrorCode::from_u16(code)
                .ok_or_else(|| de::Error::custom(format!("unknown error code: {code}")))
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// The operation that failed.
    pub operation: Option<String>,
    /// The height at which the call was made.
    pub height: Option<u64>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the call height.
    #[must_use]
    pub fn with_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
            if let Some(height) = self.height {
                write!(f, " at height {height}")?;
            }
        }
        Ok(())
    }
}

//! The result envelope returned to callers.
//!
//! Every operation yields either a value or a numeric error code. The
//! envelope serializes as `{"value": v}` or `{"error": code}`.

use larder_foundation::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};

/// A value or an error code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<V> {
    /// The operation succeeded.
    Value(V),
    /// The operation failed a precondition.
    Error(ErrorCode),
}

impl<V> Outcome<V> {
    /// Returns true for [`Outcome::Value`].
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Value(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    /// Returns the error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Value(_) => None,
            Self::Error(code) => Some(*code),
        }
    }

    /// Maps the value, keeping any error code.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Outcome<U> {
        match self {
            Self::Value(v) => Outcome::Value(f(v)),
            Self::Error(code) => Outcome::Error(code),
        }
    }
}

/// Domain errors become [`Outcome::Error`]; any other error is handed back.
impl<V> TryFrom<Result<V>> for Outcome<V> {
    type Error = Error;

    fn try_from(result: Result<V>) -> std::result::Result<Self, Error> {
        match result {
            Ok(v) => Ok(Self::Value(v)),
            Err(err) => match err.code() {
                Some(code) => Ok(Self::Error(code)),
                None => Err(err),
            },
        }
    }
}

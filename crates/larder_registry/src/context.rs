//! The explicit authorization context of a call.

use larder_foundation::{Height, Principal};

/// Who is calling, and at what height.
///
/// Every write receives its context as a parameter; nothing reads a
/// caller or height from ambient state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext {
    /// The identity submitting the call.
    pub caller: Principal,
    /// The current height supplied by the execution environment.
    pub height: Height,
}

impl CallContext {
    /// Creates a call context.
    #[must_use]
    pub fn new(caller: impl Into<Principal>, height: Height) -> Self {
        Self {
            caller: caller.into(),
            height,
        }
    }

    /// Returns the same caller at a different height.
    #[must_use]
    pub fn at(&self, height: Height) -> Self {
        Self {
            caller: self.caller.clone(),
            height,
        }
    }
}

//! The serialized call boundary.
//!
//! A [`Registry`] owns the current [`Ledger`] and a [`HeightSource`]
//! behind one lock. Each submitted call is stamped with the next height,
//! applied to the current ledger, and committed only if it succeeds, so
//! calls observe each other in submission order and never interleave.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use larder_foundation::{Error, ErrorContext, ErrorKind, Principal, Result};
use larder_registry::{CallContext, Ledger, Outcome};

use crate::config::RuntimeConfig;
use crate::height::{HeightSource, TickingHeight};
use crate::operation::{Operation, Receipt};
use crate::snapshot;

struct State {
    ledger: Ledger,
    heights: Box<dyn HeightSource>,
}

/// Process-wide registry state behind one serialization point.
pub struct Registry {
    state: Mutex<State>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}

impl Registry {
    /// Creates a registry over an empty ledger.
    #[must_use]
    pub fn new(heights: impl HeightSource + 'static) -> Self {
        Self::with_ledger(Ledger::new(), heights)
    }

    /// Creates a registry over an existing ledger.
    #[must_use]
    pub fn with_ledger(ledger: Ledger, heights: impl HeightSource + 'static) -> Self {
        tracing::info!(empty = ledger.is_empty(), "registry started");
        Self {
            state: Mutex::new(State {
                ledger,
                heights: Box::new(heights),
            }),
        }
    }

    /// Creates a registry from configuration.
    ///
    /// Loads the configured snapshot if the file exists; otherwise starts
    /// empty. Heights tick upward from `initial_height`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing snapshot cannot be read.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let ledger = match &config.snapshot_path {
            Some(path) if path.exists() => snapshot::load_from_file(path)?,
            _ => Ledger::new(),
        };
        Ok(Self::with_ledger(
            ledger,
            TickingHeight::starting_at(config.initial_height),
        ))
    }

    /// Applies one call as `caller`.
    ///
    /// Domain failures come back as [`Outcome::Error`] and commit nothing.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn submit(
        &self,
        caller: impl Into<Principal>,
        op: Operation,
    ) -> Result<Outcome<Receipt>> {
        let mut state = self.lock()?;
        Self::apply(&mut state, caller.into(), op)
    }

    /// Applies a sequence of calls in order, holding the lock throughout.
    ///
    /// Returns one outcome per call. A failed call does not stop the
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn submit_all<I, P>(&self, calls: I) -> Result<Vec<Outcome<Receipt>>>
    where
        I: IntoIterator<Item = (P, Operation)>,
        P: Into<Principal>,
    {
        let mut state = self.lock()?;
        calls
            .into_iter()
            .map(|(caller, op)| Self::apply(&mut state, caller.into(), op))
            .collect()
    }

    /// Returns the current ledger.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Ledger> {
        Ok(self.lock()?.ledger.clone())
    }

    /// Runs a read against the current ledger.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the lock is poisoned.
    pub fn read<T>(&self, f: impl FnOnce(&Ledger) -> T) -> Result<T> {
        Ok(f(&self.lock()?.ledger))
    }

    /// Writes the current ledger to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or the snapshot cannot be
    /// written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let ledger = self.snapshot()?;
        snapshot::save_to_file(&ledger, path)
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| Error::new(ErrorKind::Internal("registry lock poisoned".to_string())))
    }

    fn apply(state: &mut State, caller: Principal, op: Operation) -> Result<Outcome<Receipt>> {
        let ctx = CallContext::new(caller, state.heights.next_height());
        let name = op.name();

        match op.apply(&state.ledger, &ctx) {
            Ok((ledger, receipt)) => {
                tracing::debug!(
                    op = name,
                    id = ?receipt.id(),
                    height = %ctx.height,
                    "call committed"
                );
                state.ledger = ledger;
                Ok(Outcome::Value(receipt))
            }
            Err(err) => {
                let err = err.with_context(
                    ErrorContext::new()
                        .with_operation(name)
                        .with_height(ctx.height.get()),
                );
                tracing::warn!(
                    op = name,
                    caller = %ctx.caller,
                    height = %ctx.height,
                    error = %err,
                    "call rejected"
                );
                Outcome::try_from(Err(err))
            }
        }
    }
}

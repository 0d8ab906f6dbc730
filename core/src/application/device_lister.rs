//! Device lister application service.

use std::io::Write;

use tracing::debug;

use super::report::{report, ReportFormat};
use crate::domain::{LifecycleState, NameTable};
use crate::error::{Error, Result};
use crate::ports::ManagementSubsystem;

/// Application service that lists host channel adapters.
///
/// The lister owns the subsystem; each [`initialize`](Self::initialize)
/// call opens a [`Session`] that holds the subsystem handle until it is
/// shut down.
pub struct DeviceLister<S: ManagementSubsystem> {
    subsystem: S,
}

impl<S: ManagementSubsystem> DeviceLister<S> {
    /// Create a new lister driving the given subsystem.
    pub fn new(subsystem: S) -> Self {
        Self { subsystem }
    }

    /// Acquire access to the management subsystem.
    ///
    /// On failure nothing was acquired and there is nothing to release.
    pub fn initialize(&self) -> Result<Session<'_, S>> {
        debug!(backend = self.subsystem.name(), "initializing management subsystem");
        let handle = self.subsystem.init()?;

        Ok(Session {
            subsystem: &self.subsystem,
            handle: Some(handle),
            state: LifecycleState::Initialized,
        })
    }

    /// Initialize, list up to `capacity` adapters, write them to `out`, and
    /// shut down.
    ///
    /// Names are only written once the whole list was produced. The
    /// subsystem is released on every path after a successful
    /// initialization. Returns the number of adapters written.
    pub fn run<W: Write>(
        &self,
        capacity: usize,
        format: ReportFormat,
        out: &mut W,
    ) -> Result<usize> {
        let mut session = self.initialize()?;

        let mut table = NameTable::with_capacity(capacity);
        let count = session.list_adapters(&mut table)?;
        report(&table, format, out)?;

        session.shutdown();
        Ok(count)
    }
}

/// An initialized management subsystem.
///
/// Releasing happens exactly once: either through [`shutdown`](Self::shutdown)
/// or, if the session is dropped early (e.g. while an error propagates),
/// from `Drop`.
pub struct Session<'a, S: ManagementSubsystem> {
    subsystem: &'a S,
    handle: Option<S::Handle>,
    state: LifecycleState,
}

impl<'a, S: ManagementSubsystem> Session<'a, S> {
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Fill `table` with the names of the installed adapters.
    ///
    /// Can be called once per session. On failure the table is left empty
    /// and the session moves to `Failed`.
    pub fn list_adapters(&mut self, table: &mut NameTable) -> Result<usize> {
        if self.state != LifecycleState::Initialized {
            return Err(Error::EnumerationError(format!(
                "cannot list adapters in the {} state",
                self.state
            )));
        }
        let Some(handle) = self.handle.as_ref() else {
            return Err(Error::EnumerationError(
                "management subsystem already released".to_string(),
            ));
        };

        let result = match self.subsystem.list_devices(handle, table) {
            Ok(count) if count == table.len() && count <= table.capacity() => Ok(count),
            Ok(count) => Err(Error::EnumerationError(format!(
                "subsystem reported {} adapters but produced {}",
                count,
                table.len()
            ))),
            Err(e) => Err(e),
        };

        match result {
            Ok(count) => {
                self.state = LifecycleState::Listed;
                debug!(count, capacity = table.capacity(), "adapters listed");
                Ok(count)
            }
            Err(e) => {
                table.clear();
                self.state = LifecycleState::Failed;
                Err(e)
            }
        }
    }

    /// Release the management subsystem.
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.subsystem.done(handle);
            if self.state != LifecycleState::Failed {
                self.state = LifecycleState::Shutdown;
            }
            debug!(
                backend = self.subsystem.name(),
                state = %self.state,
                "management subsystem released"
            );
        }
    }
}

impl<'a, S: ManagementSubsystem> Drop for Session<'a, S> {
    fn drop(&mut self) {
        self.release();
    }
}

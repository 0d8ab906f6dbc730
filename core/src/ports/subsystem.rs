//! Management subsystem port (interface).

use crate::domain::NameTable;
use crate::error::Result;

/// Port for the HCA management subsystem.
///
/// Models the three calls a caller makes against libibumad: acquire
/// access, list device names, release access. The handle returned by
/// [`init`](Self::init) is an owned value rather than hidden global state,
/// even when the native library is a process-wide singleton underneath.
pub trait ManagementSubsystem {
    /// Proof of successful initialization, consumed on release.
    type Handle;

    /// Short backend name used in log output.
    fn name(&self) -> &'static str;

    /// Acquire access to the subsystem.
    ///
    /// Fails with `SubsystemUnavailable` when the service cannot be reached.
    fn init(&self) -> Result<Self::Handle>;

    /// Fill `table` with adapter names in subsystem order.
    ///
    /// Returns the number of names written, never more than
    /// `table.capacity()`. Zero adapters is a successful result; failures
    /// to produce a list are `EnumerationError`.
    fn list_devices(&self, handle: &Self::Handle, table: &mut NameTable) -> Result<usize>;

    /// Release the subsystem. Must be the last call made with `handle`.
    fn done(&self, handle: Self::Handle);
}

impl<T: ManagementSubsystem + ?Sized> ManagementSubsystem for &T {
    type Handle = T::Handle;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn init(&self) -> Result<Self::Handle> {
        (**self).init()
    }

    fn list_devices(&self, handle: &Self::Handle, table: &mut NameTable) -> Result<usize> {
        (**self).list_devices(handle, table)
    }

    fn done(&self, handle: Self::Handle) {
        (**self).done(handle)
    }
}

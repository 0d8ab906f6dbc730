//! libibumad-backed management subsystem.
//!
//! Links the native `ibumad` library. Its state is process-wide; the
//! [`UmadHandle`] only records that `umad_init` succeeded.

use libc::{c_char, c_int};
use tracing::{debug, warn};

use crate::domain::{AdapterName, NameTable, CA_NAME_LEN, MAX_DEVICES};
use crate::error::{Error, Result};
use crate::ports::ManagementSubsystem;

#[link(name = "ibumad")]
extern "C" {
    fn umad_init() -> c_int;
    fn umad_done() -> c_int;
    fn umad_get_cas_names(cas: *mut [c_char; CA_NAME_LEN], max: c_int) -> c_int;
}

/// Management subsystem backed by libibumad.
#[derive(Debug, Default)]
pub struct UmadSubsystem;

/// Handle returned by a successful `umad_init`.
#[derive(Debug)]
pub struct UmadHandle {
    _private: (),
}

impl UmadSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl ManagementSubsystem for UmadSubsystem {
    type Handle = UmadHandle;

    fn name(&self) -> &'static str {
        "umad"
    }

    fn init(&self) -> Result<UmadHandle> {
        // SAFETY: umad_init takes no arguments and only touches library state.
        let rc = unsafe { umad_init() };
        if rc < 0 {
            return Err(Error::SubsystemUnavailable(format!(
                "can't init UMAD library (umad_init returned {})",
                rc
            )));
        }

        debug!("libibumad initialized");
        Ok(UmadHandle { _private: () })
    }

    fn list_devices(&self, _handle: &UmadHandle, table: &mut NameTable) -> Result<usize> {
        table.clear();

        let mut buf = [[0 as c_char; CA_NAME_LEN]; MAX_DEVICES];
        let max = table.capacity().min(MAX_DEVICES) as c_int;

        // SAFETY: `buf` holds MAX_DEVICES records of CA_NAME_LEN bytes and the
        // library writes at most `max <= MAX_DEVICES` of them.
        let rc = unsafe { umad_get_cas_names(buf.as_mut_ptr(), max) };
        if rc < 0 {
            return Err(Error::EnumerationError(format!(
                "can't list IB device names (umad_get_cas_names returned {})",
                rc
            )));
        }

        let count = (rc as usize).min(table.capacity());
        for raw in &buf[..count] {
            let record: [u8; CA_NAME_LEN] = (*raw).map(|c| c as u8);
            let name = match AdapterName::from_record(&record) {
                Ok(name) => name,
                Err(e) => {
                    warn!(error = %e, "skipping unusable adapter record");
                    continue;
                }
            };
            if table.push(name).is_err() {
                break;
            }
        }

        Ok(table.len())
    }

    fn done(&self, _handle: UmadHandle) {
        // SAFETY: called once per handle, after the last list call.
        let rc = unsafe { umad_done() };
        if rc < 0 {
            warn!(rc, "umad_done failed");
        } else {
            debug!("libibumad released");
        }
    }
}

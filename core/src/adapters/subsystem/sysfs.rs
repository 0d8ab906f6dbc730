//! sysfs-backed management subsystem.
//!
//! Follows the legacy libibumad behaviour: initialization checks the user
//! MAD ABI version the kernel exposes, and the adapter list is the sorted
//! set of entries under `class/infiniband` (minus `.` and `..`). Names are
//! printed as found, undecodable bytes replaced. Pointing the root somewhere
//! other than `/sys` lets simulated trees (as produced by ibsim) be read.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AdapterName, NameTable, CA_NAME_LEN};
use crate::error::{Error, Result};
use crate::ports::ManagementSubsystem;

/// Oldest user MAD ABI the kernel may report.
pub const IB_UMAD_ABI_VERSION: u32 = 5;

const ABI_VERSION_FILE: &str = "class/infiniband_mad/abi_version";
const DEVICE_DIR: &str = "class/infiniband";

/// Management subsystem reading a sysfs tree.
pub struct SysfsSubsystem {
    root: PathBuf,
}

/// Handle returned by a successful sysfs initialization.
#[derive(Debug)]
pub struct SysfsHandle {
    abi_version: u32,
}

impl SysfsHandle {
    /// ABI version read during initialization.
    pub fn abi_version(&self) -> u32 {
        self.abi_version
    }
}

impl SysfsSubsystem {
    /// Create a subsystem reading the sysfs tree mounted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn read_abi_version(&self) -> Result<u32> {
        let path = self.root.join(ABI_VERSION_FILE);
        let raw = fs::read_to_string(&path).map_err(|e| {
            Error::SubsystemUnavailable(format!("can't read {}: {}", path.display(), e))
        })?;

        raw.trim().parse().map_err(|e| {
            Error::SubsystemUnavailable(format!(
                "bad ABI version {:?} in {}: {}",
                raw.trim(),
                path.display(),
                e
            ))
        })
    }

    fn read_device_names(&self) -> Result<Vec<OsString>> {
        let dir = self.root.join(DEVICE_DIR);
        let entries = fs::read_dir(&dir).map_err(|e| {
            Error::EnumerationError(format!("can't read {}: {}", dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::EnumerationError(format!("can't read {}: {}", dir.display(), e))
            })?;
            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }
            names.push(name);
        }

        names.sort_by(alphasort);
        Ok(names)
    }
}

impl ManagementSubsystem for SysfsSubsystem {
    type Handle = SysfsHandle;

    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn init(&self) -> Result<SysfsHandle> {
        let abi_version = self.read_abi_version()?;
        if abi_version < IB_UMAD_ABI_VERSION {
            return Err(Error::SubsystemUnavailable(format!(
                "wrong ABI version {} (need {} or newer)",
                abi_version, IB_UMAD_ABI_VERSION
            )));
        }

        debug!(root = %self.root.display(), abi_version, "sysfs subsystem ready");
        Ok(SysfsHandle { abi_version })
    }

    fn list_devices(&self, _handle: &SysfsHandle, table: &mut NameTable) -> Result<usize> {
        table.clear();

        let names = self.read_device_names()?;
        for raw in names.iter().take(table.capacity()) {
            let record = to_record(raw.as_encoded_bytes());
            let name = match AdapterName::from_record(&record) {
                Ok(name) => name,
                Err(e) => {
                    warn!(entry = ?raw, error = %e, "skipping unusable adapter entry");
                    continue;
                }
            };
            if table.push(name).is_err() {
                break;
            }
        }

        if names.len() > table.capacity() {
            warn!(
                found = names.len(),
                kept = table.len(),
                "more adapters than table capacity, list truncated"
            );
        }

        Ok(table.len())
    }

    fn done(&self, handle: SysfsHandle) {
        debug!(abi_version = handle.abi_version, "sysfs subsystem released");
    }
}

/// Byte-wise ordering, as `alphasort` applies in the C locale.
fn alphasort(a: &OsString, b: &OsString) -> Ordering {
    a.as_encoded_bytes().cmp(b.as_encoded_bytes())
}

/// Copy a directory entry name into a fixed-width record the way `strncpy`
/// would: truncated to the record width, NUL padded.
fn to_record(name: &[u8]) -> [u8; CA_NAME_LEN] {
    let mut record = [0u8; CA_NAME_LEN];
    let len = name.len().min(CA_NAME_LEN);
    record[..len].copy_from_slice(&name[..len]);
    record
}

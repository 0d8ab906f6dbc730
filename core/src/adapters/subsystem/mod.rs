//! Management subsystem adapters.
//!
//! Backend-specific implementations of the HCA management subsystem,
//! selected at runtime from the configuration.

mod sysfs;

#[cfg(feature = "umad")]
mod umad;

pub use sysfs::{SysfsHandle, SysfsSubsystem, IB_UMAD_ABI_VERSION};

#[cfg(feature = "umad")]
pub use umad::{UmadHandle, UmadSubsystem};

use crate::config::{Backend, Config};
use crate::domain::NameTable;
use crate::error::{Error, Result};
use crate::ports::ManagementSubsystem;

/// The management subsystem chosen by the configuration.
pub enum Subsystem {
    Sysfs(SysfsSubsystem),

    #[cfg(feature = "umad")]
    Umad(UmadSubsystem),
}

/// Handle produced by [`Subsystem::init`](ManagementSubsystem::init).
pub enum SubsystemHandle {
    Sysfs(SysfsHandle),

    #[cfg(feature = "umad")]
    Umad(UmadHandle),
}

impl Subsystem {
    /// Build the subsystem named by `config.backend`.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.backend {
            Backend::Sysfs => Ok(Self::Sysfs(SysfsSubsystem::new(&config.sysfs_root))),

            #[cfg(feature = "umad")]
            Backend::Umad => Ok(Self::Umad(UmadSubsystem::new())),

            #[cfg(not(feature = "umad"))]
            Backend::Umad => Err(Error::Config(
                "the umad backend requires building with the `umad` feature".to_string(),
            )),
        }
    }
}

impl ManagementSubsystem for Subsystem {
    type Handle = SubsystemHandle;

    fn name(&self) -> &'static str {
        match self {
            Self::Sysfs(inner) => inner.name(),

            #[cfg(feature = "umad")]
            Self::Umad(inner) => inner.name(),
        }
    }

    fn init(&self) -> Result<SubsystemHandle> {
        match self {
            Self::Sysfs(inner) => inner.init().map(SubsystemHandle::Sysfs),

            #[cfg(feature = "umad")]
            Self::Umad(inner) => inner.init().map(SubsystemHandle::Umad),
        }
    }

    fn list_devices(&self, handle: &SubsystemHandle, table: &mut NameTable) -> Result<usize> {
        match (self, handle) {
            (Self::Sysfs(inner), SubsystemHandle::Sysfs(h)) => inner.list_devices(h, table),

            #[cfg(feature = "umad")]
            (Self::Umad(inner), SubsystemHandle::Umad(h)) => inner.list_devices(h, table),

            #[cfg(feature = "umad")]
            _ => Err(Error::EnumerationError(format!(
                "handle does not belong to the {} backend",
                self.name()
            ))),
        }
    }

    fn done(&self, handle: SubsystemHandle) {
        match (self, handle) {
            (Self::Sysfs(inner), SubsystemHandle::Sysfs(h)) => inner.done(h),

            #[cfg(feature = "umad")]
            (Self::Umad(inner), SubsystemHandle::Umad(h)) => inner.done(h),

            #[cfg(feature = "umad")]
            _ => tracing::warn!(
                backend = self.name(),
                "released a handle from a different backend"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_to_sysfs() {
        let subsystem = Subsystem::from_config(&Config::default()).unwrap();
        assert_eq!(subsystem.name(), "sysfs");
    }

    #[cfg(not(feature = "umad"))]
    #[test]
    fn test_from_config_without_umad_feature() {
        let config = Config {
            backend: Backend::Umad,
            ..Config::default()
        };
        assert!(matches!(
            Subsystem::from_config(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_list_fake_sysfs_end_to_end() {
        use crate::application::{DeviceLister, ReportFormat};
        use std::fs;

        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("class/infiniband_mad")).unwrap();
        fs::write(root.path().join("class/infiniband_mad/abi_version"), "5\n").unwrap();
        for dev in ["mlx5_1", "mlx5_0"] {
            fs::create_dir_all(root.path().join("class/infiniband").join(dev)).unwrap();
        }

        let config = Config {
            sysfs_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let lister = DeviceLister::new(Subsystem::from_config(&config).unwrap());

        let mut out = Vec::new();
        let count = lister.run(config.capacity, ReportFormat::Lines, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "mlx5_0\nmlx5_1\n");
    }

    #[test]
    fn test_missing_sysfs_prints_nothing() {
        use crate::application::{DeviceLister, ReportFormat};

        let root = tempfile::tempdir().unwrap();
        let config = Config {
            sysfs_root: root.path().to_path_buf(),
            ..Config::default()
        };
        let lister = DeviceLister::new(Subsystem::from_config(&config).unwrap());

        let mut out = Vec::new();
        let err = lister.run(config.capacity, ReportFormat::Lines, &mut out).unwrap_err();
        assert!(matches!(err, Error::SubsystemUnavailable(_)));
        assert!(out.is_empty());
    }
}

//! List command - print the names of all installed adapters.

use anyhow::{Context, Result};
use hcalist_core::{Config, DeviceLister, ReportFormat, Subsystem};
use tracing::info;

pub fn run(config: Config, format: ReportFormat) -> Result<()> {
    let config = config.validate()?;
    let subsystem = Subsystem::from_config(&config)?;
    info!(backend = %config.backend, root = %config.sysfs_root.display(), "listing adapters");

    let lister = DeviceLister::new(subsystem);
    let mut stdout = std::io::stdout().lock();
    let count = lister
        .run(config.capacity, format, &mut stdout)
        .context("can't list InfiniBand adapters")?;

    info!(count, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config(root: &Path) -> Config {
        Config {
            sysfs_root: root.to_path_buf(),
            ..Config::default()
        }
    }

    fn write_abi(root: &Path) {
        let mad = root.join("class/infiniband_mad");
        fs::create_dir_all(&mad).unwrap();
        fs::write(mad.join("abi_version"), "5\n").unwrap();
    }

    #[test]
    fn test_no_driver_fails() {
        let root = tempdir().unwrap();
        let err = run(config(root.path()), ReportFormat::Lines).unwrap_err();
        assert!(err.to_string().contains("can't list InfiniBand adapters"));
        assert!(format!("{:#}", err).contains("Management subsystem unavailable"));
    }

    #[test]
    fn test_unreadable_device_list_fails() {
        let root = tempdir().unwrap();
        write_abi(root.path());

        let err = run(config(root.path()), ReportFormat::Lines).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to list adapters"));
    }

    #[test]
    fn test_no_adapters_succeeds() {
        let root = tempdir().unwrap();
        write_abi(root.path());
        fs::create_dir_all(root.path().join("class/infiniband")).unwrap();

        assert!(run(config(root.path()), ReportFormat::Lines).is_ok());
    }

    #[test]
    fn test_zero_max_devices_is_rejected() {
        let root = tempdir().unwrap();
        write_abi(root.path());
        fs::create_dir_all(root.path().join("class/infiniband")).unwrap();

        let config = Config {
            capacity: 0,
            ..config(root.path())
        };
        assert!(run(config, ReportFormat::Lines).is_err());
    }
}

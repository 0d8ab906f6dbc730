//! Runtime configuration for adapter discovery.
//!
//! Every field has a default, so an empty configuration lists all adapters
//! through sysfs mounted at `/sys`.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::MAX_DEVICES;
use crate::error::{Error, Result};

/// Which management subsystem implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Backend {
    /// Read the kernel's sysfs view directly.
    #[default]
    Sysfs,
    /// Call into the native libibumad library.
    Umad,
}

impl Backend {
    /// All known backends.
    pub const ALL: [Backend; 2] = [Backend::Sysfs, Backend::Umad];

    /// Whether this build can use the backend.
    pub fn is_available(&self) -> bool {
        match self {
            Backend::Sysfs => true,
            Backend::Umad => cfg!(feature = "umad"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sysfs => "sysfs",
            Backend::Umad => "umad",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Backend::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("unknown backend '{}'", s)))
    }
}

/// Discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Subsystem implementation.
    #[serde(default)]
    pub backend: Backend,

    /// Mount point of sysfs, used by the sysfs backend.
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,

    /// Maximum number of adapter names to collect.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from("/sys")
}

fn default_capacity() -> usize {
    MAX_DEVICES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            sysfs_root: default_sysfs_root(),
            capacity: default_capacity(),
        }
    }
}

impl Config {
    /// Check the configuration against this build.
    ///
    /// Rejects backends that were not compiled in and a zero capacity. A
    /// capacity above `MAX_DEVICES` is lowered to it.
    pub fn validate(mut self) -> Result<Self> {
        if !self.backend.is_available() {
            return Err(Error::Config(format!(
                "backend '{}' is not available in this build (rebuild with the `umad` feature)",
                self.backend
            )));
        }
        if self.capacity == 0 {
            return Err(Error::Config(
                "capacity must be at least 1 adapter".to_string(),
            ));
        }
        self.capacity = self.capacity.min(MAX_DEVICES);
        Ok(self)
    }
}

//! hcalist Core Library
//!
//! Discovers the InfiniBand host channel adapters (HCAs) installed on the
//! local host and reports their names.
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Adapter names, the fixed-capacity name table, lifecycle states
//! - `ports`: The management subsystem interface
//! - `adapters`: sysfs and libibumad implementations of that interface
//! - `application`: The device lister that drives the subsystem lifecycle
//!
//! # Backends
//! - sysfs: Reads `/sys/class/infiniband_mad` and `/sys/class/infiniband` directly
//! - libibumad: Links the native library (`umad` feature)

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{AdapterName, LifecycleState, NameTable, CA_NAME_LEN, MAX_DEVICES, MAX_NAME_LEN};

// Re-export other commonly used types
#[cfg(feature = "umad")]
pub use adapters::UmadSubsystem;
pub use adapters::{Subsystem, SubsystemHandle, SysfsSubsystem};
pub use application::{report, DeviceLister, ReportFormat, Session};
pub use config::{Backend, Config};
pub use error::{Error, Result};
pub use ports::ManagementSubsystem;

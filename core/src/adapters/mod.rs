//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with external systems.

pub mod subsystem;

// Re-export main types for convenience
#[cfg(feature = "umad")]
pub use subsystem::UmadSubsystem;
pub use subsystem::{Subsystem, SubsystemHandle, SysfsSubsystem};

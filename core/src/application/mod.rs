//! Application layer - Use case services.
//!
//! The device lister drives one management subsystem through its
//! lifecycle: initialize, list, report, shut down. It only talks to the
//! subsystem through the `ManagementSubsystem` port, so tests can inject a
//! recording mock.

mod device_lister;
mod report;

pub use device_lister::{DeviceLister, Session};
pub use report::{report, ReportFormat};

//! Domain layer - Pure data models.
//!
//! This module contains the values the device lister works with.
//! These types have no I/O dependencies and can be tested in isolation.

mod adapter_name;
mod lifecycle;
mod name_table;

// Re-export all domain types
pub use adapter_name::{AdapterName, CA_NAME_LEN, MAX_NAME_LEN};
pub use lifecycle::LifecycleState;
pub use name_table::{NameTable, MAX_DEVICES};

//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interface the application layer uses to talk
//! to the HCA management subsystem. Implementations live in `adapters`.

mod subsystem;

pub use subsystem::ManagementSubsystem;

//! Subsystem session lifecycle.

/// Where a management subsystem session is in its lifecycle.
///
/// `Uninitialized -> Initialized -> Listed -> Shutdown`, with any failure
/// moving to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    /// No handle acquired yet.
    #[default]
    Uninitialized,
    /// Handle acquired, nothing listed.
    Initialized,
    /// The adapter list was produced (possibly empty).
    Listed,
    /// Handle released.
    Shutdown,
    /// An operation failed.
    Failed,
}

impl LifecycleState {
    pub fn display_name(&self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Initialized => "initialized",
            LifecycleState::Listed => "listed",
            LifecycleState::Shutdown => "shutdown",
            LifecycleState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_uninitialized() {
        assert_eq!(LifecycleState::default(), LifecycleState::Uninitialized);
        assert_eq!(LifecycleState::Listed.to_string(), "listed");
    }
}

use serde::{Deserialize, Serialize};

/// Aggregate playback state of a remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlayState {
    /// Handles are holding their current position
    #[default]
    Paused,
    /// Handles are advancing
    Running,
    /// The representative handle's timeline has completed; cleared by the
    /// next play
    Finished,
}

impl PlayState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paused => "paused",
            Self::Running => "running",
            Self::Finished => "finished",
        }
    }

    /// Check if playback is advancing
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if the timeline has completed
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl From<&str> for PlayState {
    fn from(s: &str) -> Self {
        match s {
            "running" => Self::Running,
            "finished" => Self::Finished,
            _ => Self::Paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(PlayState::Paused.name(), "paused");
        assert_eq!(PlayState::Running.name(), "running");
        assert_eq!(PlayState::Finished.name(), "finished");
    }

    #[test]
    fn test_state_queries() {
        assert!(PlayState::Running.is_running());
        assert!(!PlayState::Paused.is_running());
        assert!(PlayState::Finished.is_finished());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(PlayState::from("running"), PlayState::Running);
        assert_eq!(PlayState::from("unknown"), PlayState::Paused);
    }
}

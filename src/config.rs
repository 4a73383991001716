//! Build configuration for scene realization

use serde::{Deserialize, Serialize};

/// How realization treats an element whose window extends past the scene end.
///
/// Offsets in a lifecycle are normalized against the scene length, so a
/// window ending after the scene would produce offsets above 1.0. The policy
/// decides whether that is an error, silently corrected, or passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverrunPolicy {
    /// Fail realization with `WindowOutOfBounds` before any visual is created
    #[default]
    Reject,
    /// Clamp normalized offsets into `[0, 1]`
    Clamp,
    /// Emit offsets as computed, even above 1.0; a warning is logged
    Permit,
}

impl OverrunPolicy {
    /// Get the name of this policy
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
            Self::Permit => "permit",
        }
    }
}

/// Configurable settings for scene realization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Policy for element windows that extend past the scene end
    pub overrun: OverrunPolicy,
}

impl BuildConfig {
    /// Create a config with the given overrun policy
    #[inline]
    pub fn with_overrun(overrun: OverrunPolicy) -> Self {
        Self { overrun }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_rejects() {
        assert_eq!(BuildConfig::default().overrun, OverrunPolicy::Reject);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(OverrunPolicy::Reject.name(), "reject");
        assert_eq!(OverrunPolicy::Clamp.name(), "clamp");
        assert_eq!(OverrunPolicy::Permit.name(), "permit");
    }
}

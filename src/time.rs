//! Time handling for scenes and elements.
//!
//! All durations are stored as whole nanoseconds so times order totally and
//! arithmetic never hits float rounding; the public surface speaks
//! milliseconds, matching the scene data model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// A non-negative duration offset on a scene or element timeline
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SceneTime(u64); // nanoseconds

impl SceneTime {
    /// Create a time from nanoseconds
    #[inline]
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    /// Create a time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, SceneError> {
        if milliseconds < 0.0 || !milliseconds.is_finite() {
            return Err(SceneError::InvalidTime { time: milliseconds });
        }
        Ok(Self((milliseconds * 1_000_000.0) as u64))
    }

    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Get time in nanoseconds
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Whether this time is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Scale this time by a non-negative ratio, rounding to the nearest
    /// nanosecond
    #[inline]
    pub fn scale(&self, ratio: f64) -> Self {
        Self((self.0 as f64 * ratio).max(0.0).round() as u64)
    }

    /// This time as a fraction of `total`, in `[0, ..)`.
    ///
    /// Returns 0.0 when `total` is zero so callers never divide by zero.
    #[inline]
    pub fn fraction_of(&self, total: SceneTime) -> f64 {
        if total.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / total.0 as f64
    }
}

impl std::ops::Add for SceneTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for SceneTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for SceneTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<f64> for SceneTime {
    /// Lossy conversion from milliseconds; negative and non-finite values
    /// become zero
    fn from(milliseconds: f64) -> Self {
        Self::from_millis(milliseconds.max(0.0)).unwrap_or_else(|_| Self::zero())
    }
}

impl From<SceneTime> for f64 {
    fn from(time: SceneTime) -> f64 {
        time.as_millis()
    }
}

impl From<Duration> for SceneTime {
    fn from(duration: Duration) -> Self {
        SceneTime::from_nanos(duration.as_nanos() as u64)
    }
}

impl From<SceneTime> for Duration {
    fn from(time: SceneTime) -> Duration {
        Duration::from_nanos(time.0)
    }
}

/// An element's `[start, end]` sub-range of its scene's timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: SceneTime,
    pub end: SceneTime,
}

impl Window {
    /// Create a window covering `[start, start + length]`
    #[inline]
    pub fn from_start_length(start: SceneTime, length: SceneTime) -> Self {
        Self {
            start,
            end: start + length,
        }
    }

    /// Get the duration of this window
    #[inline]
    pub fn duration(&self) -> SceneTime {
        self.end - self.start
    }

    /// Check if a time is within this window (inclusive)
    #[inline]
    pub fn contains(&self, time: SceneTime) -> bool {
        time >= self.start && time <= self.end
    }

    /// Check if this window overlaps with another window
    #[inline]
    pub fn overlaps(&self, other: &Window) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

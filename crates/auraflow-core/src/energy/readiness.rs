//! Overnight recovery score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness below this value flattens the curve and triggers reflow advice.
pub const LOW_READINESS_THRESHOLD: u8 = 60;

/// Overnight recovery quality, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Readiness(u8);

impl Readiness {
    /// Clamp `value` into 0..=100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_low(&self) -> bool {
        self.0 < LOW_READINESS_THRESHOLD
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self(85)
    }
}

impl From<u8> for Readiness {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Readiness> for u8 {
    fn from(readiness: Readiness) -> Self {
        readiness.0
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

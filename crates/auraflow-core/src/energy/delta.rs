//! Energy cost and recovery of activities.

use crate::rounding::round_half_up;
use crate::schedule::Intensity;

/// Recovery per hour of rest (intensity 1).
const RECOVERY_PER_HOUR: f64 = 15.0;
/// Burn per hour common to every non-rest activity.
const BASE_BURN_PER_HOUR: f64 = 5.0;
/// Additional burn per hour for each intensity step above 1.
const BURN_PER_INTENSITY_STEP: f64 = 5.0;

/// Signed energy change (percentage points) of an activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyDeltaModel;

impl EnergyDeltaModel {
    pub fn new() -> Self {
        Self
    }

    /// Positive for rest, negative for load. `duration` is in hours.
    pub fn delta(&self, duration: f64, intensity: Intensity) -> i32 {
        if intensity.is_recovery() {
            return round_half_up(duration * RECOVERY_PER_HOUR) as i32;
        }
        let steps = f64::from(intensity.value() - 1);
        let burn_rate = BASE_BURN_PER_HOUR + steps * BURN_PER_INTENSITY_STEP;
        round_half_up(duration * -burn_rate) as i32
    }

    /// Hourly rate for an intensity, signed like [`delta`](Self::delta).
    pub fn rate_per_hour(&self, intensity: Intensity) -> i32 {
        self.delta(1.0, intensity)
    }
}

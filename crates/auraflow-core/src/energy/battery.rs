//! Projected end-of-day energy budget.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleEvent;

/// Lowest projected balance reported; overplanning beyond this is flattened.
const FLOOR: i32 = -20;
const CEILING: i32 = 100;
const LOW_BELOW: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryStatus {
    Healthy,
    Low,
    /// Planned load exceeds the budget.
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryProjection {
    pub capacity: i32,
    /// Sum of every event's delta, completed or not.
    pub planned_delta: i32,
    pub projected: i32,
    pub status: BatteryStatus,
}

/// Energy budget for the day.
#[derive(Debug, Clone, Copy)]
pub struct EnergyBattery {
    capacity: i32,
}

impl Default for EnergyBattery {
    fn default() -> Self {
        Self::new(100)
    }
}

impl EnergyBattery {
    pub fn new(capacity: i32) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Balance left if every planned event happens.
    pub fn project(&self, events: &[ScheduleEvent]) -> BatteryProjection {
        let planned_delta: i32 = events.iter().map(ScheduleEvent::energy_delta).sum();
        let projected = (self.capacity + planned_delta).clamp(FLOOR, CEILING);
        let status = if projected < 0 {
            BatteryStatus::Critical
        } else if projected < LOW_BELOW {
            BatteryStatus::Low
        } else {
            BatteryStatus::Healthy
        };
        BatteryProjection {
            capacity: self.capacity,
            planned_delta,
            projected,
            status,
        }
    }
}

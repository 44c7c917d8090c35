//! End-of-day summary over completed events.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleEvent;

/// Character of the day, judged by completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    RestAndRecovery,
    BalancedFlow,
    PeakPerformance,
}

impl DayType {
    /// Load above 20 is a peak day, above 10 a balanced one.
    pub fn from_load(load: f64) -> Self {
        if load > 20.0 {
            Self::PeakPerformance
        } else if load > 10.0 {
            Self::BalancedFlow
        } else {
            Self::RestAndRecovery
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::RestAndRecovery => "Rest & Recovery",
            Self::BalancedFlow => "Balanced Flow",
            Self::PeakPerformance => "Peak Performance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::RestAndRecovery => "你今天给了身心充分的休息，为明天的挑战积蓄了能量。",
            Self::BalancedFlow => "如水般顺畅。你在产出与消耗之间找到了完美的平衡点。",
            Self::PeakPerformance => "不可思议的一天！你征服了高强度挑战，彻底释放了潜能。",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWrapUp {
    pub completed_count: usize,
    pub total_count: usize,
    /// Hours spent on completed events.
    pub focus_hours: f64,
    /// Σ duration × intensity over completed events.
    pub total_load: f64,
    /// Net energy change of completed events.
    pub energy_delta: i32,
    pub day_type: DayType,
}

impl DailyWrapUp {
    pub fn summarize(events: &[ScheduleEvent]) -> Self {
        let completed: Vec<&ScheduleEvent> = events.iter().filter(|e| e.completed).collect();
        let focus_hours: f64 = completed.iter().map(|e| e.duration).sum();
        let total_load: f64 = completed
            .iter()
            .map(|e| e.duration * f64::from(e.intensity.value()))
            .sum();
        let energy_delta: i32 = completed.iter().map(|e| e.energy_delta()).sum();

        Self {
            completed_count: completed.len(),
            total_count: events.len(),
            focus_hours,
            total_load,
            energy_delta,
            day_type: DayType::from_load(total_load),
        }
    }
}

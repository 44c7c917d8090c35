//! Recompute-on-read planning pipeline.
//!
//! [`Planner`] owns the mutable inputs (readiness, schedule, energy logs) and
//! derives everything else from scratch whenever it is asked:
//! readiness → curve, schedule → layout and per-event metrics, and
//! curve + schedule → coaching insight.

use serde::{Deserialize, Serialize};

use crate::coach::{ActionOutcome, CoachAdvisor, CoachInsight};
use crate::color::{ColorScale, EnergyTier};
use crate::energy::{
    BatteryProjection, BioCurve, BioCurveGenerator, EnergyBattery, EnergyLog, EnergyLogBook,
    Readiness,
};
use crate::error::{Result, ValidationError};
use crate::schedule::{
    match_score, EventDraft, EventStore, SaveOutcome, ScheduleEvent, MISMATCH_THRESHOLD,
};
use crate::storage::Config;
use crate::timeline::{LayoutMap, TimelineLayoutEngine};
use crate::wrapup::DailyWrapUp;

/// Derived numbers for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetrics {
    pub event_id: String,
    /// Curve energy at the event's start hour.
    pub energy_at_start: u8,
    pub energy_tier: EnergyTier,
    pub energy_delta: i32,
    pub match_score: u8,
    /// Incomplete and poorly matched to the available energy.
    pub mismatch: bool,
    pub intensity_label: String,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSnapshot {
    pub readiness: Readiness,
    pub curve: BioCurve,
    pub events: Vec<ScheduleEvent>,
    pub layouts: LayoutMap,
    pub metrics: Vec<EventMetrics>,
    pub battery: BatteryProjection,
    pub insight: Option<CoachInsight>,
}

/// Owner of the day's inputs.
#[derive(Debug, Clone)]
pub struct Planner {
    readiness: Readiness,
    store: EventStore,
    logs: EnergyLogBook,
    battery: EnergyBattery,
    insight_dismissed: bool,
}

impl Planner {
    pub fn new(readiness: Readiness, store: EventStore) -> Self {
        Self {
            readiness,
            store,
            logs: EnergyLogBook::new(),
            battery: EnergyBattery::default(),
            insight_dismissed: false,
        }
    }

    /// Planner seeded from configuration defaults.
    ///
    /// `store` replaces the demo schedule when given.
    pub fn from_config(config: &Config, store: Option<EventStore>) -> Self {
        let store = store.unwrap_or_else(|| {
            if config.planner.sample_schedule {
                EventStore::sample()
            } else {
                EventStore::new()
            }
        });
        Self::new(config.readiness(), store)
            .with_battery_capacity(config.planner.battery_capacity)
    }

    pub fn with_battery_capacity(mut self, capacity: i32) -> Self {
        self.battery = EnergyBattery::new(capacity);
        self
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn logs(&self) -> &EnergyLogBook {
        &self.logs
    }

    pub fn set_readiness(&mut self, readiness: Readiness) {
        if readiness != self.readiness {
            self.readiness = readiness;
            self.inputs_changed();
        }
    }

    pub fn save_event(&mut self, event: ScheduleEvent) -> SaveOutcome {
        let outcome = self.store.save(event);
        self.inputs_changed();
        outcome
    }

    /// # Errors
    /// Returns an error if the draft fails validation.
    pub fn create_event(&mut self, draft: EventDraft) -> Result<String, ValidationError> {
        let id = self.store.create(draft)?.id.clone();
        self.inputs_changed();
        Ok(id)
    }

    /// # Errors
    /// Returns an error if no event has this id.
    pub fn delete_event(&mut self, id: &str) -> Result<ScheduleEvent, ValidationError> {
        let removed = self.store.delete(id)?;
        self.inputs_changed();
        Ok(removed)
    }

    /// # Errors
    /// Returns an error if no event has this id.
    pub fn toggle_complete(&mut self, id: &str) -> Result<Option<i32>, ValidationError> {
        let delta = self.store.toggle_complete(id)?;
        self.inputs_changed();
        Ok(delta)
    }

    /// Record a manual energy sample; does not affect coaching.
    pub fn submit_log(&mut self, level: u8, timestamp_ms: i64) -> &EnergyLog {
        self.logs.submit(level, timestamp_ms)
    }

    pub fn curve(&self) -> BioCurve {
        BioCurveGenerator::new().generate(self.readiness)
    }

    pub fn layouts(&self) -> LayoutMap {
        TimelineLayoutEngine::new().layout(self.store.events())
    }

    /// Current insight, unless dismissed since the last input change.
    pub fn insight(&self) -> Option<CoachInsight> {
        if self.insight_dismissed {
            return None;
        }
        CoachAdvisor::new().advise(self.readiness, self.store.events(), &self.curve())
    }

    /// Hide the insight until readiness or the schedule changes.
    pub fn dismiss_insight(&mut self) {
        self.insight_dismissed = true;
    }

    /// Run the current insight's action.
    ///
    /// Returns `Ok(None)` when there is no visible insight.
    ///
    /// # Errors
    /// Returns an error if the action targets an event that no longer
    /// exists.
    pub fn apply_insight(&mut self) -> Result<Option<ActionOutcome>, ValidationError> {
        let Some(insight) = self.insight() else {
            return Ok(None);
        };
        let outcome = insight.action.apply(&mut self.store)?;
        self.inputs_changed();
        Ok(Some(outcome))
    }

    pub fn event_metrics(&self, curve: &BioCurve) -> Vec<EventMetrics> {
        let scale = ColorScale::new();
        self.store
            .events()
            .iter()
            .map(|event| {
                let energy = curve.level_at_or_default(event.start_hour());
                let score = match_score(event.intensity, energy);
                EventMetrics {
                    event_id: event.id.clone(),
                    energy_at_start: energy,
                    energy_tier: scale.classify(f64::from(energy)),
                    energy_delta: event.energy_delta(),
                    match_score: score,
                    mismatch: !event.completed && score < MISMATCH_THRESHOLD,
                    intensity_label: event.intensity.label().to_string(),
                }
            })
            .collect()
    }

    pub fn battery(&self) -> BatteryProjection {
        self.battery.project(self.store.events())
    }

    pub fn wrap_up(&self) -> DailyWrapUp {
        DailyWrapUp::summarize(self.store.events())
    }

    /// Recompute every derived output.
    pub fn snapshot(&self) -> PlannerSnapshot {
        let curve = self.curve();
        let insight = if self.insight_dismissed {
            None
        } else {
            CoachAdvisor::new().advise(self.readiness, self.store.events(), &curve)
        };
        PlannerSnapshot {
            readiness: self.readiness,
            layouts: self.layouts(),
            metrics: self.event_metrics(&curve),
            battery: self.battery(),
            events: self.store.events().to_vec(),
            insight,
            curve,
        }
    }

    fn inputs_changed(&mut self) {
        self.insight_dismissed = false;
    }
}

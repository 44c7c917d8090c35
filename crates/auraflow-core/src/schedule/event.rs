//! Schedule event types and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::energy::EnergyDeltaModel;
use crate::error::ValidationError;
use crate::rounding::round_half_up;

/// Match scores below this flag an incomplete event as a mismatch.
pub const MISMATCH_THRESHOLD: u8 = 60;

/// Load of an activity: 1 is recovery/rest, 2-5 is increasing load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const RECOVERY: Intensity = Intensity(1);
    pub const MAX: Intensity = Intensity(5);

    /// # Errors
    /// Returns an error if `value` is outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidIntensity(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_recovery(&self) -> bool {
        self.0 == 1
    }

    /// Deep-focus work (4 and 5).
    pub fn is_high_load(&self) -> bool {
        self.0 >= 4
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "恢复/休息",
            4..=5 => "深度专注",
            3 => "中等负荷",
            _ => "轻松休闲",
        }
    }
}

impl TryFrom<u8> for Intensity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a scheduled activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[default]
    Work,
    Personal,
    Health,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
        }
    }
}

/// A planned activity on the day's timeline.
///
/// Deserialization goes through [`ScheduleEvent::try_new`], so a parsed
/// event is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ScheduleEventRecord")]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    /// Hours since midnight, half-hour granularity.
    pub start_time: f64,
    /// Hours, strictly positive.
    pub duration: f64,
    pub intensity: Intensity,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub completed: bool,
}

/// Wire form of an event before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleEventRecord {
    id: String,
    title: String,
    start_time: f64,
    duration: f64,
    intensity: u8,
    #[serde(default)]
    category: EventCategory,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<ScheduleEventRecord> for ScheduleEvent {
    type Error = ValidationError;

    fn try_from(record: ScheduleEventRecord) -> Result<Self, Self::Error> {
        Ok(Self::try_new(
            record.id,
            record.title,
            record.start_time,
            record.duration,
            record.intensity,
        )?
        .with_category(record.category)
        .with_completed(record.completed))
    }
}

impl ScheduleEvent {
    /// Create a validated event.
    ///
    /// # Errors
    /// Returns an error if the start time is outside [0, 24) or off the
    /// half-hour grid, the duration is not positive, or the intensity is
    /// outside 1..=5.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: f64,
        duration: f64,
        intensity: u8,
    ) -> Result<Self, ValidationError> {
        validate_start(start_time)?;
        if !(duration > 0.0) || !duration.is_finite() {
            return Err(ValidationError::InvalidDuration(duration));
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            start_time,
            duration,
            intensity: Intensity::new(intensity)?,
            category: EventCategory::Work,
            completed: false,
        })
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// End in decimal hours. May exceed 24.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Hour slot the event starts in.
    pub fn start_hour(&self) -> i64 {
        self.start_time.floor() as i64
    }

    /// Strict interval overlap; touching endpoints do not collide.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time.max(other.start_time) < self.end_time().min(other.end_time())
    }

    /// Energy change from doing this activity.
    pub fn energy_delta(&self) -> i32 {
        EnergyDeltaModel::new().delta(self.duration, self.intensity)
    }

    pub fn is_pending_high_load(&self) -> bool {
        !self.completed && self.intensity.is_high_load()
    }
}

/// User input for a new event; the store mints the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start_time: f64,
    pub duration: f64,
    pub intensity: u8,
    pub category: EventCategory,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            start_time: 9.0,
            duration: 1.0,
            intensity: 3,
            category: EventCategory::Work,
        }
    }
}

impl EventDraft {
    pub(crate) fn into_event(self, id: String) -> Result<ScheduleEvent, ValidationError> {
        let title = if self.title.trim().is_empty() {
            "新事项".to_string()
        } else {
            self.title
        };
        Ok(
            ScheduleEvent::try_new(id, title, self.start_time, self.duration, self.intensity)?
                .with_category(self.category),
        )
    }
}

fn validate_start(start_time: f64) -> Result<(), ValidationError> {
    let on_grid = (start_time * 2.0).fract() == 0.0;
    if !(0.0..24.0).contains(&start_time) || !on_grid {
        return Err(ValidationError::InvalidStartTime(start_time));
    }
    Ok(())
}

/// How well an activity's load fits the energy available, 0-100.
pub fn match_score(intensity: Intensity, energy: u8) -> u8 {
    let normalized = i32::from(intensity.value()) * 20;
    let diff = (normalized - i32::from(energy)).abs();
    (100 - diff).max(0) as u8
}

/// Render decimal hours as a 12-hour clock, e.g. `13.5` -> `1:30 PM`.
pub fn format_clock(hours: f64) -> String {
    let whole = hours.floor();
    let minutes = round_half_up((hours - whole) * 60.0) as i64;
    let hour = (whole as i64).rem_euclid(24);
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{display_hour}:{minutes:02} {meridiem}")
}

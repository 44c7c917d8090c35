//! # Auraflow Core Library
//!
//! This library provides the core logic behind Auraflow, a single-user day
//! planner that overlays a schedule of activities on a synthetic energy
//! curve. Everything is computed in memory from a handful of inputs; the CLI
//! is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Energy**: 24-hour curve generated from overnight readiness, the energy
//!   cost of activities, the projected daily budget and manual energy logs
//! - **Color**: five-stop gradient and tier labels for any energy value
//! - **Timeline**: overlap-group column layout for concurrent events
//! - **Coach**: at most one insight (reflow or energy-gap warning) carrying a
//!   replayable corrective action
//! - **Planner**: owns the inputs and recomputes every output on demand
//!
//! ## Key Components
//!
//! - [`BioCurveGenerator`]: readiness → hourly energy curve
//! - [`TimelineLayoutEngine`]: events → column placement
//! - [`CoachAdvisor`]: readiness + events + curve → insight
//! - [`Planner`]: the full pipeline
//! - [`Config`]: application configuration management

pub mod coach;
pub mod color;
pub mod energy;
pub mod error;
pub mod planner;
pub mod schedule;
pub mod storage;
pub mod timeline;
pub mod wrapup;

mod rounding;

pub use coach::{ActionOutcome, CoachAction, CoachAdvisor, CoachInsight, InsightKind};
pub use color::{ColorScale, EnergyTier, Rgb};
pub use energy::{
    BatteryProjection, BatteryStatus, BioCurve, BioCurveGenerator, BioMetricPoint, EnergyBattery,
    EnergyDeltaModel, EnergyLog, EnergyLogBook, MetricSource, Readiness,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use planner::{EventMetrics, Planner, PlannerSnapshot};
pub use schedule::{EventCategory, EventDraft, EventStore, Intensity, ScheduleEvent};
pub use storage::Config;
pub use timeline::{EventLayout, LayoutMap, TimelineLayoutEngine};
pub use wrapup::{DailyWrapUp, DayType};

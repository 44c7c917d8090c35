//! Energy modelling.
//!
//! This module provides the synthetic daily energy curve derived from
//! overnight readiness, the energy cost of activities, the projected energy
//! budget for the day, and the log of manually reported energy samples.

mod battery;
mod curve;
mod delta;
mod log;
mod readiness;

pub use battery::{BatteryProjection, BatteryStatus, EnergyBattery};
pub use curve::{BioCurve, BioCurveGenerator, BioMetricPoint, MetricSource, UNKNOWN_HOUR_ENERGY};
pub use delta::EnergyDeltaModel;
pub use log::{EnergyLog, EnergyLogBook};
pub use readiness::{Readiness, LOW_READINESS_THRESHOLD};

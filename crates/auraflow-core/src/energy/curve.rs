//! Synthetic circadian energy curve.
//!
//! The curve has one point per hour. Its shape is fixed (sleep ramp, morning
//! rise, late-morning peak, post-lunch dip, afternoon recovery, evening wind
//! down); readiness only decides whether it gets flattened.

use serde::{Deserialize, Serialize};

use super::readiness::Readiness;
use crate::color::ColorScale;
use crate::rounding::round_half_up;

/// Energy assumed for an hour the curve has no point for.
pub const UNKNOWN_HOUR_ENERGY: u8 = 50;

const MIN_LEVEL: f64 = 10.0;
const MAX_LEVEL: f64 = 100.0;

/// Where a curve point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricSource {
    Prediction,
    Actual,
}

/// Energy level for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BioMetricPoint {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Energy level (0-100)
    pub energy_level: u8,
    pub source: MetricSource,
}

/// A day's energy curve, ascending by hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BioCurve {
    points: Vec<BioMetricPoint>,
}

impl BioCurve {
    /// Build a curve from arbitrary points, sorted by hour.
    pub fn from_points(mut points: Vec<BioMetricPoint>) -> Self {
        points.sort_by_key(|p| p.hour);
        Self { points }
    }

    pub fn points(&self) -> &[BioMetricPoint] {
        &self.points
    }

    /// Energy at `hour`, if the curve has a point for it.
    pub fn level_at(&self, hour: i64) -> Option<u8> {
        let hour = u8::try_from(hour).ok()?;
        self.points
            .iter()
            .find(|p| p.hour == hour)
            .map(|p| p.energy_level)
    }

    /// Energy at `hour`, or [`UNKNOWN_HOUR_ENERGY`] when missing or zero.
    pub fn level_at_or_default(&self, hour: i64) -> u8 {
        self.level_at(hour)
            .filter(|&level| level > 0)
            .unwrap_or(UNKNOWN_HOUR_ENERGY)
    }

    /// First point with the highest level.
    pub fn peak(&self) -> Option<&BioMetricPoint> {
        self.points
            .iter()
            .rev()
            .max_by_key(|p| p.energy_level)
    }

    /// First point with the lowest level.
    pub fn trough(&self) -> Option<&BioMetricPoint> {
        self.points.iter().min_by_key(|p| p.energy_level)
    }

    /// Render the curve as an ASCII bar chart, one row per hour.
    pub fn render_ascii_chart(&self) -> String {
        let scale = ColorScale::new();
        let mut output = String::from("\nEnergy Curve:\n");
        output.push_str(&"─".repeat(50));
        output.push('\n');

        for point in &self.points {
            let bar_length = (usize::from(point.energy_level) * 30 / 100).min(30);
            let bar = "█".repeat(bar_length);
            let empty = " ".repeat(30 - bar_length);
            output.push_str(&format!(
                "{:02}:00 {}{} {:>3}% {}\n",
                point.hour,
                bar,
                empty,
                point.energy_level,
                scale.classify(f64::from(point.energy_level)).label()
            ));
        }

        output.push_str(&"─".repeat(50));
        output.push('\n');
        output
    }
}

/// Produces the 24-point curve from a readiness score.
#[derive(Debug, Clone, Copy, Default)]
pub struct BioCurveGenerator;

impl BioCurveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the curve for `readiness`. Deterministic; no hidden state.
    pub fn generate(&self, readiness: Readiness) -> BioCurve {
        let low = readiness.is_low();
        let points = (0..24u8)
            .map(|hour| {
                let mut level = base_level(hour);
                if low {
                    // flatten peaks, deepen troughs; exactly 50 stays put
                    if level > 50.0 {
                        level *= 0.8;
                    } else if level < 50.0 {
                        level *= 0.9;
                    }
                }
                BioMetricPoint {
                    hour,
                    energy_level: round_half_up(level).clamp(MIN_LEVEL, MAX_LEVEL) as u8,
                    source: MetricSource::Prediction,
                }
            })
            .collect();
        tracing::debug!(readiness = readiness.value(), low, "bio curve generated");
        BioCurve { points }
    }
}

/// Shape of the curve before the readiness modifier.
///
/// Hour 11 is the explicit peak; the morning rise stops before it.
fn base_level(hour: u8) -> f64 {
    let i = f64::from(hour);
    match hour {
        0..=5 => 30.0 + 2.0 * i,
        6..=10 => 60.0 + 8.0 * (i - 6.0),
        11 => 95.0,
        12..=14 => 95.0 - 15.0 * (i - 11.0),
        15..=18 => 50.0 + 5.0 * (i - 15.0),
        _ => 70.0 - 10.0 * (i - 19.0),
    }
}

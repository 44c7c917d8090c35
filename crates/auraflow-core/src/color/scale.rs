//! Color stops, interpolation and tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rounding::round_half_up;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Qualitative energy tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTier {
    Drained,
    Tired,
    Steady,
    Productive,
    Flow,
}

impl EnergyTier {
    /// Display label shown next to energy values.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Drained => "低效",
            Self::Tired => "疲惫",
            Self::Steady => "平稳",
            Self::Productive => "高效",
            Self::Flow => "心流",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drained => "drained",
            Self::Tired => "tired",
            Self::Steady => "steady",
            Self::Productive => "productive",
            Self::Flow => "flow",
        }
    }
}

impl fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One control point of the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgb,
    pub tier: EnergyTier,
}

/// The five control points, ascending by value.
pub const COLOR_STOPS: [ColorStop; 5] = [
    ColorStop { value: 0.0, color: Rgb::new(239, 68, 68), tier: EnergyTier::Drained },
    ColorStop { value: 25.0, color: Rgb::new(249, 115, 22), tier: EnergyTier::Tired },
    ColorStop { value: 50.0, color: Rgb::new(234, 179, 8), tier: EnergyTier::Steady },
    ColorStop { value: 75.0, color: Rgb::new(16, 185, 129), tier: EnergyTier::Productive },
    ColorStop { value: 100.0, color: Rgb::new(99, 102, 241), tier: EnergyTier::Flow },
];

/// Piecewise-linear color scale over a set of ascending stops.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    stops: &'static [ColorStop],
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorScale {
    /// The standard red → indigo energy scale.
    pub fn new() -> Self {
        Self {
            stops: &COLOR_STOPS,
        }
    }

    pub fn stops(&self) -> &'static [ColorStop] {
        self.stops
    }

    /// Interpolated color for `value`.
    ///
    /// Values at or beyond either end return that endpoint's color exactly.
    pub fn interpolate(&self, value: f64) -> Rgb {
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if value.is_nan() || value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (start, end) = (&pair[0], &pair[1]);
            if value >= start.value && value <= end.value {
                let t = (value - start.value) / (end.value - start.value);
                let [r, g, b] = lerp_channels(start.color, end.color, t);
                return Rgb::new(r, g, b);
            }
        }
        last.color
    }

    /// Tier for `value` using midpoint boundaries between adjacent stops.
    ///
    /// A value belongs to stop `i` when it is `<=` the midpoint between stop
    /// `i` and stop `i + 1`; anything past the last midpoint is the top tier.
    pub fn classify(&self, value: f64) -> EnergyTier {
        for pair in self.stops.windows(2) {
            let boundary = (pair[0].value + pair[1].value) / 2.0;
            if value <= boundary {
                return pair[0].tier;
            }
        }
        self.stops[self.stops.len() - 1].tier
    }
}

fn lerp_channels(start: Rgb, end: Rgb, t: f64) -> [u8; 3] {
    let (s, e) = (start.channels(), end.channels());
    let mut out = [0u8; 3];
    for i in 0..3 {
        let from = f64::from(s[i]);
        let to = f64::from(e[i]);
        out[i] = round_half_up(from + (to - from) * t).clamp(0.0, 255.0) as u8;
    }
    out
}

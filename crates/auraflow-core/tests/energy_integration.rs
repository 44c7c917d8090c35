//! Integration tests for the energy curve, delta model and color scale.

use auraflow_core::color::COLOR_STOPS;
use auraflow_core::{
    BioCurveGenerator, ColorScale, EnergyBattery, EnergyDeltaModel, EnergyTier, EventStore,
    Intensity, Readiness,
};
use proptest::prelude::*;

#[test]
fn test_curve_covers_every_hour_in_order() {
    let generator = BioCurveGenerator::new();
    for readiness in [0, 45, 59, 60, 85, 100] {
        let curve = generator.generate(Readiness::new(readiness));
        let hours: Vec<u8> = curve.points().iter().map(|p| p.hour).collect();
        assert_eq!(hours, (0..24).collect::<Vec<u8>>());
    }
}

#[test]
fn test_curve_shape_at_normal_readiness() {
    let curve = BioCurveGenerator::new().generate(Readiness::new(85));
    assert_eq!(curve.peak().map(|p| (p.hour, p.energy_level)), Some((11, 95)));
    assert_eq!(curve.level_at(13), Some(65));
    assert_eq!(curve.level_at(3), Some(36));
    assert_eq!(curve.level_at(24), None);
}

#[test]
fn test_low_readiness_threshold_is_sixty() {
    let generator = BioCurveGenerator::new();
    let low = generator.generate(Readiness::new(59));
    let normal = generator.generate(Readiness::new(60));
    assert_eq!(normal.level_at(11), Some(95));
    assert_eq!(low.level_at(11), Some(76));
    // exactly 50 is untouched by the low modifier
    assert_eq!(low.level_at(14), Some(50));
    assert_eq!(low.level_at(0), Some(27));
}

#[test]
fn test_low_curve_never_exceeds_normal_curve() {
    let generator = BioCurveGenerator::new();
    let low = generator.generate(Readiness::new(30));
    let normal = generator.generate(Readiness::new(90));
    for (l, n) in low.points().iter().zip(normal.points()) {
        assert!(l.energy_level <= n.energy_level, "hour {}", l.hour);
    }
}

#[test]
fn test_curve_levels_classify_into_tiers() {
    let curve = BioCurveGenerator::new().generate(Readiness::new(85));
    let scale = ColorScale::new();
    let peak = curve.peak().unwrap();
    assert_eq!(scale.classify(f64::from(peak.energy_level)), EnergyTier::Flow);
    let trough = curve.trough().unwrap();
    assert_eq!(scale.classify(f64::from(trough.energy_level)), EnergyTier::Tired);
}

#[test]
fn test_sample_day_battery() {
    // 2h @5 = -50, 1h @3 = -15, 1.5h @4 = -30
    let projection = EnergyBattery::default().project(EventStore::sample().events());
    assert_eq!(projection.planned_delta, -95);
    assert_eq!(projection.projected, 5);
}

#[test]
fn test_color_scale_hits_stops_exactly() {
    let scale = ColorScale::new();
    for stop in &COLOR_STOPS {
        assert_eq!(scale.interpolate(stop.value), stop.color);
        assert_eq!(scale.classify(stop.value), stop.tier);
    }
}

fn intensity_strategy() -> impl Strategy<Value = Intensity> {
    (1u8..=5).prop_map(|v| Intensity::new(v).unwrap())
}

proptest! {
    #[test]
    fn color_channels_stay_between_neighbouring_stops(value in 0.0f64..=100.0) {
        let rgb = ColorScale::new().interpolate(value);
        let segment = COLOR_STOPS
            .windows(2)
            .find(|pair| value >= pair[0].value && value <= pair[1].value)
            .unwrap();
        let (a, b) = (segment[0].color, segment[1].color);
        for (got, lo, hi) in [(rgb.r, a.r, b.r), (rgb.g, a.g, b.g), (rgb.b, a.b, b.b)] {
            prop_assert!(got >= lo.min(hi) && got <= lo.max(hi));
        }
    }

    #[test]
    fn out_of_range_values_clamp_to_endpoints(value in 100.0f64..1.0e6) {
        let scale = ColorScale::new();
        prop_assert_eq!(scale.interpolate(value), COLOR_STOPS[4].color);
        prop_assert_eq!(scale.interpolate(-value), COLOR_STOPS[0].color);
        prop_assert_eq!(scale.classify(value), EnergyTier::Flow);
        prop_assert_eq!(scale.classify(-value), EnergyTier::Drained);
    }

    #[test]
    fn curve_levels_are_bounded(readiness in 0u8..=100) {
        let curve = BioCurveGenerator::new().generate(Readiness::new(readiness));
        prop_assert_eq!(curve.points().len(), 24);
        for point in curve.points() {
            prop_assert!((10..=100).contains(&point.energy_level));
        }
    }

    #[test]
    fn delta_sign_follows_intensity(half_hours in 1u32..=48, intensity in intensity_strategy()) {
        let duration = f64::from(half_hours) / 2.0;
        let delta = EnergyDeltaModel::new().delta(duration, intensity);
        if intensity.is_recovery() {
            prop_assert!(delta > 0);
        } else {
            prop_assert!(delta < 0);
        }
    }

    #[test]
    fn delta_grows_with_duration(half_hours in 1u32..48, intensity in intensity_strategy()) {
        let model = EnergyDeltaModel::new();
        let shorter = model.delta(f64::from(half_hours) / 2.0, intensity).abs();
        let longer = model.delta(f64::from(half_hours + 1) / 2.0, intensity).abs();
        prop_assert!(longer >= shorter);
    }
}

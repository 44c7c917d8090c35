//! Integration tests for the timeline layout engine.

use auraflow_core::{EventStore, ScheduleEvent, TimelineLayoutEngine};
use proptest::prelude::*;

fn event(id: &str, start: f64, duration: f64) -> ScheduleEvent {
    ScheduleEvent::try_new(id, id, start, duration, 3).unwrap()
}

/// Up to a dozen events on the half-hour grid with unique ids.
fn events_strategy() -> impl Strategy<Value = Vec<ScheduleEvent>> {
    prop::collection::vec((0u8..48, 1u8..=8, 1u8..=5), 0..12).prop_map(|seeds| {
        seeds
            .into_iter()
            .enumerate()
            .map(|(i, (start, duration, intensity))| {
                ScheduleEvent::try_new(
                    format!("e{i}"),
                    "generated",
                    f64::from(start) / 2.0,
                    f64::from(duration) / 2.0,
                    intensity,
                )
                .unwrap()
            })
            .collect()
    })
}

#[test]
fn test_sample_schedule_has_no_overlaps() {
    let store = EventStore::sample();
    let map = TimelineLayoutEngine::new().layout(store.events());
    assert_eq!(map.len(), 3);
    for layout in map.values() {
        assert_eq!(layout.column, 0);
        assert_eq!(layout.width_percent, 100.0);
    }
}

#[test]
fn test_same_start_same_duration_split_evenly() {
    let map = TimelineLayoutEngine::new().layout(&[event("a", 14.0, 1.0), event("b", 14.0, 1.0)]);
    assert_eq!(map["a"].width_percent, 50.0);
    assert_eq!(map["b"].width_percent, 50.0);
    assert_ne!(map["a"].column, map["b"].column);
}

#[test]
fn test_chain_group_reuses_first_column() {
    let events = [event("a", 9.0, 1.0), event("b", 9.5, 1.0), event("c", 10.0, 1.0)];
    let map = TimelineLayoutEngine::new().layout(&events);
    assert_eq!(map["a"].columns, 2);
    assert_eq!(map["c"].columns, 2);
    assert_eq!(map["a"].column, map["c"].column);
    assert_ne!(map["a"].column, map["b"].column);
}

#[test]
fn test_groups_are_independent() {
    // the busy morning must not squeeze the lone afternoon block
    let events = [
        event("m1", 9.0, 2.0),
        event("m2", 9.0, 2.0),
        event("m3", 10.0, 1.0),
        event("pm", 15.0, 1.0),
    ];
    let map = TimelineLayoutEngine::new().layout(&events);
    assert_eq!(map["m3"].columns, 3);
    assert_eq!(map["pm"].columns, 1);
    assert_eq!(map["pm"].width_percent, 100.0);
}

#[test]
fn test_layout_is_idempotent() {
    let engine = TimelineLayoutEngine::new();
    let events = [event("a", 9.0, 2.0), event("b", 9.5, 1.0), event("c", 12.0, 1.0)];
    assert_eq!(engine.layout(&events), engine.layout(&events));
}

proptest! {
    #[test]
    fn layout_is_order_independent(
        (events, shuffled) in events_strategy()
            .prop_flat_map(|events| (Just(events.clone()), Just(events).prop_shuffle()))
    ) {
        let engine = TimelineLayoutEngine::new();
        prop_assert_eq!(engine.layout(&events), engine.layout(&shuffled));
    }

    #[test]
    fn overlapping_events_never_share_a_column(events in events_strategy()) {
        let map = TimelineLayoutEngine::new().layout(&events);
        prop_assert_eq!(map.len(), events.len());

        for (i, a) in events.iter().enumerate() {
            let la = map[a.id.as_str()];
            prop_assert!(la.column < la.columns);
            prop_assert!((la.width_percent * la.columns as f64 - 100.0).abs() < 1e-9);
            prop_assert!((la.offset_percent - la.column as f64 * la.width_percent).abs() < 1e-9);

            for b in &events[i + 1..] {
                if a.overlaps(b) {
                    let lb = map[b.id.as_str()];
                    prop_assert_eq!(la.columns, lb.columns);
                    prop_assert_ne!(la.column, lb.column);
                }
            }
        }
    }

    #[test]
    fn groups_partition_the_input(events in events_strategy()) {
        let groups = TimelineLayoutEngine::new().overlap_groups(&events);
        let total: usize = groups.iter().map(Vec::len).sum();
        prop_assert_eq!(total, events.len());

        // consecutive groups never overlap
        for pair in groups.windows(2) {
            let end = pair[0].iter().map(|e| e.end_time()).fold(f64::NEG_INFINITY, f64::max);
            let next_start = pair[1].iter().map(|e| e.start_time).fold(f64::INFINITY, f64::min);
            prop_assert!(next_start >= end);
        }
    }
}

//! Overlap-group column packing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::schedule::ScheduleEvent;

/// Horizontal placement of one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout {
    /// Zero-based column within the event's overlap group.
    pub column: usize,
    /// Number of columns in the event's overlap group.
    pub columns: usize,
    pub width_percent: f64,
    /// Left edge, `column * width_percent`.
    pub offset_percent: f64,
}

/// Event id to placement.
pub type LayoutMap = BTreeMap<String, EventLayout>;

/// Packs overlapping events into side-by-side columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineLayoutEngine;

impl TimelineLayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the placement of every event.
    ///
    /// The result does not depend on the order of `events`.
    pub fn layout(&self, events: &[ScheduleEvent]) -> LayoutMap {
        let mut map = LayoutMap::new();
        let groups = self.overlap_groups(events);

        for group in &groups {
            let (columns_of, total) = assign_columns(group);
            let width = 100.0 / total as f64;
            for (event, column) in group.iter().zip(columns_of) {
                map.insert(
                    event.id.clone(),
                    EventLayout {
                        column,
                        columns: total,
                        width_percent: width,
                        offset_percent: column as f64 * width,
                    },
                );
            }
        }

        tracing::debug!(events = events.len(), groups = groups.len(), "timeline layout computed");
        map
    }

    /// Partition events into maximal chains of overlapping intervals.
    ///
    /// Events are sorted by start time, longer first on equal starts. A group
    /// keeps absorbing the next event while it starts before the group's
    /// furthest end, so two events can share a group through a third one
    /// without overlapping each other.
    pub fn overlap_groups<'a>(&self, events: &'a [ScheduleEvent]) -> Vec<Vec<&'a ScheduleEvent>> {
        let mut sorted: Vec<&ScheduleEvent> = events.iter().collect();
        sorted.sort_by(|a, b| layout_order(a, b));

        let mut groups: Vec<Vec<&ScheduleEvent>> = Vec::new();
        let mut group_end = f64::NEG_INFINITY;
        for event in sorted {
            if event.start_time < group_end {
                if let Some(group) = groups.last_mut() {
                    group.push(event);
                    group_end = group_end.max(event.end_time());
                    continue;
                }
            }
            group_end = event.end_time();
            groups.push(vec![event]);
        }
        groups
    }
}

/// Start ascending, then duration descending, then id for a total order.
fn layout_order(a: &ScheduleEvent, b: &ScheduleEvent) -> Ordering {
    a.start_time
        .total_cmp(&b.start_time)
        .then_with(|| b.duration.total_cmp(&a.duration))
        .then_with(|| a.id.cmp(&b.id))
}

/// Greedy first-fit coloring of one group. Returns each event's column in
/// group order and the number of columns opened.
fn assign_columns(group: &[&ScheduleEvent]) -> (Vec<usize>, usize) {
    let mut columns: Vec<Vec<&ScheduleEvent>> = Vec::new();
    let mut assigned = Vec::with_capacity(group.len());

    for &event in group {
        let free = columns
            .iter()
            .position(|members| members.iter().all(|placed| !placed.overlaps(event)));
        match free {
            Some(index) => {
                columns[index].push(event);
                assigned.push(index);
            }
            None => {
                columns.push(vec![event]);
                assigned.push(columns.len() - 1);
            }
        }
    }

    let total = columns.len().max(1);
    (assigned, total)
}

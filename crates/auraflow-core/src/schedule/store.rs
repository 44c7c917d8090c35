//! Ordered in-memory event collection.
//!
//! Insertion order is meaningful: the coach scans events in this order when
//! looking for an energy gap.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::event::{EventCategory, EventDraft, ScheduleEvent};
use super::mint_id;
use crate::error::{Result, ValidationError};

/// Result of [`EventStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// The day's schedule.
///
/// Deserialized as a plain JSON array; ids must be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScheduleEvent>", into = "Vec<ScheduleEvent>")]
pub struct EventStore {
    events: Vec<ScheduleEvent>,
}

impl TryFrom<Vec<ScheduleEvent>> for EventStore {
    type Error = ValidationError;

    fn try_from(events: Vec<ScheduleEvent>) -> std::result::Result<Self, Self::Error> {
        let duplicate = {
            let mut seen = HashSet::with_capacity(events.len());
            let repeated = events.iter().find(|e| !seen.insert(e.id.as_str()));
            repeated.map(|e| e.id.clone())
        };
        match duplicate {
            Some(id) => Err(ValidationError::DuplicateEvent(id)),
            None => Ok(Self { events }),
        }
    }
}

impl From<EventStore> for Vec<ScheduleEvent> {
    fn from(store: EventStore) -> Self {
        store.events
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<ScheduleEvent>) -> Self {
        Self { events }
    }

    /// Demo schedule: a morning deep-work block, a sync in the post-lunch
    /// dip, and an evening workout.
    pub fn sample() -> Self {
        let seed = [
            ("1", "深度工作：战略规划", 9.0, 2.0, 5, EventCategory::Work),
            ("2", "团队同步会", 13.0, 1.0, 3, EventCategory::Work),
            ("3", "力量训练", 17.5, 1.5, 4, EventCategory::Health),
        ];
        let events = seed
            .into_iter()
            .filter_map(|(id, title, start, duration, intensity, category)| {
                ScheduleEvent::try_new(id, title, start, duration, intensity)
                    .ok()
                    .map(|e| e.with_category(category))
            })
            .collect();
        Self { events }
    }

    /// Parse a JSON array of events.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed, an event fails
    /// [`ScheduleEvent::try_new`] validation, or two events share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replace the event with the same id in place, or append it.
    pub fn save(&mut self, event: ScheduleEvent) -> SaveOutcome {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => {
                *existing = event;
                SaveOutcome::Updated
            }
            None => {
                self.events.push(event);
                SaveOutcome::Created
            }
        }
    }

    /// Validate a draft, mint an id for it and append it.
    ///
    /// # Errors
    /// Returns an error if the draft fails validation.
    pub fn create(&mut self, draft: EventDraft) -> Result<&ScheduleEvent, ValidationError> {
        let event = draft.into_event(mint_id())?;
        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// # Errors
    /// Returns an error if no event has this id.
    pub fn delete(&mut self, id: &str) -> Result<ScheduleEvent, ValidationError> {
        let index = self.position(id)?;
        Ok(self.events.remove(index))
    }

    /// Flip the completion flag.
    ///
    /// Returns the activity's energy delta when the event becomes completed,
    /// `None` when it is being reopened.
    ///
    /// # Errors
    /// Returns an error if no event has this id.
    pub fn toggle_complete(&mut self, id: &str) -> Result<Option<i32>, ValidationError> {
        let index = self.position(id)?;
        let event = &mut self.events[index];
        event.completed = !event.completed;
        Ok(event.completed.then(|| event.energy_delta()))
    }

    /// Remove every event matching `predicate`, returning the removed ids.
    pub(crate) fn remove_where<F>(&mut self, mut predicate: F) -> Vec<String>
    where
        F: FnMut(&ScheduleEvent) -> bool,
    {
        let mut removed = Vec::new();
        self.events.retain(|e| {
            if predicate(e) {
                removed.push(e.id.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub(crate) fn push(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }

    fn position(&self, id: &str) -> Result<usize, ValidationError> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ValidationError::UnknownEvent(id.to_string()))
    }
}

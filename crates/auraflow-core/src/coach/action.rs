//! Corrective actions attached to insights and their interpreter.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::schedule::{mint_id, EventCategory, EventStore, Intensity, ScheduleEvent};

/// Length of an inserted recovery block, in hours.
pub const RECOVERY_SLOT_HOURS: f64 = 0.5;
pub const RECOVERY_TITLE: &str = "🧘 能量冥想";

/// A schedule mutation suggested by the coach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoachAction {
    /// Drop every incomplete intensity 4-5 event.
    ///
    /// `event_ids` are the events that qualified when the insight was made;
    /// the predicate is evaluated again when the action runs.
    DeferHighLoad { event_ids: Vec<String> },
    /// Put a short rest block `offset_hours` before an event.
    InsertRecovery {
        before_event_id: String,
        offset_hours: f64,
    },
}

/// What applying an action changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    Deferred { removed: Vec<String> },
    Inserted { event: ScheduleEvent },
}

impl CoachAction {
    /// Execute the action against `store`.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownEvent`] if a recovery block targets
    /// an event that is no longer in the store.
    pub fn apply(&self, store: &mut EventStore) -> Result<ActionOutcome, ValidationError> {
        match self {
            Self::DeferHighLoad { .. } => {
                let removed = store.remove_where(ScheduleEvent::is_pending_high_load);
                tracing::info!(removed = removed.len(), "deferred high-load events");
                Ok(ActionOutcome::Deferred { removed })
            }
            Self::InsertRecovery {
                before_event_id,
                offset_hours,
            } => {
                let Some(target) = store.get(before_event_id) else {
                    tracing::warn!(event = %before_event_id, "recovery target no longer scheduled");
                    return Err(ValidationError::UnknownEvent(before_event_id.clone()));
                };
                let event = ScheduleEvent {
                    id: mint_id(),
                    title: RECOVERY_TITLE.to_string(),
                    start_time: (target.start_time - offset_hours).max(0.0),
                    duration: RECOVERY_SLOT_HOURS,
                    intensity: Intensity::RECOVERY,
                    category: EventCategory::Health,
                    completed: false,
                };
                tracing::info!(before = %before_event_id, start = event.start_time, "inserted recovery block");
                store.push(event.clone());
                Ok(ActionOutcome::Inserted { event })
            }
        }
    }
}

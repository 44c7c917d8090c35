//! Schedule events and the in-memory collection that owns them.
//!
//! Times are decimal hours since midnight (`13.5` is 1:30 PM). Events are
//! never persisted; the [`EventStore`] lives as long as the caller keeps it.

mod event;
mod store;

pub use event::{
    format_clock, match_score, EventCategory, EventDraft, Intensity, ScheduleEvent,
    MISMATCH_THRESHOLD,
};
pub use store::{EventStore, SaveOutcome};

/// Mint a fresh opaque identifier.
pub(crate) fn mint_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

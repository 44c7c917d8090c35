//! Coaching insights.
//!
//! The advisor looks at readiness, the schedule and the energy curve and
//! produces at most one insight. An insight carries a [`CoachAction`] the
//! caller may execute against the [`EventStore`](crate::schedule::EventStore).

mod action;
mod advisor;

pub use action::{ActionOutcome, CoachAction, RECOVERY_SLOT_HOURS, RECOVERY_TITLE};
pub use advisor::{CoachAdvisor, CoachInsight, InsightKind, GAP_ENERGY_THRESHOLD};

//! Insight selection.

use serde::{Deserialize, Serialize};

use super::action::{CoachAction, RECOVERY_SLOT_HOURS};
use crate::energy::{BioCurve, Readiness};
use crate::schedule::{format_clock, ScheduleEvent};

/// Curve energy below this at an event's start hour is an energy gap.
pub const GAP_ENERGY_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Low readiness with deep work still planned.
    Reflow,
    /// Demanding work planned in an energy trough.
    GapWarning,
}

/// Advice derived from the current inputs. Ephemeral; recomputed on change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub affected_event_ids: Vec<String>,
    pub action: CoachAction,
}

/// Picks the single most relevant insight, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoachAdvisor;

impl CoachAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Reflow advice wins over a gap warning; otherwise nothing.
    pub fn advise(
        &self,
        readiness: Readiness,
        events: &[ScheduleEvent],
        curve: &BioCurve,
    ) -> Option<CoachInsight> {
        let insight = self
            .reflow(readiness, events)
            .or_else(|| self.gap_warning(events, curve));
        tracing::debug!(
            readiness = readiness.value(),
            events = events.len(),
            insight = ?insight.as_ref().map(|i| i.kind),
            "coach evaluated"
        );
        insight
    }

    fn reflow(&self, readiness: Readiness, events: &[ScheduleEvent]) -> Option<CoachInsight> {
        if !readiness.is_low() {
            return None;
        }
        let ids: Vec<String> = events
            .iter()
            .filter(|e| e.is_pending_high_load())
            .map(|e| e.id.clone())
            .collect();
        if ids.is_empty() {
            return None;
        }

        Some(CoachInsight {
            id: "coach-reflow".to_string(),
            kind: InsightKind::Reflow,
            title: "今日基调：修复".to_string(),
            message: format!(
                "检测到您的恢复值偏低 ({readiness}%)。今日不宜进行高强度冲刺，建议推迟 {} 个“深度工作”任务。",
                ids.len()
            ),
            action_label: "一键推迟".to_string(),
            affected_event_ids: ids.clone(),
            action: CoachAction::DeferHighLoad { event_ids: ids },
        })
    }

    fn gap_warning(&self, events: &[ScheduleEvent], curve: &BioCurve) -> Option<CoachInsight> {
        let event = events.iter().find(|e| {
            !e.completed
                && e.intensity.value() >= 3
                && curve.level_at_or_default(e.start_hour()) < GAP_ENERGY_THRESHOLD
        })?;

        Some(CoachInsight {
            id: "coach-gap".to_string(),
            kind: InsightKind::GapWarning,
            title: "能量缺口预警".to_string(),
            message: format!(
                "您安排在 {} 的 \"{}\" 恰逢今日能量低谷。建议在开始前进行 30 分钟冥想以提升状态。",
                format_clock(event.start_time),
                event.title
            ),
            action_label: "插入冥想".to_string(),
            affected_event_ids: vec![event.id.clone()],
            action: CoachAction::InsertRecovery {
                before_event_id: event.id.clone(),
                offset_hours: RECOVERY_SLOT_HOURS,
            },
        })
    }
}

//! Manually reported energy samples.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::color::{ColorScale, EnergyTier};
use crate::schedule::mint_id;

/// One submitted sample. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyLog {
    pub id: String,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp: i64,
    pub level: u8,
    pub tier: EnergyTier,
    pub label: String,
}

impl EnergyLog {
    pub fn logged_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Append-only collection of samples, in submission order.
#[derive(Debug, Clone, Default)]
pub struct EnergyLogBook {
    entries: Vec<EnergyLog>,
    scale: ColorScale,
}

impl EnergyLogBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. `level` is clamped to 0..=100 and labelled with the
    /// color scale's tier at submission time.
    pub fn submit(&mut self, level: u8, timestamp_ms: i64) -> &EnergyLog {
        let level = level.min(100);
        let tier = self.scale.classify(f64::from(level));
        self.entries.push(EnergyLog {
            id: mint_id(),
            timestamp: timestamp_ms,
            level,
            tier,
            label: tier.label().to_string(),
        });
        tracing::debug!(level, tier = tier.as_str(), "energy sample logged");
        &self.entries[self.entries.len() - 1]
    }

    /// Oldest first.
    pub fn entries(&self) -> &[EnergyLog] {
        &self.entries
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = &EnergyLog> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean level across all samples.
    pub fn average_level(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u32 = self.entries.iter().map(|e| u32::from(e.level)).sum();
        Some(f64::from(total) / self.entries.len() as f64)
    }
}

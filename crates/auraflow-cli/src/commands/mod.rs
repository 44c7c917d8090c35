//! Subcommand implementations.

pub mod coach;
pub mod color;
pub mod config;
pub mod curve;
pub mod delta;
pub mod log;
pub mod timeline;
pub mod wrapup;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;

use auraflow_core::{Config, EventStore, Planner, Readiness};

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Inputs shared by the commands that look at a whole day.
#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    /// Schedule file: a JSON array of events (defaults to the demo day)
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,
    /// Overnight readiness 0-100 (defaults to planner.default_readiness)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub readiness: Option<u8>,
}

impl DayArgs {
    /// Build a planner from config, the schedule file and the readiness
    /// override.
    pub fn planner(&self) -> Result<Planner, Box<dyn Error>> {
        let config = Config::load_existing()?.unwrap_or_default();
        let store = self.events.as_deref().map(load_store).transpose()?;
        let mut planner = Planner::from_config(&config, store);
        if let Some(value) = self.readiness {
            planner.set_readiness(Readiness::new(value));
        }
        Ok(planner)
    }
}

pub fn load_store(path: &Path) -> Result<EventStore, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let store = EventStore::from_json(&json)?;
    tracing::debug!(path = %path.display(), events = store.len(), "loaded schedule file");
    Ok(store)
}

//! Manual energy sample.

use chrono::{Local, Utc};
use clap::Args;

use auraflow_core::{ColorScale, EnergyLogBook};

use super::CmdResult;

#[derive(Args)]
pub struct LogArgs {
    /// Perceived energy 0-100
    level: u8,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: LogArgs) -> CmdResult {
    let mut book = EnergyLogBook::new();
    let entry = book.submit(args.level, Utc::now().timestamp_millis());

    if args.json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    let when = entry
        .logged_at()
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default();
    let color = ColorScale::new().interpolate(f64::from(entry.level));
    println!("Logged {}% at {when}: {} {}", entry.level, entry.label, color.to_hex());
    Ok(())
}

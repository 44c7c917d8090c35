//! Timeline layout and per-event metrics.

use clap::Args;

use auraflow_core::schedule::format_clock;

use super::{CmdResult, DayArgs};

#[derive(Args)]
pub struct TimelineArgs {
    #[command(flatten)]
    day: DayArgs,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TimelineArgs) -> CmdResult {
    let planner = args.day.planner()?;
    let snapshot = planner.snapshot();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let battery = snapshot.battery;
    println!(
        "Readiness {}  Battery {}/{} ({:?})",
        snapshot.readiness, battery.projected, battery.capacity, battery.status
    );
    if snapshot.events.is_empty() {
        println!("  (no events)");
        return Ok(());
    }

    let mut rows: Vec<_> = snapshot.events.iter().zip(&snapshot.metrics).collect();
    rows.sort_by(|(a, _), (b, _)| a.start_time.total_cmp(&b.start_time));

    for (event, metrics) in rows {
        let column = snapshot
            .layouts
            .get(&event.id)
            .map(|l| format!("{}/{}", l.column + 1, l.columns))
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:>8} - {:<8}  [{}] {}{}",
            format_clock(event.start_time),
            format_clock(event.end_time()),
            if event.completed { "x" } else { " " },
            event.title,
            if metrics.mismatch { "  !mismatch" } else { "" },
        );
        println!(
            "            col {column}  {}  delta {:+}  energy {}% {}  match {}%",
            metrics.intensity_label,
            metrics.energy_delta,
            metrics.energy_at_start,
            metrics.energy_tier,
            metrics.match_score,
        );
    }
    Ok(())
}

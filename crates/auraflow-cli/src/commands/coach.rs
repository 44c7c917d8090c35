//! Coaching insight.

use clap::Args;
use serde::Serialize;

use auraflow_core::schedule::format_clock;
use auraflow_core::{ActionOutcome, CoachInsight, EventStore, Planner};

use super::{CmdResult, DayArgs};

#[derive(Args)]
pub struct CoachArgs {
    #[command(flatten)]
    day: DayArgs,
    /// Run the insight's action and print the resulting schedule
    #[arg(long)]
    apply: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// `--apply --json` output.
#[derive(Serialize)]
struct ApplyReport<'a> {
    insight: Option<CoachInsight>,
    outcome: Option<ActionOutcome>,
    events: &'a EventStore,
}

pub fn run(args: CoachArgs) -> CmdResult {
    let mut planner = args.day.planner()?;
    let insight = planner.insight();

    if !args.apply {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&insight)?);
        } else if let Some(insight) = insight {
            println!("{}", insight.title);
            println!("  {}", insight.message);
            println!("  Action: {} (run with --apply)", insight.action_label);
        } else {
            println!("No insight: the plan fits today's energy.");
        }
        return Ok(());
    }

    let outcome = planner.apply_insight()?;
    if args.json {
        let report = ApplyReport {
            insight,
            outcome,
            events: planner.store(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        None => println!("Nothing to apply."),
        Some(ActionOutcome::Deferred { removed }) => {
            println!("Deferred {} event(s): {}", removed.len(), removed.join(", "));
        }
        Some(ActionOutcome::Inserted { event }) => {
            println!("Inserted {} at {}", event.title, format_clock(event.start_time));
        }
    }
    print_schedule(&planner);
    Ok(())
}

fn print_schedule(planner: &Planner) {
    println!("\nSchedule:");
    let mut events: Vec<_> = planner.store().events().iter().collect();
    events.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    for event in events {
        println!(
            "  {:>8}  {}  ({}h, intensity {})",
            format_clock(event.start_time),
            event.title,
            event.duration,
            event.intensity.value()
        );
    }
}

//! Daily wrap-up.

use clap::Args;

use super::{CmdResult, DayArgs};

#[derive(Args)]
pub struct WrapupArgs {
    #[command(flatten)]
    day: DayArgs,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: WrapupArgs) -> CmdResult {
    let summary = args.day.planner()?.wrap_up();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", summary.day_type.title());
    println!("  {}", summary.day_type.description());
    println!(
        "  Completed: {}/{}",
        summary.completed_count, summary.total_count
    );
    println!("  Focus hours: {:.1}", summary.focus_hours);
    println!("  Load: {:.1}", summary.total_load);
    println!("  Energy: {:+}", summary.energy_delta);
    Ok(())
}

//! Energy curve command.

use clap::Args;

use auraflow_core::{BioCurveGenerator, Config, Readiness};

use super::CmdResult;

#[derive(Args)]
pub struct CurveArgs {
    /// Overnight readiness 0-100 (defaults to planner.default_readiness)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    readiness: Option<u8>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CurveArgs) -> CmdResult {
    let readiness = match args.readiness {
        Some(value) => Readiness::new(value),
        None => Config::load_existing()?.unwrap_or_default().readiness(),
    };
    let curve = BioCurveGenerator::new().generate(readiness);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    println!("Readiness: {readiness}{}", if readiness.is_low() { " (low)" } else { "" });
    print!("{}", curve.render_ascii_chart());
    if let (Some(peak), Some(trough)) = (curve.peak(), curve.trough()) {
        println!("  Peak:   {:02}:00 ({}%)", peak.hour, peak.energy_level);
        println!("  Trough: {:02}:00 ({}%)", trough.hour, trough.energy_level);
    }
    Ok(())
}

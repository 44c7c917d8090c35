//! Color scale lookup.

use clap::Args;
use serde::Serialize;

use auraflow_core::{ColorScale, EnergyTier, Rgb};

use super::CmdResult;

#[derive(Args)]
pub struct ColorArgs {
    /// Energy value; clamped to 0-100
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ColorReport {
    value: f64,
    rgb: Rgb,
    hex: String,
    tier: EnergyTier,
    label: &'static str,
}

pub fn run(args: ColorArgs) -> CmdResult {
    let scale = ColorScale::new();
    let rgb = scale.interpolate(args.value);
    let tier = scale.classify(args.value);

    if args.json {
        let report = ColorReport {
            value: args.value,
            rgb,
            hex: rgb.to_hex(),
            tier,
            label: tier.label(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{rgb}");
        println!("{}", rgb.to_hex());
        println!("{} ({})", tier.label(), tier.as_str());
    }
    Ok(())
}

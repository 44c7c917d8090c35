//! Energy delta for a single activity.

use clap::Args;

use auraflow_core::{EnergyDeltaModel, Intensity, ValidationError};

use super::CmdResult;

#[derive(Args)]
pub struct DeltaArgs {
    /// Duration in hours
    duration: f64,
    /// Intensity 1 (recovery) to 5 (deep focus)
    intensity: u8,
}

pub fn run(args: DeltaArgs) -> CmdResult {
    if args.duration.is_nan() || args.duration <= 0.0 {
        return Err(ValidationError::InvalidDuration(args.duration).into());
    }
    let intensity = Intensity::new(args.intensity)?;
    let model = EnergyDeltaModel::new();

    println!("{:+}", model.delta(args.duration, intensity));
    println!(
        "  {} ({:+}/h)",
        intensity.label(),
        model.rate_per_hour(intensity)
    );
    Ok(())
}

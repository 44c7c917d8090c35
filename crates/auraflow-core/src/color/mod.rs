//! Energy color scale.
//!
//! Maps a 0-100 energy scalar onto a five-stop RGB gradient and a
//! qualitative tier label.

mod scale;

pub use scale::{ColorScale, ColorStop, EnergyTier, Rgb, COLOR_STOPS};

//! Rounding shared by every integer-producing formula.

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// Unlike `f64::round`, negative halves go up: `-7.5` becomes `-7`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-7.5), -7.0);
        assert_eq!(round_half_up(-7.6), -8.0);
        assert_eq!(round_half_up(41.6), 42.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}

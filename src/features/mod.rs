// src/features/mod.rs
//! Numeric features derived from finished records.
//!
//! Everything here is a pure function of its input. Malformed values come back
//! as `None` (or the documented neutral value), never as an error.
pub mod events;
pub mod fighters;
pub mod odds;
pub mod results;
pub mod stats;

use crate::config::consts::MAX_FEATURE_DECIMALS;

/// Round half away from zero to `places` decimals (at most
/// [`MAX_FEATURE_DECIMALS`]).
pub fn round_to(x: f64, places: u32) -> f64 {
    let f = 10f64.powi(places.min(MAX_FEATURE_DECIMALS) as i32);
    (x * f).round() / f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.023_809_5, 4), 0.0238);
        assert_eq!(round_to(180.339_999, 2), 180.34);
        assert_eq!(round_to(-1.5, 0), -2.0);
        assert_eq!(round_to(round_to(0.123_456, 4), 4), 0.1235);
    }

    #[test]
    fn absurd_places_are_capped() {
        assert_eq!(round_to(0.5, 400), 0.5);
        assert_eq!(round_to(2.25, u32::MAX), 2.25);
        assert!(round_to(1.0 / 3.0, 309).is_finite());
    }
}

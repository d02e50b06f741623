//! Correlated color temperature to RGB.
//!
//! Piecewise empirical fit of the black-body curve (Tanner Helland's
//! coefficients). Warm temperatures saturate red, cool ones saturate blue,
//! and the fit switches branches at 6600 K.
//!
//! # Example
//!
//! ```
//! use cct_math::{kelvin_to_hex, kelvin_to_rgb, Rgb};
//!
//! assert_eq!(kelvin_to_hex(6600.0), 0xFFFFFF);
//! assert_eq!(kelvin_to_rgb(1500.0), Rgb::new(255, 108, 0));
//! ```

use crate::{Interval, Rgb};

/// Temperatures outside this range are clamped before conversion.
pub const KELVIN_DOMAIN: Interval = Interval::new(1000.0, 40000.0);

/// Per-channel range before rounding.
pub const CHANNEL_RANGE: Interval = Interval::new(0.0, 255.0);

/// Rescaled temperature (K / 100) where the fit changes branches.
const SEAM: f64 = 66.0;

/// Rescaled span where blue follows the log curve instead of saturating.
const BLUE_RAMP: Interval = Interval::new(19.0, SEAM);

/// Convert a Kelvin temperature to a packed `0xRRGGBB` color.
///
/// Total over all `f64` inputs, including NaN and infinities.
pub fn kelvin_to_hex(kelvin: f64) -> u32 {
    kelvin_to_rgb(kelvin).pack()
}

/// Convert a Kelvin temperature to an [`Rgb`] color.
///
/// The input is clamped to [`KELVIN_DOMAIN`] first (`NaN` and `-inf` go to
/// 1000 K, `+inf` to 40000 K). Channels are rounded half away from zero.
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    let t = KELVIN_DOMAIN.clamp(kelvin) / 100.0;

    Rgb::new(
        to_channel(red_channel(t)),
        to_channel(green_channel(t)),
        to_channel(blue_channel(t)),
    )
}

// `t` is in [10, 400] here, so every ln/powf argument below is positive.

pub(crate) fn red_channel(t: f64) -> f64 {
    if t <= SEAM {
        return 255.0;
    }
    CHANNEL_RANGE.clamp(329.698727446 * (t - 60.0).powf(-0.1332047592))
}

pub(crate) fn green_channel(t: f64) -> f64 {
    let green = if t <= SEAM {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };
    CHANNEL_RANGE.clamp(green)
}

pub(crate) fn blue_channel(t: f64) -> f64 {
    if t >= SEAM {
        255.0
    } else if !BLUE_RAMP.surrounds(t) {
        0.0
    } else {
        CHANNEL_RANGE.clamp(138.5177312231 * (t - 10.0).ln() - 305.0447927307)
    }
}

#[inline]
fn to_channel(value: f64) -> u8 {
    CHANNEL_RANGE.clamp(value.round()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> impl Iterator<Item = f64> {
        (10..=400).map(|step| step as f64 * 100.0)
    }

    #[test]
    fn test_reference_points() {
        assert_eq!(kelvin_to_hex(1000.0), 0xFF4400);
        assert_eq!(kelvin_to_hex(1500.0), 0xFF6C00);
        assert_eq!(kelvin_to_hex(2000.0), 0xFF890E);
        assert_eq!(kelvin_to_hex(2700.0), 0xFFA757);
        assert_eq!(kelvin_to_hex(6500.0), 0xFFFEFA);
        assert_eq!(kelvin_to_hex(6600.0), 0xFFFFFF);
        assert_eq!(kelvin_to_hex(10000.0), 0xCADAFF);
        assert_eq!(kelvin_to_hex(12000.0), 0xBFD3FF);
        assert_eq!(kelvin_to_hex(40000.0), 0x98BAFF);
    }

    #[test]
    fn test_warm_and_cool_character() {
        let warm = kelvin_to_rgb(1500.0);
        assert_eq!(warm.r, 255);
        assert!(warm.g < 128, "green should be reduced, got {}", warm.g);
        assert_eq!(warm.b, 0);

        let neutral = kelvin_to_rgb(6600.0);
        assert_eq!(neutral.r, 255);
        assert_eq!(neutral.b, 255);

        let cool = kelvin_to_rgb(12000.0);
        assert_eq!(cool.b, 255);
        assert!(cool.r < 200, "red should be reduced, got {}", cool.r);
        assert!(cool.r < cool.g);
    }

    #[test]
    fn test_hex_matches_rgb() {
        for k in sweep() {
            assert_eq!(kelvin_to_hex(k), kelvin_to_rgb(k).pack());
        }
    }

    #[test]
    fn test_deterministic() {
        for k in [-1.0, 0.0, 1234.5, 6600.0, 33333.3, f64::NAN] {
            assert_eq!(kelvin_to_hex(k), kelvin_to_hex(k));
        }
    }

    #[test]
    fn test_clamps_out_of_domain() {
        assert_eq!(kelvin_to_hex(500.0), kelvin_to_hex(1000.0));
        assert_eq!(kelvin_to_hex(0.0), kelvin_to_hex(1000.0));
        assert_eq!(kelvin_to_hex(-273.15), kelvin_to_hex(1000.0));
        assert_eq!(kelvin_to_hex(100000.0), kelvin_to_hex(40000.0));
        assert_eq!(kelvin_to_hex(f64::MAX), kelvin_to_hex(40000.0));
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(kelvin_to_hex(f64::INFINITY), kelvin_to_hex(40000.0));
        assert_eq!(kelvin_to_hex(f64::NEG_INFINITY), kelvin_to_hex(1000.0));
        assert_eq!(kelvin_to_hex(f64::NAN), kelvin_to_hex(1000.0));
    }

    #[test]
    fn test_output_always_24_bit() {
        let inputs = [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MIN,
            f64::MAX,
            f64::MIN_POSITIVE,
            -0.0,
            0.0,
            999.999,
            1900.0,
            1900.0001,
            6599.999,
            6600.0001,
            40000.0001,
        ];
        for k in inputs.into_iter().chain(sweep()) {
            assert!(kelvin_to_hex(k) <= crate::PACKED_MAX, "{k} out of range");
        }
    }

    #[test]
    fn test_blue_warms_up_then_saturates() {
        let mut previous = 0;
        for k in sweep() {
            let blue = kelvin_to_rgb(k).b;
            assert!(blue >= previous, "blue dropped at {k} K: {previous} -> {blue}");
            previous = blue;
        }
        assert_eq!(previous, 255);
        assert_eq!(kelvin_to_rgb(1900.0).b, 0);
    }

    #[test]
    fn test_red_cools_down_after_seam() {
        let mut previous = 255;
        for k in sweep() {
            let red = kelvin_to_rgb(k).r;
            assert!(red <= previous, "red rose at {k} K: {previous} -> {red}");
            previous = red;
        }
        assert_eq!(kelvin_to_rgb(6600.0).r, 255);
        assert!(kelvin_to_rgb(6700.0).r < 255);
    }

    #[test]
    fn test_green_branches_meet_at_seam() {
        // The published coefficients leave a gap of about 3.3 at t = 66.
        let below = green_channel(SEAM);
        let above = green_channel(SEAM + 1e-9);
        assert!(
            (below - above).abs() <= 4.0,
            "green seam gap too wide: {below} vs {above}"
        );
    }

    #[test]
    fn test_channel_helpers_stay_in_range() {
        for step in 100..=4000 {
            let t = step as f64 / 10.0;
            for value in [red_channel(t), green_channel(t), blue_channel(t)] {
                assert!(CHANNEL_RANGE.contains(value), "t={t} gave {value}");
            }
        }
    }
}

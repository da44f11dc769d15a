//! 1V/oct pitch helpers.
//!
//! Under the 1V/oct convention each additional volt of pitch doubles the
//! frequency. A pitch of 0 V corresponds to [`FREQ_C4`].

use crate::FREQ_C4;

/// Lower bound of the combined pitch fed to frequency conversion.
pub const PITCH_MIN: f32 = -4.0;
/// Upper bound of the combined pitch fed to frequency conversion.
pub const PITCH_MAX: f32 = 4.0;

/// Combine a pitch parameter with a pitch CV input, both in volts.
///
/// The clamp applies to the *sum*, not the addends individually, so a 3 V
/// parameter plus 3 V of CV yields 4 V rather than 6 V. This is the sole
/// protection against runaway frequency.
#[inline]
pub fn combine(param_volts: f32, cv_volts: f32) -> f32 {
    (param_volts + cv_volts).clamp(PITCH_MIN, PITCH_MAX)
}

/// Convert a pitch in volts to a frequency in Hz: `FREQ_C4 * 2^pitch`.
#[inline]
pub fn to_freq(pitch: f32) -> f32 {
    FREQ_C4 * 2.0_f32.powf(pitch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pitch_is_c4() {
        assert_eq!(to_freq(0.0), FREQ_C4);
    }

    #[test]
    fn one_volt_doubles_frequency() {
        // Octave-doubling law across the usable range.
        for i in -4..4 {
            let p = i as f32;
            let ratio = to_freq(p + 1.0) / to_freq(p);
            assert!(
                (ratio - 2.0).abs() < 1e-5,
                "freq({}) / freq({p}) = {ratio}, expected 2",
                p + 1.0
            );
        }
        assert!((to_freq(1.0) - 2.0 * FREQ_C4).abs() < 1e-3);
        assert!((to_freq(-1.0) - 0.5 * FREQ_C4).abs() < 1e-3);
    }

    #[test]
    fn combined_pitch_is_clamped() {
        assert_eq!(combine(3.0, 3.0), PITCH_MAX);
        assert_eq!(combine(-3.0, -3.0), PITCH_MIN);
        assert_eq!(combine(1.5, -0.5), 1.0);
        // The clamp property holds for any addends.
        for param in [-10.0, -3.0, 0.0, 2.9, 3.0, 10.0] {
            for cv in [-12.0, -1.0, 0.0, 0.7, 5.0] {
                let pitch = combine(param, cv);
                assert!((PITCH_MIN..=PITCH_MAX).contains(&pitch));
            }
        }
    }

    #[test]
    fn clamp_applies_to_sum_not_addends() {
        // 5 V + (-3 V) = 2 V is in range even though one addend alone is not.
        assert_eq!(combine(5.0, -3.0), 2.0);
    }
}

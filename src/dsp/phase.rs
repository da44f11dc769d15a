use std::f32::consts::TAU;

/*
Phase Accumulation
==================

Every periodic signal in the crate is driven by the same primitive: a
fractional position within one waveform cycle, range [0,1).

Each sample we add the amount of cycle covered in one timestep, then wrap:

    phase = (phase + freq * delta_time) mod 1.0

Example: a 261.6256 Hz oscillator at 48 kHz advances by
261.6256 / 48000 ≈ 0.00545 of a cycle per sample, wrapping back below 1.0
roughly every 183 samples.

The wrap uses fmod (Rust `%`), not a clamp, so the accumulator keeps its
fractional position across the boundary instead of sticking at the edge.
For the non-negative frequencies and timesteps reachable through the public
API the result always lands in [0,1). A negative `delta_time` is a caller
contract violation and is not handled here.
*/

/// A fractional position within one waveform cycle, range [0,1).
///
/// Starts at 0. Advance once per sample with the elapsed time and the
/// current frequency; read the waveform with [`Phase::sin`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Phase {
    value: f32,
}

impl Phase {
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Advance by `freq * delta_time` of a cycle and wrap into [0,1).
    ///
    /// `delta_time` is the timestep in seconds and must be non-negative.
    /// Returns the wrapped phase.
    #[inline]
    pub fn advance(&mut self, freq: f32, delta_time: f32) -> f32 {
        self.value = (self.value + freq * delta_time) % 1.0;
        self.value
    }

    /// Current phase in [0,1).
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sine of the current phase: `sin(2π * phase)`, range [-1,1].
    #[inline]
    pub fn sin(&self) -> f32 {
        (TAU * self.value).sin()
    }

    /// Return to the initial phase of 0.
    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let phase = Phase::new();
        assert_eq!(phase.value(), 0.0);
        assert_eq!(phase.sin(), 0.0);
    }

    #[test]
    fn stays_in_unit_interval() {
        // Wrap invariant: arbitrary non-negative steps never escape [0,1).
        let mut phase = Phase::new();
        let steps = [1.0 / 48_000.0, 0.25, 0.9999, 3.7, 0.0, 100.0];
        for i in 0..100_000 {
            let dt = steps[i % steps.len()];
            let p = phase.advance(440.0, dt);
            assert!((0.0..1.0).contains(&p), "phase {p} escaped [0,1) at step {i}");
        }
    }

    #[test]
    fn one_exact_cycle_wraps_to_zero() {
        // delta_time = 1/freq covers exactly one cycle, so the phase wraps
        // back to ~0 and the sine output is ~0.
        let freq = crate::FREQ_C4;
        let mut phase = Phase::new();
        let p = phase.advance(freq, 1.0 / freq);
        assert!(
            p < 1e-6 || p > 1.0 - 1e-6,
            "expected wrap to ~0 (mod 1), got {p}"
        );
        assert!(phase.sin().abs() < 1e-5);
    }

    #[test]
    fn fractional_advance_accumulates() {
        let mut phase = Phase::new();
        // 1 Hz timer stepped by 0.6 s lands at 0.6 of a cycle.
        let p = phase.advance(1.0, 0.6);
        assert!((p - 0.6).abs() < 1e-6);
        // Another 0.6 s wraps: 1.2 mod 1 = 0.2.
        let p = phase.advance(1.0, 0.6);
        assert!((p - 0.2).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_time_stalls() {
        // A stalled timestep is a normal outcome, not an error.
        let mut phase = Phase::new();
        phase.advance(440.0, 0.25 / 440.0);
        let before = phase.value();
        phase.advance(440.0, 0.0);
        assert_eq!(phase.value(), before);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut phase = Phase::new();
        phase.advance(440.0, 0.3 / 440.0);
        assert!(phase.value() > 0.0);
        phase.reset();
        assert_eq!(phase.value(), 0.0);
    }
}

//! Input and output voltage ports.
//!
//! Ports carry up to [`PORT_MAX_CHANNELS`] channels of voltage. An input with
//! nothing patched into it reads 0 V, so modules can sum CV inputs without
//! checking connection state.

use crate::PORT_MAX_CHANNELS;

/// An input port the host writes voltages into.
#[derive(Debug, Clone, Copy)]
pub struct Input {
    voltages: [f32; PORT_MAX_CHANNELS],
}

impl Default for Input {
    fn default() -> Self {
        Self {
            voltages: [0.0; PORT_MAX_CHANNELS],
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// First-channel voltage. Unpatched inputs read 0 V.
    #[inline]
    pub fn voltage(&self) -> f32 {
        self.voltages[0]
    }

    #[inline]
    pub fn channel_voltage(&self, channel: usize) -> f32 {
        self.voltages[channel]
    }

    #[inline]
    pub fn set_voltage(&mut self, volts: f32) {
        self.voltages[0] = volts;
    }

    #[inline]
    pub fn set_channel_voltage(&mut self, channel: usize, volts: f32) {
        self.voltages[channel] = volts;
    }
}

/// An output port a module writes voltages into.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    voltages: [f32; PORT_MAX_CHANNELS],
    channels: usize,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            voltages: [0.0; PORT_MAX_CHANNELS],
            channels: 1,
        }
    }
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active channels, 1..=PORT_MAX_CHANNELS.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Set the active channel count, clamped to 1..=PORT_MAX_CHANNELS.
    pub fn set_channels(&mut self, channels: usize) {
        self.channels = channels.clamp(1, PORT_MAX_CHANNELS);
    }

    /// Broadcast one voltage across all active channels.
    #[inline]
    pub fn set_voltage(&mut self, volts: f32) {
        for v in &mut self.voltages[..self.channels] {
            *v = volts;
        }
    }

    #[inline]
    pub fn set_channel_voltage(&mut self, channel: usize, volts: f32) {
        self.voltages[channel] = volts;
    }

    /// First-channel voltage.
    #[inline]
    pub fn voltage(&self) -> f32 {
        self.voltages[0]
    }

    #[inline]
    pub fn channel_voltage(&self, channel: usize) -> f32 {
        self.voltages[channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpatched_input_reads_zero() {
        let input = Input::new();
        assert_eq!(input.voltage(), 0.0);
        for ch in 0..PORT_MAX_CHANNELS {
            assert_eq!(input.channel_voltage(ch), 0.0);
        }
    }

    #[test]
    fn output_broadcasts_across_active_channels() {
        let mut out = Output::new();
        out.set_channels(PORT_MAX_CHANNELS);
        out.set_voltage(2.5);
        for ch in 0..PORT_MAX_CHANNELS {
            assert_eq!(out.channel_voltage(ch), 2.5);
        }
    }

    #[test]
    fn broadcast_leaves_inactive_channels_alone() {
        let mut out = Output::new();
        out.set_channels(4);
        out.set_voltage(1.0);
        assert_eq!(out.channel_voltage(3), 1.0);
        assert_eq!(out.channel_voltage(4), 0.0);
    }

    #[test]
    fn channel_count_is_clamped() {
        let mut out = Output::new();
        out.set_channels(0);
        assert_eq!(out.channels(), 1);
        out.set_channels(100);
        assert_eq!(out.channels(), PORT_MAX_CHANNELS);
    }
}

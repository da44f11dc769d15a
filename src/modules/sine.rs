use crate::{
    dsp::{pitch, Phase},
    module::{Input, Light, Module, ModuleInfo, Output, Param, ParamConfig, ProcessArgs},
    FREQ_C4, PORT_MAX_CHANNELS,
};

/*
Sine Oscillator Module
======================

The simplest useful module: one knob, one CV input, one output, one light.

Per sample:

  pitch = clamp(pitch_param + pitch_cv, -4 V, +4 V)   combined-value clamp
  freq  = FREQ_C4 * 2^pitch                           1V/oct, C4 at 0 V
  phase = (phase + freq * dt) mod 1
  out   = 5 V * sin(2π * phase)                       ±5 V, all 16 channels

Independently, a second accumulator runs at a fixed 1 Hz and drives the
status light as a square wave: on for the first half of each second, off for
the second half. The light is purely an activity indicator; it never touches
the audio path.

The knob itself is limited to ±3 V by its definition; the extra volt of
headroom in the ±4 V clamp is reachable only through the CV input.
*/

/// Registration slug for [`SineOsc`].
pub const SLUG: &str = "sine-osc";

/// Output amplitude in volts.
const AMPLITUDE: f32 = 5.0;

/// Parameter slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineParam {
    /// Pitch in volts, 1V/oct, knob range ±3 V.
    Pitch,
}

/// Input port slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineInput {
    /// Pitch CV in volts, summed with the pitch parameter.
    Pitch,
}

/// Output port slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineOutput {
    /// ±5 V sine, broadcast across all 16 channels.
    Sine,
}

/// Light slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineLight {
    /// 1 Hz activity blink, 50% duty cycle.
    Blink,
}

/// A sine oscillator with 1V/oct pitch control and a 1 Hz activity light.
pub struct SineOsc {
    phase: Phase,
    blink: Phase,
    params: [Param; 1],
    inputs: [Input; 1],
    outputs: [Output; 1],
    lights: [Light; 1],
}

impl SineOsc {
    pub fn new() -> Self {
        let mut outputs = [Output::new()];
        outputs[SineOutput::Sine as usize].set_channels(PORT_MAX_CHANNELS);

        Self {
            phase: Phase::new(),
            blink: Phase::new(),
            params: [Param::new(ParamConfig::exponential(
                -3.0, 3.0, 0.0, "Pitch", " Hz", 2.0, FREQ_C4,
            ))],
            inputs: [Input::new()],
            outputs,
            lights: [Light::new()],
        }
    }

    /// Current waveform phase in [0,1).
    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    /// Current blink-timer phase in [0,1).
    pub fn blink_phase(&self) -> f32 {
        self.blink.value()
    }
}

impl Default for SineOsc {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for SineOsc {
    fn info(&self) -> ModuleInfo {
        ModuleInfo {
            slug: SLUG,
            description: "Sine oscillator with 1V/oct pitch control",
        }
    }

    fn process(&mut self, args: &ProcessArgs) {
        let pitch = pitch::combine(
            self.params[SineParam::Pitch as usize].value(),
            self.inputs[SineInput::Pitch as usize].voltage(),
        );
        let freq = pitch::to_freq(pitch);

        self.phase.advance(freq, args.sample_time);
        let sine = self.phase.sin();
        self.outputs[SineOutput::Sine as usize].set_voltage(AMPLITUDE * sine);

        // Blink light at 1 Hz
        let blink = self.blink.advance(1.0, args.sample_time);
        let brightness = if blink < 0.5 { 1.0 } else { 0.0 };
        self.lights[SineLight::Blink as usize].set_brightness(brightness);
    }

    fn params(&self) -> &[Param] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [Param] {
        &mut self.params
    }

    fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut [Input] {
        &mut self.inputs
    }

    fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    fn lights(&self) -> &[Light] {
        &self.lights
    }

    fn reset(&mut self) {
        self.phase.reset();
        self.blink.reset();
    }
}

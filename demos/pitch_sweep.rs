//! Sweep the pitch CV input and report the clamped frequency range.
//!
//! Demonstrates that the clamp applies to the combined pitch: past ±4 V the
//! oscillator frequency stops moving no matter how much CV comes in.
//!
//! Run with: cargo run --example pitch_sweep

use rackmod_dsp::{
    dsp::pitch,
    engine::Engine,
    modules::sine::{SineInput, SineParam},
    modules::SineOsc,
    Module,
};

fn main() {
    let sample_rate = 48_000.0;
    let mut engine = Engine::new(sample_rate, SineOsc::new());
    engine.set_param(SineParam::Pitch as usize, 0.0);

    println!("CV sweep at 0 V pitch knob (1V/oct, C4 at 0 V):");
    println!("{:>8} {:>12} {:>12}", "CV (V)", "pitch (V)", "freq (Hz)");

    let mut cv = -6.0;
    while cv <= 6.0 {
        engine.set_input(SineInput::Pitch as usize, cv);

        // Render a short block so the module sees the new CV.
        let mut out = [0.0f32; 64];
        engine.render_block(&mut out);

        let knob = engine.module().params()[SineParam::Pitch as usize].value();
        let combined = pitch::combine(knob, cv);
        println!("{cv:>8.1} {combined:>12.1} {:>12.2}", pitch::to_freq(combined));

        cv += 1.0;
    }
}

//! Render the sine module offline and print signal statistics.
//!
//! Run with: cargo run --example offline_bounce

use rackmod_dsp::{engine::Engine, modules::sine::SineParam, modules::SineOsc, Module};

fn main() {
    let sample_rate = 48_000.0;
    let seconds = 2.0;

    let mut engine = Engine::new(sample_rate, SineOsc::new());
    engine.set_param(SineParam::Pitch as usize, 0.0);

    let mut out = vec![0.0f32; (sample_rate * seconds) as usize];
    engine.render_block(&mut out);

    let peak = out.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
    let rms = (out.iter().map(|&s| s * s).sum::<f32>() / out.len() as f32).sqrt();
    let param = &engine.module().params()[SineParam::Pitch as usize];

    println!("Rendered {} samples at {} Hz", out.len(), sample_rate);
    println!(
        "Pitch: {} V ({:.4}{})",
        param.value(),
        param.display_value(),
        param.config().unit
    );
    println!("Peak:  {peak:.3} V");
    println!("RMS:   {rms:.3} V");
    println!(
        "Light: {}",
        if engine.module().lights()[0].is_lit() {
            "on"
        } else {
            "off"
        }
    );
}

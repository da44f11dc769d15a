use rackmod_dsp::{
    engine::Engine,
    modules::{self, sine::SineParam, SineOsc},
    Module, FREQ_C4,
};

/// Count rising zero crossings in a rendered buffer.
fn rising_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|w| w[0] <= 0.0 && w[1] > 0.0)
        .count()
}

#[test]
fn rendered_fundamental_matches_pitch() {
    let sample_rate = 48_000.0;
    let mut engine = Engine::new(sample_rate, SineOsc::new());

    // One second of C4: expect ~261-262 rising crossings.
    let mut out = vec![0.0f32; sample_rate as usize];
    engine.render_block(&mut out);
    let crossings = rising_crossings(&out);
    let expected = FREQ_C4.round() as usize;
    assert!(
        crossings.abs_diff(expected) <= 1,
        "expected ~{expected} cycles, counted {crossings}"
    );
}

#[test]
fn pitch_param_shifts_fundamental_by_octaves() {
    let sample_rate = 48_000.0;
    let mut engine = Engine::new(sample_rate, SineOsc::new());
    engine.set_param(SineParam::Pitch as usize, 1.0);

    let mut out = vec![0.0f32; sample_rate as usize];
    engine.render_block(&mut out);
    let crossings = rising_crossings(&out);
    let expected = (2.0 * FREQ_C4).round() as usize;
    assert!(
        crossings.abs_diff(expected) <= 1,
        "expected ~{expected} cycles at +1 V, counted {crossings}"
    );
}

#[test]
fn output_voltage_stays_within_five_volts() {
    let mut engine = Engine::new(44_100.0, SineOsc::new());
    // Worst case: CV pinned past the clamp.
    engine.set_input(0, 10.0);
    let mut out = vec![0.0f32; 44_100];
    engine.render_block(&mut out);
    assert!(out.iter().all(|s| s.abs() <= 5.0));
    // And the signal actually swings close to the rails.
    let peak = out.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
    assert!(peak > 4.9, "peak {peak} unexpectedly low");
}

#[test]
fn blink_light_toggles_once_per_second() {
    let sample_rate = 1_000.0;
    let mut engine = Engine::new(sample_rate, SineOsc::new());

    let mut transitions = 0u32;
    let mut last = None;
    for _ in 0..3_000 {
        engine.step();
        let lit = engine.module().lights()[0].is_lit();
        if let Some(prev) = last {
            if prev != lit {
                transitions += 1;
            }
        }
        last = Some(lit);
    }
    // Three seconds of a 1 Hz half-duty square: on/off edges every 0.5 s.
    assert!(
        (5..=7).contains(&transitions),
        "expected ~6 light transitions over 3 s, saw {transitions}"
    );
}

#[test]
fn factory_roundtrip_renders() {
    let mut module = modules::create("sine-osc").expect("registered slug");
    let args = rackmod_dsp::ProcessArgs::new(48_000.0);
    for _ in 0..64 {
        module.process(&args);
    }
    assert!(module.outputs()[0].voltage().abs() <= 5.0);
}

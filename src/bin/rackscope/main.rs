//! rackscope - terminal scope for the sine oscillator module
//!
//! Runs the module inside a cpal audio callback and visualizes the output:
//! waveform, spectrum, and the module's blink light. Keys poke the pitch
//! parameter and CV input through the engine's lock-free control queue.
//!
//! Run with: cargo run --bin rackscope

mod ui;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use rtrb::{Producer, PushError, RingBuffer};
use std::time::Duration;

use rackmod_dsp::{
    engine::{Engine, EngineMessage},
    modules::sine::{SineInput, SineParam},
    modules::SineOsc,
    Module, MAX_BLOCK_SIZE,
};

use ui::{render_ui, ScopeState, SpectrumView};

// Tunables
const VIS_BLOCK_LEN: usize = 1024; // Analyzer/window size
const AUDIO_RING_BLOCKS: usize = 16; // Capacity in blocks for audio→UI ring
const SPECTRUM_BINS: usize = 48;
/// Pitch knob step per keypress: one semitone under 1V/oct.
const SEMITONE: f32 = 1.0 / 12.0;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();

    let res = run(terminal);

    ratatui::restore();
    res
}

fn run(mut terminal: DefaultTerminal) -> EyreResult<()> {
    // --- Set up CPAL ---
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    // --- Cross-thread rings ---
    let (msg_tx, msg_rx) = RingBuffer::<EngineMessage>::new(64);
    let (audio_tx, mut audio_rx) = RingBuffer::<f32>::new(VIS_BLOCK_LEN * AUDIO_RING_BLOCKS);
    let (light_tx, mut light_rx) = RingBuffer::<f32>::new(AUDIO_RING_BLOCKS);

    // Buffer reused by the audio callback
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            {
                let mut engine = Engine::new(sample_rate, SineOsc::new()).with_receiver(msg_rx);
                let mut audio_tx = audio_tx;
                let mut light_tx = light_tx;
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;
                    while frames_written < total_frames {
                        let frames_remaining = total_frames - frames_written;
                        let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                        let block = &mut render_buf[..frames_to_render];
                        engine.render_block(block);

                        // The module outputs ±5 V; the device wants ±1.
                        let out_off = frames_written * channels;
                        for (i, &volts) in block.iter().enumerate() {
                            let s = volts / 5.0;
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        // Push voltages to the UI ring, non-blocking (drop on
                        // overflow).
                        for &volts in block.iter() {
                            if let Err(PushError::Full(_)) = audio_tx.push(volts) {
                                break;
                            }
                        }
                        let _ = light_tx.push(engine.module().lights()[0].brightness());

                        frames_written += frames_to_render;
                    }
                }
            },
            move |err| eprintln!("Stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    // --- UI state ---
    let mut state = ScopeState::new(sample_rate);
    let mut spectrum = SpectrumView::new(VIS_BLOCK_LEN, sample_rate, SPECTRUM_BINS);
    let mut vis_buffer = vec![0.0f32; VIS_BLOCK_LEN];
    let mut msg_tx = msg_tx;

    // --- UI loop ---
    loop {
        // Drain up to one analysis block of samples
        let mut filled = 0usize;
        while filled < VIS_BLOCK_LEN {
            match audio_rx.pop() {
                Ok(s) => {
                    vis_buffer[filled] = s;
                    filled += 1;
                }
                Err(_) => break,
            }
        }
        if filled == VIS_BLOCK_LEN {
            spectrum.update(&vis_buffer);
        }

        // Keep only the most recent light snapshot
        while let Ok(brightness) = light_rx.pop() {
            state.light_brightness = brightness;
        }

        terminal.draw(|frame| render_ui(frame, &state, &vis_buffer, spectrum.data()))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(key.code, &mut state, &mut msg_tx)
                {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a keypress to the UI state and forward it to the engine.
///
/// Returns true when the app should quit.
fn handle_key(code: KeyCode, state: &mut ScopeState, tx: &mut Producer<EngineMessage>) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Right => {
            state.pitch_volts = (state.pitch_volts + SEMITONE).clamp(-3.0, 3.0);
            send(
                tx,
                EngineMessage::SetParam {
                    param: SineParam::Pitch as usize,
                    value: state.pitch_volts,
                },
            );
        }
        KeyCode::Left => {
            state.pitch_volts = (state.pitch_volts - SEMITONE).clamp(-3.0, 3.0);
            send(
                tx,
                EngineMessage::SetParam {
                    param: SineParam::Pitch as usize,
                    value: state.pitch_volts,
                },
            );
        }
        KeyCode::Up => {
            state.cv_volts += 1.0;
            send(
                tx,
                EngineMessage::SetInput {
                    input: SineInput::Pitch as usize,
                    volts: state.cv_volts,
                },
            );
        }
        KeyCode::Down => {
            state.cv_volts -= 1.0;
            send(
                tx,
                EngineMessage::SetInput {
                    input: SineInput::Pitch as usize,
                    volts: state.cv_volts,
                },
            );
        }
        KeyCode::Char('r') => {
            state.pitch_volts = 0.0;
            state.cv_volts = 0.0;
            send(
                tx,
                EngineMessage::SetParam {
                    param: SineParam::Pitch as usize,
                    value: 0.0,
                },
            );
            send(
                tx,
                EngineMessage::SetInput {
                    input: SineInput::Pitch as usize,
                    volts: 0.0,
                },
            );
            send(tx, EngineMessage::Reset);
        }
        _ => {}
    }
    false
}

fn send(tx: &mut Producer<EngineMessage>, msg: EngineMessage) {
    // Dropped messages are acceptable; the queue only fills if the audio
    // thread has stalled.
    let _ = tx.push(msg);
}

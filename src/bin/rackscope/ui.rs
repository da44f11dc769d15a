//! TUI rendering for rackscope.
//!
//! Left pane: waveform in volts. Right panes: spectrum, module panel with the
//! blink light and pitch readout, and key help.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

use rackmod_dsp::{dsp::pitch, FREQ_C4};

/// UI-side mirror of the control values sent to the engine.
pub struct ScopeState {
    pub sample_rate: f32,
    /// Pitch knob position in volts (±3 V).
    pub pitch_volts: f32,
    /// Pitch CV in volts (unbounded; the module clamps the sum).
    pub cv_volts: f32,
    /// Latest blink-light brightness received from the audio thread.
    pub light_brightness: f32,
}

impl ScopeState {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            pitch_volts: 0.0,
            cv_volts: 0.0,
            light_brightness: 0.0,
        }
    }

    /// Frequency the module is actually producing, after the combined clamp.
    fn effective_freq(&self) -> f32 {
        pitch::to_freq(pitch::combine(self.pitch_volts, self.cv_volts))
    }
}

pub fn render_ui(frame: &mut Frame, state: &ScopeState, buffer: &[f32], spectrum: &[(f64, f64)]) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(frame.area());
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(main_chunks[1]);

    // Downsample waveform to chart width
    let target_w = main_chunks[0].width.max(1) as usize;
    let step = buffer.len().div_ceil(target_w);
    let mut pts: Vec<(f64, f64)> = Vec::with_capacity(target_w);
    let mut i = 0usize;
    while i < buffer.len() {
        pts.push((i as f64, buffer[i] as f64));
        i = i.saturating_add(step);
    }

    let wave = Chart::new(vec![Dataset::default()
        .name("Sine out")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&pts)])
    .block(
        Block::default()
            .title("Oscilloscope - q to quit")
            .borders(Borders::ALL),
    )
    .x_axis(
        Axis::default()
            .title("Sample")
            .bounds([0.0, buffer.len() as f64]),
    )
    .y_axis(Axis::default().title("Volts").bounds([-5.0, 5.0]));

    frame.render_widget(wave, main_chunks[0]);
    frame.render_widget(spectrum_chart(spectrum), right_chunks[0]);
    frame.render_widget(panel(state), right_chunks[1]);
    frame.render_widget(help(), right_chunks[2]);
}

/// The module "panel": blink light plus pitch readout.
fn panel(state: &ScopeState) -> Paragraph<'_> {
    let light = if state.light_brightness > 0.0 {
        Line::styled("  ● BLINK", Style::default().fg(Color::Red))
    } else {
        Line::styled("  ○ blink", Style::default().fg(Color::DarkGray))
    };
    let lines = vec![
        light,
        format!("  Pitch knob: {:+.2} V", state.pitch_volts).into(),
        format!("  Pitch CV:   {:+.2} V", state.cv_volts).into(),
        format!("  Frequency:  {:.2} Hz", state.effective_freq()).into(),
        format!("  C4 ref:     {FREQ_C4} Hz").into(),
        format!("  Rate:       {:.0} Hz", state.sample_rate).into(),
    ];
    Paragraph::new(lines).block(Block::default().title("sine-osc").borders(Borders::ALL))
}

fn help() -> Paragraph<'static> {
    let lines = vec![
        Line::from("←/→  pitch knob ∓/± 1 semitone"),
        Line::from("↑/↓  pitch CV ±1 V (one octave)"),
        Line::from("r    reset knob, CV, and phase"),
        Line::from("q    quit"),
    ];
    Paragraph::new(lines).block(Block::default().title("Keys").borders(Borders::ALL))
}

fn spectrum_chart(data: &[(f64, f64)]) -> Chart<'_> {
    let dataset = Dataset::default()
        .name("Spectrum")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(data);

    let max_freq = data.iter().map(|(f, _)| *f).fold(0.0, f64::max).max(1.0);
    let max_db = data.iter().map(|(_, db)| *db).fold(-100.0, f64::max);

    Chart::new(vec![dataset])
        .block(Block::default().title("Spectrum").borders(Borders::ALL))
        .x_axis(Axis::default().title("Hz").bounds([0.0, max_freq]))
        .y_axis(
            Axis::default()
                .title("dB")
                .bounds([-100.0, max_db.max(0.0) + 10.0]),
        )
}

/// Windowed FFT magnitude view of the audio ring, log-spaced bins.
pub struct SpectrumView {
    window: Vec<f32>,
    bin_freqs: Vec<f64>,
    bin_indices: Vec<usize>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumView {
    pub fn new(buffer_len: usize, sample_rate: f32, num_bins: usize) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        // Hann window
        let denom = (buffer_len.max(2) - 1) as f32;
        let window: Vec<f32> = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        // Log-spaced display bins from 20 Hz to Nyquist
        let half = (buffer_len / 2).max(1);
        let max_freq = (sample_rate as f64 / 2.0).max(40.0);
        let min_freq = 20.0;
        let ratio = max_freq / min_freq;
        let mut bin_freqs = Vec::with_capacity(num_bins);
        let mut bin_indices = Vec::with_capacity(num_bins);
        for i in 0..num_bins {
            let t = i as f64 / (num_bins - 1).max(1) as f64;
            let freq = min_freq * ratio.powf(t);
            let index = (freq * buffer_len as f64 / sample_rate as f64) as usize;
            bin_freqs.push(freq);
            bin_indices.push(index.min(half - 1));
        }

        Self {
            window,
            bin_freqs,
            bin_indices,
            fft,
            scratch: vec![Complex::default(); buffer_len],
            spectrum: vec![(0.0, -100.0); num_bins],
        }
    }

    /// Recompute the spectrum from one analysis block of voltages.
    pub fn update(&mut self, samples: &[f32]) {
        for ((c, &s), &w) in self.scratch.iter_mut().zip(samples).zip(&self.window) {
            // Normalize ±5 V to ±1 so 0 dB means full scale.
            *c = Complex::new(s / 5.0 * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let scale = 2.0 / samples.len() as f32;
        for (out, (&freq, &index)) in self
            .spectrum
            .iter_mut()
            .zip(self.bin_freqs.iter().zip(&self.bin_indices))
        {
            let mag = self.scratch[index].norm() * scale;
            let db = 20.0 * (mag.max(1e-6)).log10();
            *out = (freq, db as f64);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

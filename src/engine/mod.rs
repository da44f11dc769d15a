//! Host-side per-sample driver.
//!
//! The engine stands in for a host audio engine: it owns one module instance,
//! supplies the sample period, forwards parameter and CV writes, and pulls
//! the module's output port into an audio buffer. The module never schedules
//! itself; the engine (or the audio callback driving it) owns the cadence.

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::module::{Module, ProcessArgs};

/// Control messages for an engine running on an audio thread.
///
/// Slots are the target module's id enums cast to `usize`.
#[derive(Debug, Copy, Clone)]
pub enum EngineMessage {
    SetParam { param: usize, value: f32 },
    SetInput { input: usize, volts: f32 },
    Reset,
}

/// Drives one module at a fixed sample rate.
pub struct Engine<M: Module> {
    module: M,
    args: ProcessArgs,
    #[cfg(feature = "rtrb")]
    rx: Option<Consumer<EngineMessage>>,
}

impl<M: Module> Engine<M> {
    pub fn new(sample_rate: f32, module: M) -> Self {
        Self {
            module,
            args: ProcessArgs::new(sample_rate),
            #[cfg(feature = "rtrb")]
            rx: None,
        }
    }

    /// Attach a lock-free control queue, drained at block boundaries.
    ///
    /// The producer side lives on a control thread; the audio callback only
    /// ever pops.
    #[cfg(feature = "rtrb")]
    pub fn with_receiver(mut self, rx: Consumer<EngineMessage>) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn sample_rate(&self) -> f32 {
        self.args.sample_rate
    }

    /// The sample period handed to the module as its timestep.
    pub fn sample_time(&self) -> f32 {
        self.args.sample_time
    }

    pub fn module(&self) -> &M {
        &self.module
    }

    pub fn module_mut(&mut self) -> &mut M {
        &mut self.module
    }

    /// Write a parameter value directly (clamped by its definition).
    pub fn set_param(&mut self, param: usize, value: f32) {
        self.module.params_mut()[param].set_value(value);
    }

    /// Write an input-port voltage directly.
    pub fn set_input(&mut self, input: usize, volts: f32) {
        self.module.inputs_mut()[input].set_voltage(volts);
    }

    /// Advance one sample and return the first output's channel-0 voltage.
    #[inline]
    pub fn step(&mut self) -> f32 {
        self.module.process(&self.args);
        self.module.outputs()[0].voltage()
    }

    /// Render one block of output voltages into `out`.
    ///
    /// Pending control messages are drained once at the start of the block,
    /// so a message takes effect no later than the next block boundary.
    pub fn render_block(&mut self, out: &mut [f32]) {
        #[cfg(feature = "rtrb")]
        self.drain_messages();

        for sample in out.iter_mut() {
            *sample = self.step();
        }
    }

    #[cfg(feature = "rtrb")]
    fn drain_messages(&mut self) {
        let Some(rx) = self.rx.as_mut() else {
            return;
        };
        while let Ok(msg) = rx.pop() {
            match msg {
                EngineMessage::SetParam { param, value } => {
                    self.module.params_mut()[param].set_value(value);
                }
                EngineMessage::SetInput { input, volts } => {
                    self.module.inputs_mut()[input].set_voltage(volts);
                }
                EngineMessage::Reset => self.module.reset(),
            }
        }
    }
}

//! Host-facing module abstraction.
//!
//! A module owns fixed slots of params, input ports, output ports, and lights,
//! and advances once per sample when the host calls [`Module::process`]. The
//! host reads and writes the slots between calls; the module only touches its
//! own private state, so the contract is single-threaded by construction:
//! called synchronously, returns immediately, never blocks or allocates.

pub mod light;
pub mod param;
pub mod port;

pub use light::Light;
pub use param::{Param, ParamConfig};
pub use port::{Input, Output};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Per-call timestep context supplied by the host engine.
#[derive(Debug, Clone, Copy)]
pub struct ProcessArgs {
    /// Samples per second (e.g. 48000.0).
    pub sample_rate: f32,
    /// Seconds elapsed per sample: `1.0 / sample_rate`.
    pub sample_time: f32,
}

impl ProcessArgs {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            sample_time: 1.0 / sample_rate,
        }
    }
}

/// Registration metadata for a module type.
///
/// Serializes (feature `serde`) so hosts can export their module catalogs;
/// module *state* intentionally has no serialized form.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Stable identifier the host registers the module under.
    pub slug: &'static str,
    pub description: &'static str,
}

/// Core trait for per-sample module cores.
///
/// Slots are indexed by each module's own closed id enums (cast to `usize`),
/// so a host can wire values by slot without knowing the concrete type.
pub trait Module: Send {
    fn info(&self) -> ModuleInfo;

    /// Advance one sample.
    ///
    /// Must be non-blocking and allocation-free; it is called from the host's
    /// realtime audio thread. Each call observes the state left by the
    /// immediately preceding call on the same instance.
    fn process(&mut self, args: &ProcessArgs);

    fn params(&self) -> &[Param];
    fn params_mut(&mut self) -> &mut [Param];
    fn inputs(&self) -> &[Input];
    fn inputs_mut(&mut self) -> &mut [Input];
    fn outputs(&self) -> &[Output];
    fn lights(&self) -> &[Light];

    /// Return all internal state to construction values.
    ///
    /// Default implementation does nothing (stateless modules).
    fn reset(&mut self) {}
}

/// Allow boxed modules to be used as modules (for dynamic dispatch).
impl Module for Box<dyn Module> {
    fn info(&self) -> ModuleInfo {
        (**self).info()
    }

    fn process(&mut self, args: &ProcessArgs) {
        (**self).process(args)
    }

    fn params(&self) -> &[Param] {
        (**self).params()
    }

    fn params_mut(&mut self) -> &mut [Param] {
        (**self).params_mut()
    }

    fn inputs(&self) -> &[Input] {
        (**self).inputs()
    }

    fn inputs_mut(&mut self) -> &mut [Input] {
        (**self).inputs_mut()
    }

    fn outputs(&self) -> &[Output] {
        (**self).outputs()
    }

    fn lights(&self) -> &[Light] {
        (**self).lights()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

pub mod dsp;
pub mod engine; // Host-side per-sample driver
pub mod module; // Params, ports, lights, process contract
pub mod modules; // Module cores shipped with the crate

/// Maximum render block length used by the engine and binaries.
pub const MAX_BLOCK_SIZE: usize = 2048;

/// Fixed polyphonic port width. Output ports carry up to this many channels.
pub const PORT_MAX_CHANNELS: usize = 16;

/// Reference frequency for a pitch of 0 V under the 1V/oct convention.
/// C4 (middle C) = 261.6256 Hz.
pub const FREQ_C4: f32 = 261.6256;

pub use module::{Module, ModuleInfo, ProcessArgs};

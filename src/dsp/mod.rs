//! Low-level DSP primitives used by the module cores.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside module structs. They intentionally stay focused on
//! the signal math so the module layer can handle param/port wiring.

/// Phase accumulators for periodic signals.
pub mod phase;
/// 1V/oct pitch combination and frequency conversion.
pub mod pitch;

pub use phase::Phase;

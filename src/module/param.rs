//! Parameter storage and definition metadata.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Definition metadata for one parameter slot: its value range and how the
/// raw value maps to a displayed quantity.
///
/// The display mapping is `multiplier * base^value` when `display_base` is
/// nonzero (exponential controls like 1V/oct pitch), or `value * multiplier`
/// when it is zero (plain linear controls).
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamConfig {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub name: &'static str,
    /// Unit suffix for display, e.g. `" Hz"`.
    pub unit: &'static str,
    pub display_base: f32,
    pub display_multiplier: f32,
}

impl ParamConfig {
    /// A linear parameter displayed as its raw value.
    pub const fn linear(min: f32, max: f32, default: f32, name: &'static str) -> Self {
        Self {
            min,
            max,
            default,
            name,
            unit: "",
            display_base: 0.0,
            display_multiplier: 1.0,
        }
    }

    /// An exponential parameter displayed as `multiplier * base^value`.
    pub const fn exponential(
        min: f32,
        max: f32,
        default: f32,
        name: &'static str,
        unit: &'static str,
        base: f32,
        multiplier: f32,
    ) -> Self {
        Self {
            min,
            max,
            default,
            name,
            unit,
            display_base: base,
            display_multiplier: multiplier,
        }
    }
}

/// One parameter slot: a value constrained to its config's range.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    value: f32,
    config: ParamConfig,
}

impl Param {
    pub fn new(config: ParamConfig) -> Self {
        Self {
            value: config.default,
            config,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to the config's `[min, max]` range.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.config.min, self.config.max);
    }

    pub fn config(&self) -> &ParamConfig {
        &self.config
    }

    /// The value mapped through the config's display rule.
    pub fn display_value(&self) -> f32 {
        let c = &self.config;
        if c.display_base == 0.0 {
            self.value * c.display_multiplier
        } else {
            c.display_multiplier * c.display_base.powf(self.value)
        }
    }

    /// Return to the default value.
    pub fn reset(&mut self) {
        self.value = self.config.default;
    }
}

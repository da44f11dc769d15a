//! Status light indicators.

/// A single brightness value in [0,1] the host forwards to its indicator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Light {
    brightness: f32,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[inline]
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// Whether the light is visibly on.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.brightness > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        let light = Light::new();
        assert_eq!(light.brightness(), 0.0);
        assert!(!light.is_lit());
    }

    #[test]
    fn brightness_round_trips() {
        let mut light = Light::new();
        light.set_brightness(1.0);
        assert_eq!(light.brightness(), 1.0);
        assert!(light.is_lit());
    }
}

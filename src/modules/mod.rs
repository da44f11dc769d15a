//! Module cores shipped with the crate.

pub mod sine;

pub use sine::SineOsc;

use crate::module::Module;

/// Create a module by its registration slug.
///
/// Returns `None` for unknown slugs; the set of shipped modules is closed.
pub fn create(slug: &str) -> Option<Box<dyn Module>> {
    match slug {
        sine::SLUG => Some(Box::new(SineOsc::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_known_slug() {
        let module = create("sine-osc").expect("sine-osc should be registered");
        assert_eq!(module.info().slug, "sine-osc");
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(create("does-not-exist").is_none());
    }
}

//! Engine options chosen at board construction.

use crate::attacks::SliderMode;
use crate::cache::CachePolicy;

/// Options for a [`crate::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// How bishop, rook and queen targets are computed.
    pub slider_mode: SliderMode,
    /// Size limit of the per-position move cache.
    pub cache: CachePolicy,
}

impl Config {
    pub fn with_slider_mode(mut self, slider_mode: SliderMode) -> Config {
        self.slider_mode = slider_mode;
        self
    }

    pub fn with_cache(mut self, cache: CachePolicy) -> Config {
        self.cache = cache;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.slider_mode, SliderMode::RayTable);
        assert_eq!(config.cache, CachePolicy::Unbounded);
    }

    #[test]
    fn builders() {
        let config = Config::default()
            .with_slider_mode(SliderMode::RayWalk)
            .with_cache(CachePolicy::Bounded(8));
        assert_eq!(config.slider_mode, SliderMode::RayWalk);
        assert_eq!(config.cache, CachePolicy::Bounded(8));
    }
}

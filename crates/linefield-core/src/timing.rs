use serde::{Deserialize, Serialize};

/// Durations and scale bounds of the grow/shrink animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    /// Length of a full grow segment in milliseconds.
    pub grow_ms: u64,
    /// Length of a full shrink segment in milliseconds.
    pub shrink_ms: u64,
    /// Width scale of an untouched line.
    pub resting_scale: f32,
    /// Width scale of a fully engaged line.
    pub target_scale: f32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            grow_ms: 500,
            shrink_ms: 1500,
            resting_scale: 1.2,
            target_scale: 10.0,
        }
    }
}

impl AnimationTiming {
    /// Fraction of the way from resting to target for a given scale, in `[0, 1]`.
    pub fn growth_fraction(&self, scale: f32) -> f32 {
        let span = self.target_scale - self.resting_scale;
        if span <= 0.0 {
            return 0.0;
        }
        ((scale - self.resting_scale) / span).clamp(0.0, 1.0)
    }
}

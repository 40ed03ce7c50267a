//! Unit types: Dp, Px, Density, and the pixel rounding rules

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display scale factor relative to the 160 dpi baseline.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Density(pub f32);

impl Density {
    /// Baseline (mdpi) density.
    pub const BASELINE: Density = Density(1.0);

    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true for finite, strictly positive densities.
    ///
    /// NaN fails the comparison and is therefore rejected as well.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Multiplies the density by an extra factor, e.g. a screen-size boost.
    pub fn scaled_by(self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Scales `base` and rounds half up: `(density * base + 0.5)` truncated.
    ///
    /// The arithmetic stays in `f32` and the final cast truncates toward
    /// zero, matching the legacy platform conversion exactly.
    pub fn scale_half_up(self, base: i32) -> Px {
        Px((self.0 * base as f32 + 0.5) as i32)
    }

    /// Scales `base` and truncates without any rounding bias.
    pub fn scale_truncated(self, base: i32) -> Px {
        Px((self.0 * base as f32) as i32)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to a whole pixel size the way dimension resources are
    /// resolved: round half away from zero, and never collapse a nonzero
    /// dimension to 0 (it becomes 1, or -1 when negative).
    pub fn to_pixel_size(self, density: Density) -> Px {
        let scaled = self.to_px(density.value());
        let rounded = if scaled >= 0.0 {
            (scaled + 0.5) as i32
        } else {
            (scaled - 0.5) as i32
        };
        if rounded != 0 {
            return Px(rounded);
        }
        if self.0 == 0.0 {
            Px(0)
        } else if self.0 > 0.0 {
            Px(1)
        } else {
            Px(-1)
        }
    }
}

/// Whole device pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Px(pub i32);

impl Px {
    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;

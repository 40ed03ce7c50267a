//! Display context: the host-side description a [`MetricsInput`] is
//! captured from.
//!
//! [`MetricsInput`]: crate::MetricsInput

use cranpose_ui_unit::Density;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ApiLevel;

/// Physical display metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayMetrics {
    pub density: Density,
    pub width_pixels: i32,
    pub height_pixels: i32,
}

impl DisplayMetrics {
    pub fn new(density: f32, width_pixels: i32, height_pixels: i32) -> Self {
        Self {
            density: Density(density),
            width_pixels,
            height_pixels,
        }
    }
}

/// Screen layout size class, ordered from smallest to largest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScreenLayoutSize {
    #[default]
    Undefined,
    Small,
    Normal,
    Large,
    XLarge,
}

/// The slice of the host configuration the resolver cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    pub screen_layout_size: ScreenLayoutSize,
    pub api_level: ApiLevel,
}

impl Configuration {
    pub fn new(screen_layout_size: ScreenLayoutSize, api_level: ApiLevel) -> Self {
        Self {
            screen_layout_size,
            api_level,
        }
    }

    /// Returns true if the layout size is at least `size`.
    ///
    /// An undefined layout size never satisfies any threshold.
    pub fn is_layout_size_at_least(&self, size: ScreenLayoutSize) -> bool {
        if self.screen_layout_size == ScreenLayoutSize::Undefined {
            return false;
        }
        self.screen_layout_size >= size
    }
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;

//! Reference resource table reproducing the platform's stock values.

use cranpose_ui_unit::{Density, Dp};

use crate::{ApiLevel, BaseConstants, LookupError, LookupService};

/// Legacy dp constants baked into the platform's view configuration.
pub mod defaults {
    pub const EDGE_SLOP: i32 = 12;
    pub const FADING_EDGE_LENGTH: i32 = 12;
    pub const MINIMUM_FLING_VELOCITY: i32 = 50;
    pub const MAXIMUM_FLING_VELOCITY: i32 = 8000;
    pub const SCROLL_BAR_SIZE: i32 = 4;
    pub const OVERFLING_DISTANCE: i32 = 6;
}

/// `config_scrollbarSize`, read from the resource table since API P.
pub const CONFIG_SCROLLBAR_SIZE: Dp = Dp(4.0);
/// `config_minScalingSpan`, read from the resource table since API Q.
pub const CONFIG_MIN_SCALING_SPAN: Dp = Dp(170.0);

/// Platform resources for a display of the given density.
///
/// Dimension resources are converted to pixels with
/// [`Dp::to_pixel_size`], so the scrollbar size handed out from
/// [`ApiLevel::P`] on is already in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformResources {
    density: Density,
    fading_marquee_enabled: bool,
}

impl PlatformResources {
    pub fn new(density: Density) -> Self {
        Self {
            density,
            fading_marquee_enabled: true,
        }
    }

    /// Overrides `config_ui_enableFadingMarquee`.
    pub fn with_fading_marquee(mut self, enabled: bool) -> Self {
        self.fading_marquee_enabled = enabled;
        self
    }

    fn dimension_pixel_size(&self, dimension: Dp) -> i32 {
        dimension.to_pixel_size(self.density).get()
    }
}

impl LookupService for PlatformResources {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        if !self.density.is_valid() {
            return Err(LookupError::new(
                api_level,
                format!("resource density {} is not usable", self.density.value()),
            ));
        }

        let scrollbar_size = if api_level.is_at_least(ApiLevel::P) {
            self.dimension_pixel_size(CONFIG_SCROLLBAR_SIZE)
        } else {
            defaults::SCROLL_BAR_SIZE
        };
        let min_scaling_span = if api_level.is_at_least(ApiLevel::Q) {
            self.dimension_pixel_size(CONFIG_MIN_SCALING_SPAN)
        } else {
            0
        };

        Ok(BaseConstants {
            edge_slop: defaults::EDGE_SLOP,
            fading_edge_length: defaults::FADING_EDGE_LENGTH,
            minimum_fling_velocity: defaults::MINIMUM_FLING_VELOCITY,
            maximum_fling_velocity: defaults::MAXIMUM_FLING_VELOCITY,
            scrollbar_size,
            overfling_distance: defaults::OVERFLING_DISTANCE,
            min_scaling_span,
            fading_marquee_enabled: self.fading_marquee_enabled,
        })
    }
}

#[cfg(test)]
#[path = "tests/resources_tests.rs"]
mod tests;

//! Resolver input: a display snapshot plus the platform's base constants.

use cranpose_ui_unit::Density;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ApiLevel, Configuration, DisplayMetrics, LookupService, ResolveError, ScreenLayoutSize,
};

/// Unscaled reference values supplied by a [`LookupService`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseConstants {
    pub edge_slop: i32,
    pub fading_edge_length: i32,
    pub minimum_fling_velocity: i32,
    pub maximum_fling_velocity: i32,
    pub scrollbar_size: i32,
    pub overfling_distance: i32,
    pub min_scaling_span: i32,
    pub fading_marquee_enabled: bool,
}

/// Immutable snapshot the resolver works from, captured once per context.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricsInput {
    pub density: Density,
    /// Layout size class is extra large or bigger.
    pub is_xlarge_screen: bool,
    pub width_pixels: i32,
    pub height_pixels: i32,
    pub api_level: ApiLevel,
    pub base_constants: BaseConstants,
}

impl MetricsInput {
    /// Captures a snapshot from a display context, consulting `lookup` once
    /// for the base constants of the configured API level.
    ///
    /// The display is validated first, so an unusable density or negative
    /// size never reaches `lookup`. Lookup failures propagate unchanged;
    /// nothing is synthesized in their place.
    pub fn capture<L: LookupService + ?Sized>(
        display: &DisplayMetrics,
        configuration: &Configuration,
        lookup: &L,
    ) -> Result<Self, ResolveError> {
        check_display(display.density, display.width_pixels, display.height_pixels)?;
        let base_constants = lookup.base_constants(configuration.api_level)?;
        Ok(Self {
            density: display.density,
            is_xlarge_screen: configuration.is_layout_size_at_least(ScreenLayoutSize::XLarge),
            width_pixels: display.width_pixels,
            height_pixels: display.height_pixels,
            api_level: configuration.api_level,
            base_constants,
        })
    }

    /// Checks the caller-side preconditions: a finite positive density and
    /// non-negative pixel dimensions.
    pub fn validate(&self) -> Result<(), ResolveError> {
        check_display(self.density, self.width_pixels, self.height_pixels)
    }
}

fn check_display(density: Density, width: i32, height: i32) -> Result<(), ResolveError> {
    if !density.is_valid() {
        return Err(ResolveError::InvalidDensity {
            density: density.value(),
        });
    }
    if width < 0 || height < 0 {
        return Err(ResolveError::InvalidDimensions { width, height });
    }
    Ok(())
}

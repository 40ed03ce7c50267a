//! Device presets covering the density buckets and layout sizes the
//! resolver branches on.

use cranpose_ui_unit::Density;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ApiLevel, Configuration, DisplayMetrics, LookupService, PlatformResources, ResolveError,
    ResolvedConfig, Resolver, ScreenLayoutSize,
};

pub const PRESET_NAMES: [&str; 4] = ["mdpi-phone", "xhdpi-phone", "xlarge-tablet", "legacy-hdpi"];

/// A named display context.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceProfile {
    pub name: String,
    pub display: DisplayMetrics,
    pub configuration: Configuration,
}

impl DeviceProfile {
    pub fn new(
        name: impl Into<String>,
        density: f32,
        width_pixels: i32,
        height_pixels: i32,
        screen_layout_size: ScreenLayoutSize,
        api_level: u32,
    ) -> Self {
        Self {
            name: name.into(),
            display: DisplayMetrics::new(density, width_pixels, height_pixels),
            configuration: Configuration::new(screen_layout_size, ApiLevel(api_level)),
        }
    }

    pub fn mdpi_phone() -> Self {
        Self::new("mdpi-phone", 1.0, 320, 480, ScreenLayoutSize::Normal, 29)
    }

    pub fn xhdpi_phone() -> Self {
        Self::new("xhdpi-phone", 2.0, 720, 1280, ScreenLayoutSize::Normal, 33)
    }

    pub fn xlarge_tablet() -> Self {
        Self::new("xlarge-tablet", 1.0, 1280, 800, ScreenLayoutSize::XLarge, 30)
    }

    pub fn legacy_hdpi() -> Self {
        Self::new("legacy-hdpi", 1.5, 480, 800, ScreenLayoutSize::Normal, 23)
    }

    /// Looks a preset up by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "mdpi-phone" => Some(Self::mdpi_phone()),
            "xhdpi-phone" => Some(Self::xhdpi_phone()),
            "xlarge-tablet" => Some(Self::xlarge_tablet()),
            "legacy-hdpi" => Some(Self::legacy_hdpi()),
            _ => None,
        }
    }

    pub fn presets() -> Vec<Self> {
        PRESET_NAMES
            .iter()
            .filter_map(|name| Self::preset(name))
            .collect()
    }

    pub fn density(&self) -> Density {
        self.display.density
    }

    /// Platform resources matching this profile's density.
    pub fn resources(&self) -> PlatformResources {
        PlatformResources::new(self.display.density)
    }

    pub fn resolve_with<L: LookupService + ?Sized>(
        &self,
        resolver: &Resolver,
        lookup: &L,
    ) -> Result<ResolvedConfig, ResolveError> {
        resolver.resolve_context(&self.display, &self.configuration, lookup)
    }

    /// Resolves against the stock platform resources.
    pub fn resolve(&self, resolver: &Resolver) -> Result<ResolvedConfig, ResolveError> {
        self.resolve_with(resolver, &self.resources())
    }
}

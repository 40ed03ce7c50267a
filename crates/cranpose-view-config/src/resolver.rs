//! Resolution of display metrics into the scaled view configuration.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    has_permanent_menu_key, ApiLevel, Configuration, DisplayMetrics, LookupService,
    MetricsInput, ResolveError, ResolverOptions,
};

const PRESSED_STATE_DURATION: i32 = 125;
const LONG_PRESS_TIMEOUT: i32 = 500;
const TAP_TIMEOUT: i32 = 115;
const DOUBLE_TAP_TIMEOUT: i32 = 300;
const TOUCH_SLOP: i32 = 16;
const PAGING_TOUCH_SLOP: i32 = TOUCH_SLOP * 2;
const DOUBLE_TAP_SLOP: i32 = 100;
const WINDOW_TOUCH_SLOP: i32 = 16;
const MAXIMUM_FLING_VELOCITY: i32 = 4000;

/// Extra overfling travel granted to extra-large screens.
const XLARGE_OVERFLING_FACTOR: f32 = 1.5;

/// Floor for the drawing cache size: the value that used to be hardcoded.
/// Screenshot tests drawing large views onto tiny software-rendered
/// screens depend on it.
pub const MIN_MAXIMUM_DRAWING_CACHE_SIZE: i64 = 480 * 800 * 4;

/// Fully resolved view configuration for one display context.
///
/// Produced once by [`Resolver::resolve`] and never mutated afterwards.
/// Serialize-only: the resolver is the one place that builds these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ResolvedConfig {
    edge_slop: i32,
    fading_edge_length: i32,
    minimum_fling_velocity: i32,
    maximum_fling_velocity: i32,
    scrollbar_size: i32,
    overfling_distance: i32,
    touch_slop: i32,
    paging_touch_slop: i32,
    double_tap_slop: i32,
    window_touch_slop: i32,
    maximum_drawing_cache_size: i64,
    min_scaling_span: i32,
    fading_marquee_enabled: bool,
    constructed_with_context: bool,
}

impl ResolvedConfig {
    pub const PRESSED_STATE_DURATION: i32 = PRESSED_STATE_DURATION;
    pub const LONG_PRESS_TIMEOUT: i32 = LONG_PRESS_TIMEOUT;
    pub const TAP_TIMEOUT: i32 = TAP_TIMEOUT;
    pub const DOUBLE_TAP_TIMEOUT: i32 = DOUBLE_TAP_TIMEOUT;
    pub const TOUCH_SLOP: i32 = TOUCH_SLOP;
    pub const WINDOW_TOUCH_SLOP: i32 = WINDOW_TOUCH_SLOP;
    pub const MAXIMUM_FLING_VELOCITY: i32 = MAXIMUM_FLING_VELOCITY;

    /// Duration in milliseconds of the pressed state in child components.
    pub const fn pressed_state_duration() -> i32 {
        PRESSED_STATE_DURATION
    }

    /// Milliseconds before a press turns into a long press.
    pub const fn long_press_timeout() -> i32 {
        LONG_PRESS_TIMEOUT
    }

    /// Milliseconds to wait before deciding whether a touch is a tap or a
    /// scroll.
    pub const fn tap_timeout() -> i32 {
        TAP_TIMEOUT
    }

    /// Milliseconds between the first tap's up and the second tap's down
    /// for the pair to count as a double tap.
    pub const fn double_tap_timeout() -> i32 {
        DOUBLE_TAP_TIMEOUT
    }

    /// Unscaled touch slop in dp.
    pub const fn touch_slop() -> i32 {
        TOUCH_SLOP
    }

    /// Unscaled window touch slop in dp.
    pub const fn window_touch_slop() -> i32 {
        WINDOW_TOUCH_SLOP
    }

    /// Unscaled maximum fling velocity in dp per second.
    pub const fn maximum_fling_velocity() -> i32 {
        MAXIMUM_FLING_VELOCITY
    }

    pub fn scaled_edge_slop(&self) -> i32 {
        self.edge_slop
    }

    pub fn scaled_fading_edge_length(&self) -> i32 {
        self.fading_edge_length
    }

    pub fn scaled_minimum_fling_velocity(&self) -> i32 {
        self.minimum_fling_velocity
    }

    pub fn scaled_maximum_fling_velocity(&self) -> i32 {
        self.maximum_fling_velocity
    }

    pub fn scaled_scrollbar_size(&self) -> i32 {
        self.scrollbar_size
    }

    /// Handed through to the overscroll owner untouched.
    pub fn scaled_overfling_distance(&self) -> i32 {
        self.overfling_distance
    }

    pub fn scaled_touch_slop(&self) -> i32 {
        self.touch_slop
    }

    pub fn scaled_paging_touch_slop(&self) -> i32 {
        self.paging_touch_slop
    }

    pub fn scaled_double_tap_slop(&self) -> i32 {
        self.double_tap_slop
    }

    pub fn scaled_window_touch_slop(&self) -> i32 {
        self.window_touch_slop
    }

    /// Maximum drawing cache size in bytes.
    pub fn scaled_maximum_drawing_cache_size(&self) -> i64 {
        self.maximum_drawing_cache_size
    }

    pub fn scaled_minimum_scaling_span(&self) -> i32 {
        self.min_scaling_span
    }

    pub fn is_fading_marquee_enabled(&self) -> bool {
        self.fading_marquee_enabled
    }

    /// True for configurations resolved on API levels that track whether
    /// they were built from a context.
    pub fn is_constructed_with_context(&self) -> bool {
        self.constructed_with_context
    }

    /// Reads the process-wide permanent menu key override at call time.
    pub fn has_permanent_menu_key(&self) -> bool {
        has_permanent_menu_key()
    }
}

/// Turns [`MetricsInput`] snapshots into [`ResolvedConfig`]s.
///
/// A resolver holds only its options; resolution is pure and idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    /// A resolver configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(ResolverOptions::from_env())
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolves a captured snapshot.
    pub fn resolve(&self, input: &MetricsInput) -> Result<ResolvedConfig, ResolveError> {
        if let Err(err) = input.validate() {
            log::warn!("rejecting view configuration input: {err}");
            return Err(err);
        }

        let density = input.density;
        let base = &input.base_constants;
        let size_and_density = if input.is_xlarge_screen {
            density.scaled_by(XLARGE_OVERFLING_FACTOR)
        } else {
            density
        };

        let scrollbar_size = if input.api_level.is_at_least(ApiLevel::P) {
            log::trace!("api {}: scrollbar size taken as resource pixels", input.api_level);
            base.scrollbar_size
        } else {
            log::trace!("api {}: scrollbar size scaled from dp", input.api_level);
            density.scale_half_up(base.scrollbar_size).get()
        };

        let computed_cache_size =
            4 * i64::from(input.width_pixels) * i64::from(input.height_pixels);
        let maximum_drawing_cache_size = computed_cache_size.max(MIN_MAXIMUM_DRAWING_CACHE_SIZE);

        let min_scaling_span = if !input.api_level.is_at_least(ApiLevel::Q) {
            0
        } else if self.options.min_scaling_span.uses_real_value() {
            base.min_scaling_span
        } else {
            log::trace!("api {}: legacy zero min scaling span", input.api_level);
            0
        };

        let config = ResolvedConfig {
            edge_slop: density.scale_half_up(base.edge_slop).get(),
            fading_edge_length: density.scale_half_up(base.fading_edge_length).get(),
            minimum_fling_velocity: density.scale_half_up(base.minimum_fling_velocity).get(),
            maximum_fling_velocity: density.scale_half_up(base.maximum_fling_velocity).get(),
            scrollbar_size,
            overfling_distance: size_and_density
                .scale_truncated(base.overfling_distance)
                .get(),
            touch_slop: density.scale_half_up(TOUCH_SLOP).get(),
            paging_touch_slop: density.scale_half_up(PAGING_TOUCH_SLOP).get(),
            double_tap_slop: density.scale_half_up(DOUBLE_TAP_SLOP).get(),
            window_touch_slop: density.scale_half_up(WINDOW_TOUCH_SLOP).get(),
            maximum_drawing_cache_size,
            min_scaling_span,
            fading_marquee_enabled: base.fading_marquee_enabled,
            constructed_with_context: input.api_level.is_at_least(ApiLevel::Q),
        };

        log::debug!(
            "resolved view configuration: density={} api={} touch_slop={} scrollbar={} \
             overfling={} cache={}",
            density.value(),
            input.api_level,
            config.touch_slop,
            config.scrollbar_size,
            config.overfling_distance,
            config.maximum_drawing_cache_size,
        );

        Ok(config)
    }

    /// Captures a snapshot from a display context and resolves it.
    ///
    /// `lookup` is consulted exactly once; its failure is returned as
    /// [`ResolveError::Lookup`] without producing a configuration.
    pub fn resolve_context<L: LookupService + ?Sized>(
        &self,
        display: &DisplayMetrics,
        configuration: &Configuration,
        lookup: &L,
    ) -> Result<ResolvedConfig, ResolveError> {
        let input = MetricsInput::capture(display, configuration, lookup)?;
        self.resolve(&input)
    }
}

/// Resolves `input` with options read from the environment at call time.
pub fn resolve(input: &MetricsInput) -> Result<ResolvedConfig, ResolveError> {
    Resolver::from_env().resolve(input)
}

/// Captures and resolves a display context with options read from the
/// environment at call time.
pub fn resolve_context<L: LookupService + ?Sized>(
    display: &DisplayMetrics,
    configuration: &Configuration,
    lookup: &L,
) -> Result<ResolvedConfig, ResolveError> {
    Resolver::from_env().resolve_context(display, configuration, lookup)
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;

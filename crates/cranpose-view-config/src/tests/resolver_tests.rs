use super::{ResolvedConfig, Resolver, MIN_MAXIMUM_DRAWING_CACHE_SIZE};
use crate::{
    ApiLevel, BaseConstants, MetricsInput, MinScalingSpanPolicy, ResolveError, ResolverOptions,
};
use cranpose_ui_unit::Density;

fn base() -> BaseConstants {
    BaseConstants {
        edge_slop: 12,
        fading_edge_length: 12,
        minimum_fling_velocity: 50,
        maximum_fling_velocity: 8000,
        scrollbar_size: 4,
        overfling_distance: 6,
        min_scaling_span: 170,
        fading_marquee_enabled: true,
    }
}

fn input(density: f32, api_level: u32) -> MetricsInput {
    MetricsInput {
        density: Density(density),
        is_xlarge_screen: false,
        width_pixels: 320,
        height_pixels: 480,
        api_level: ApiLevel(api_level),
        base_constants: base(),
    }
}

fn resolve(input: &MetricsInput) -> ResolvedConfig {
    Resolver::default().resolve(input).expect("valid input")
}

#[test]
fn baseline_density_keeps_base_values() {
    let config = resolve(&input(1.0, 30));
    assert_eq!(config.scaled_edge_slop(), 12);
    assert_eq!(config.scaled_fading_edge_length(), 12);
    assert_eq!(config.scaled_minimum_fling_velocity(), 50);
    assert_eq!(config.scaled_maximum_fling_velocity(), 8000);
    assert_eq!(config.scaled_touch_slop(), 16);
    assert_eq!(config.scaled_paging_touch_slop(), 32);
    assert_eq!(config.scaled_double_tap_slop(), 100);
    assert_eq!(config.scaled_window_touch_slop(), 16);
    assert_eq!(config.scaled_overfling_distance(), 6);
}

#[test]
fn touch_slop_rounds_half_up() {
    assert_eq!(resolve(&input(1.0, 30)).scaled_touch_slop(), 16);
    assert_eq!(resolve(&input(0.75, 30)).scaled_touch_slop(), 12);
    assert_eq!(resolve(&input(1.5, 30)).scaled_touch_slop(), 24);
}

#[test]
fn scaled_fields_follow_density() {
    let config = resolve(&input(1.5, 30));
    assert_eq!(config.scaled_edge_slop(), 18);
    assert_eq!(config.scaled_minimum_fling_velocity(), 75);
    assert_eq!(config.scaled_maximum_fling_velocity(), 12000);
    assert_eq!(config.scaled_double_tap_slop(), 150);
    assert_eq!(config.scaled_window_touch_slop(), 24);
}

#[test]
fn paging_touch_slop_doubles_touch_slop_on_standard_densities() {
    for density in [0.75, 1.0, 1.5, 2.0, 2.625, 3.0, 3.5, 4.0] {
        let config = resolve(&input(density, 30));
        assert_eq!(
            config.scaled_paging_touch_slop(),
            2 * config.scaled_touch_slop(),
            "density {density}"
        );
    }
}

#[test]
fn paging_touch_slop_is_scaled_from_its_own_base() {
    let config = resolve(&input(1.33125, 30));
    assert_eq!(config.scaled_touch_slop(), 21);
    assert_eq!(config.scaled_paging_touch_slop(), 43);
}

#[test]
fn drawing_cache_size_has_a_floor() {
    let mut small = input(1.0, 30);
    small.width_pixels = 100;
    small.height_pixels = 100;
    assert_eq!(
        resolve(&small).scaled_maximum_drawing_cache_size(),
        MIN_MAXIMUM_DRAWING_CACHE_SIZE
    );
    assert_eq!(MIN_MAXIMUM_DRAWING_CACHE_SIZE, 1_536_000);

    small.density = Density(4.0);
    assert_eq!(resolve(&small).scaled_maximum_drawing_cache_size(), 1_536_000);

    let mut empty = input(1.0, 30);
    empty.width_pixels = 0;
    empty.height_pixels = 0;
    assert_eq!(resolve(&empty).scaled_maximum_drawing_cache_size(), 1_536_000);
}

#[test]
fn drawing_cache_size_grows_with_display() {
    let mut large = input(1.0, 30);
    large.width_pixels = 2000;
    large.height_pixels = 2000;
    assert_eq!(resolve(&large).scaled_maximum_drawing_cache_size(), 16_000_000);
}

#[test]
fn drawing_cache_size_does_not_overflow() {
    let mut huge = input(1.0, 30);
    huge.width_pixels = 50_000;
    huge.height_pixels = 50_000;
    assert_eq!(
        resolve(&huge).scaled_maximum_drawing_cache_size(),
        10_000_000_000
    );
}

#[test]
fn scrollbar_is_scaled_before_p() {
    let mut legacy = input(2.0, 27);
    legacy.base_constants.scrollbar_size = 10;
    assert_eq!(resolve(&legacy).scaled_scrollbar_size(), 20);
}

#[test]
fn scrollbar_is_verbatim_from_p() {
    for api in [28, 29, 34] {
        let mut modern = input(2.0, api);
        modern.base_constants.scrollbar_size = 16;
        assert_eq!(resolve(&modern).scaled_scrollbar_size(), 16, "api {api}");
    }
}

#[test]
fn overfling_truncates_instead_of_rounding() {
    let config = resolve(&input(0.75, 30));
    assert_eq!(config.scaled_overfling_distance(), 4);
    assert_eq!(config.scaled_edge_slop(), 9);
}

#[test]
fn xlarge_screens_get_extra_overfling() {
    let mut tablet = input(1.0, 30);
    tablet.is_xlarge_screen = true;
    assert_eq!(resolve(&tablet).scaled_overfling_distance(), 9);

    tablet.density = Density(2.0);
    let config = resolve(&tablet);
    assert_eq!(config.scaled_overfling_distance(), 18);
    assert_eq!(config.scaled_touch_slop(), 32);
}

#[test]
fn min_scaling_span_is_zero_before_q() {
    for policy in [
        MinScalingSpanPolicy::RealPlatformValue,
        MinScalingSpanPolicy::LegacyZero,
    ] {
        let resolver = Resolver::new(ResolverOptions::new().with_min_scaling_span(policy));
        let config = resolver.resolve(&input(1.0, 28)).expect("valid input");
        assert_eq!(config.scaled_minimum_scaling_span(), 0);
    }
}

#[test]
fn min_scaling_span_follows_policy_from_q() {
    let real = Resolver::new(
        ResolverOptions::new().with_min_scaling_span(MinScalingSpanPolicy::RealPlatformValue),
    );
    let legacy = Resolver::new(
        ResolverOptions::new().with_min_scaling_span(MinScalingSpanPolicy::LegacyZero),
    );

    let snapshot = input(2.0, 29);
    assert_eq!(
        real.resolve(&snapshot).unwrap().scaled_minimum_scaling_span(),
        170
    );
    assert_eq!(
        legacy.resolve(&snapshot).unwrap().scaled_minimum_scaling_span(),
        0
    );
}

#[test]
fn collaborator_values_are_not_sanitized() {
    let mut odd = input(1.0, 30);
    odd.base_constants.scrollbar_size = -3;
    odd.base_constants.min_scaling_span = -1;
    let config = resolve(&odd);
    assert_eq!(config.scaled_scrollbar_size(), -3);
    assert_eq!(config.scaled_minimum_scaling_span(), -1);
}

#[test]
fn fading_marquee_is_copied_through() {
    let mut snapshot = input(1.0, 30);
    assert!(resolve(&snapshot).is_fading_marquee_enabled());
    snapshot.base_constants.fading_marquee_enabled = false;
    assert!(!resolve(&snapshot).is_fading_marquee_enabled());
}

#[test]
fn constructed_with_context_from_q() {
    assert!(!resolve(&input(1.0, 28)).is_constructed_with_context());
    assert!(resolve(&input(1.0, 29)).is_constructed_with_context());
}

#[test]
fn fixed_constants_ignore_input() {
    assert_eq!(ResolvedConfig::pressed_state_duration(), 125);
    assert_eq!(ResolvedConfig::long_press_timeout(), 500);
    assert_eq!(ResolvedConfig::tap_timeout(), 115);
    assert_eq!(ResolvedConfig::double_tap_timeout(), 300);
    assert_eq!(ResolvedConfig::touch_slop(), 16);
    assert_eq!(ResolvedConfig::window_touch_slop(), 16);
    assert_eq!(ResolvedConfig::maximum_fling_velocity(), 4000);
    assert_eq!(ResolvedConfig::TOUCH_SLOP, ResolvedConfig::touch_slop());
}

#[test]
fn resolution_is_idempotent() {
    let snapshot = input(2.625, 33);
    let resolver = Resolver::default();
    assert_eq!(resolver.resolve(&snapshot), resolver.resolve(&snapshot));
}

#[test]
fn non_positive_density_is_invalid_input() {
    for density in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = Resolver::default()
            .resolve(&input(density, 30))
            .expect_err("invalid density");
        assert!(err.is_invalid_input(), "density {density}");
        assert!(matches!(err, ResolveError::InvalidDensity { .. }));
    }
}

#[test]
fn negative_dimensions_are_invalid_input() {
    let mut snapshot = input(1.0, 30);
    snapshot.height_pixels = -1;
    let err = Resolver::default()
        .resolve(&snapshot)
        .expect_err("negative height");
    assert_eq!(
        err,
        ResolveError::InvalidDimensions {
            width: 320,
            height: -1
        }
    );
    assert!(err.is_invalid_input());
}

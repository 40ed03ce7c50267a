//! Assertion helpers for resolved configurations.

use cranpose_view_config::{ResolvedConfig, MIN_MAXIMUM_DRAWING_CACHE_SIZE};

/// Asserts the invariants every configuration built from non-negative base
/// constants must satisfy.
pub fn assert_config_invariants(config: &ResolvedConfig, msg: &str) {
    let scaled = [
        ("edge_slop", config.scaled_edge_slop()),
        ("fading_edge_length", config.scaled_fading_edge_length()),
        ("minimum_fling_velocity", config.scaled_minimum_fling_velocity()),
        ("maximum_fling_velocity", config.scaled_maximum_fling_velocity()),
        ("scrollbar_size", config.scaled_scrollbar_size()),
        ("overfling_distance", config.scaled_overfling_distance()),
        ("touch_slop", config.scaled_touch_slop()),
        ("paging_touch_slop", config.scaled_paging_touch_slop()),
        ("double_tap_slop", config.scaled_double_tap_slop()),
        ("window_touch_slop", config.scaled_window_touch_slop()),
        ("min_scaling_span", config.scaled_minimum_scaling_span()),
    ];
    for (name, value) in scaled {
        assert!(value >= 0, "{}: {} is negative ({})", msg, name, value);
    }
    assert!(
        config.scaled_maximum_drawing_cache_size() >= MIN_MAXIMUM_DRAWING_CACHE_SIZE,
        "{}: drawing cache {} below floor {}",
        msg,
        config.scaled_maximum_drawing_cache_size(),
        MIN_MAXIMUM_DRAWING_CACHE_SIZE
    );
}

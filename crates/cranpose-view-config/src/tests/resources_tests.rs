use super::{defaults, PlatformResources};
use crate::{ApiLevel, LookupService};
use cranpose_ui_unit::Density;

#[test]
fn pre_p_scrollbar_is_unscaled_dp() {
    let resources = PlatformResources::new(Density(2.0));
    let base = resources.base_constants(ApiLevel(27)).expect("base constants");
    assert_eq!(base.scrollbar_size, defaults::SCROLL_BAR_SIZE);
    assert_eq!(base.min_scaling_span, 0);
}

#[test]
fn p_scrollbar_is_resolved_to_pixels() {
    let resources = PlatformResources::new(Density(2.0));
    let base = resources.base_constants(ApiLevel::P).expect("base constants");
    assert_eq!(base.scrollbar_size, 8);
    assert_eq!(base.min_scaling_span, 0);
}

#[test]
fn q_reports_min_scaling_span_in_pixels() {
    let base = PlatformResources::new(Density(1.0))
        .base_constants(ApiLevel::Q)
        .expect("base constants");
    assert_eq!(base.min_scaling_span, 170);

    let base = PlatformResources::new(Density(1.5))
        .base_constants(ApiLevel(33))
        .expect("base constants");
    assert_eq!(base.min_scaling_span, 255);
    assert_eq!(base.scrollbar_size, 6);
}

#[test]
fn legacy_constants_do_not_depend_on_density() {
    let low = PlatformResources::new(Density(0.75))
        .base_constants(ApiLevel(30))
        .expect("base constants");
    let high = PlatformResources::new(Density(3.0))
        .base_constants(ApiLevel(30))
        .expect("base constants");
    assert_eq!(low.edge_slop, high.edge_slop);
    assert_eq!(low.overfling_distance, defaults::OVERFLING_DISTANCE);
    assert_eq!(high.maximum_fling_velocity, defaults::MAXIMUM_FLING_VELOCITY);
}

#[test]
fn fading_marquee_is_configurable() {
    let resources = PlatformResources::new(Density(1.0));
    assert!(resources.base_constants(ApiLevel::Q).unwrap().fading_marquee_enabled);
    let disabled = resources.with_fading_marquee(false);
    assert!(!disabled.base_constants(ApiLevel::Q).unwrap().fading_marquee_enabled);
}

#[test]
fn unusable_density_is_a_lookup_failure() {
    let err = PlatformResources::new(Density(0.0))
        .base_constants(ApiLevel::Q)
        .expect_err("zero density");
    assert_eq!(err.api_level, ApiLevel::Q);
}

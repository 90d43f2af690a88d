// Sanity bounds over the tuning tables: cheap guards against a typo'd
// constant silently changing the feel of the whole overlay.

#![allow(dead_code)]
mod fx {
    pub mod sim {
        include!("../src/core/constants.rs");
    }
    pub mod web {
        include!("../src/constants.rs");
    }
}

use fx::sim::*;
use fx::web::*;

#[test]
fn frame_and_spawn_tuning_is_sane() {
    assert!(MAX_FRAME_DT > 0.0 && MAX_FRAME_DT <= 0.1);
    assert!(BURST_RATE > 0.0);
    assert!(FOG_TRICKLE_MAX >= 1);
    assert!(FOG_TARGET_MIN >= 1);
    assert!(FOG_PHASE_PRESEED > 0.0 && FOG_PHASE_PRESEED < 1.0);
}

#[test]
fn jitter_fractions_keep_spawns_inside_their_rect() {
    assert!(DOT_JITTER_W > 0.0 && DOT_JITTER_W <= 1.0);
    assert!(DOT_JITTER_H > 0.0 && DOT_JITTER_H <= 1.0);
    assert!(FOG_JITTER_W > 0.0 && FOG_JITTER_W <= 1.0);
    assert!(FOG_JITTER_H > 0.0 && FOG_JITTER_H <= 1.0);
    assert!(FOG_JITTER_H_BIAS.abs() < 0.5);
}

#[test]
fn fog_rises() {
    assert!(FOG_INIT_VY_MIN > 0.0);
    assert!(FOG_INIT_VY_SPAN > 0.0);
    assert!(DRIFT_UP_BIAS > 0.0);
    assert!(DRIFT_HALF_RATE > 0.0 && DRIFT_HALF_RATE <= 1.0);
}

#[test]
fn outline_sampling_bounds_are_ordered() {
    assert!(OUTLINE_SAMPLE_SPACING > 0.0);
    assert!(OUTLINE_SAMPLES_MIN >= 3);
    assert!(OUTLINE_SAMPLES_MIN < OUTLINE_SAMPLES_MAX);
}

#[test]
fn glow_ratios_stay_sub_unit() {
    assert!(GLOW_RIM_WIDTH_RATIO > 0.0 && GLOW_RIM_WIDTH_RATIO < 1.0);
    assert!(GLOW_RIM_ALPHA_RATIO > 0.0 && GLOW_RIM_ALPHA_RATIO < 1.0);
    assert!(GLOW_PULSE_SPEED > 0.0);
    for r in [
        TWINKLE_WIDTH_RATIO_A,
        TWINKLE_WIDTH_RATIO_B,
        TWINKLE_ALPHA_RATIO_A,
        TWINKLE_ALPHA_RATIO_B,
    ] {
        assert!(r > 0.0 && r < 1.0);
    }
    assert!(TWINKLE_DASH_A.iter().all(|d| *d > 0.0));
    assert!(TWINKLE_DASH_B.iter().all(|d| *d > 0.0));
    // Dashes must move in opposite directions or the layers read as one.
    assert!(TWINKLE_SPEED_A * TWINKLE_SPEED_B < 0.0);
}

#[test]
fn render_defaults_are_visible_but_subtle() {
    assert!(DOT_MIN_RADIUS > 0.0);
    assert!(FOG_PUFF_ALPHA > 0.0 && FOG_PUFF_ALPHA < 0.3);
    assert!(GLOW_DEFAULT_WIDTH > 0.0);
    assert!(GLOW_DEFAULT_BLUR >= 0.0);
    assert!(GLOW_DEFAULT_ALPHA > 0.0 && GLOW_DEFAULT_ALPHA <= 1.0);
    assert!(GLOW_DEFAULT_PULSE >= 1.0);
}

#[test]
fn selectors_and_attributes_are_nonempty() {
    for s in [
        FX_CANVAS_ID,
        SURFACE_SELECTOR,
        HOTSPOT_SELECTOR,
        EFFECT_ATTR,
        GLOW_ATTR,
        GLOW_COLOR_ATTR,
        GLOW_WIDTH_ATTR,
        GLOW_BLUR_ATTR,
        GLOW_ALPHA_ATTR,
        GLOW_PULSE_ATTR,
        GLOW_TWINKLE_ATTR,
        FOG_BLUR_FILTER,
        REDUCED_MOTION_QUERY,
    ] {
        assert!(!s.is_empty());
    }
    assert!(HOTSPOT_SELECTOR.contains(".hotspot"));
}

// Host-side tests for scene metrics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod metrics {
        include!("../src/core/metrics.rs");
    }
}

use fx::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};
use fx::metrics::SceneMetrics;

#[test]
fn design_resolution_is_unit_scale() {
    let m = SceneMetrics::new(DESIGN_WIDTH, DESIGN_HEIGHT, 1.0);
    assert!((m.scale - 1.0).abs() < 1e-6);
    assert!((m.area_scale - 1.0).abs() < 1e-6);
}

#[test]
fn default_matches_design_resolution() {
    let m = SceneMetrics::default();
    assert_eq!(m.width, DESIGN_WIDTH);
    assert_eq!(m.height, DESIGN_HEIGHT);
    assert!((m.scale - 1.0).abs() < 1e-6);
}

#[test]
fn half_size_surface_scales_linearly_and_by_area() {
    let m = SceneMetrics::new(DESIGN_WIDTH * 0.5, DESIGN_HEIGHT * 0.5, 2.0);
    assert!((m.scale - 0.5).abs() < 1e-6);
    assert!((m.area_scale - 0.25).abs() < 1e-6);
    assert!((m.dpr - 2.0).abs() < 1e-6);
}

#[test]
fn scale_uses_smaller_axis() {
    // Full design width but half height: the height limits the scale.
    let m = SceneMetrics::new(DESIGN_WIDTH, DESIGN_HEIGHT * 0.5, 1.0);
    assert!((m.scale - 0.5).abs() < 1e-6);
    assert!((m.area_scale - 0.5).abs() < 1e-6);
}

#[test]
fn same_area_different_shapes_agree_on_area_scale() {
    // 3200x450 has the same pixel area as 1600x900.
    let a = SceneMetrics::new(1600.0, 900.0, 1.0);
    let b = SceneMetrics::new(3200.0, 450.0, 1.0);
    assert!((a.area_scale - b.area_scale).abs() < 1e-6);
}

#[test]
fn degenerate_inputs_clamp_to_zero() {
    let m = SceneMetrics::new(f32::NAN, -10.0, f32::INFINITY);
    assert_eq!(m.width, 0.0);
    assert_eq!(m.height, 0.0);
    assert_eq!(m.dpr, 1.0);
    assert!(m.scale >= 0.0);
    assert!(m.area_scale >= 0.0);
}

// Host-side tests for outline building and sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod outline {
        include!("../src/core/outline.rs");
    }
}

use fx::constants::{OUTLINE_SAMPLES_MAX, OUTLINE_SAMPLES_MIN, OUTLINE_SAMPLE_SPACING};
use fx::outline::{polygon_outline, rect_outline, sample_count, Transform2d};
use glam::Vec2;

#[test]
fn identity_transform_is_a_noop() {
    let p = Vec2::new(12.5, -3.0);
    assert_eq!(Transform2d::IDENTITY.apply(p), p);
}

#[test]
fn transform_applies_svg_matrix_layout() {
    // Scale 2x, then translate by (10, 20).
    let t = Transform2d {
        a: 2.0,
        b: 0.0,
        c: 0.0,
        d: 2.0,
        e: 10.0,
        f: 20.0,
    };
    assert_eq!(t.apply(Vec2::new(3.0, 4.0)), Vec2::new(16.0, 28.0));

    // Shear terms land in the right slots.
    let shear = Transform2d {
        a: 1.0,
        b: 0.5,
        c: 0.25,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };
    let out = shear.apply(Vec2::new(4.0, 8.0));
    assert!((out.x - 6.0).abs() < 1e-6);
    assert!((out.y - 10.0).abs() < 1e-6);
}

#[test]
fn polygon_outline_needs_three_vertices() {
    let ctm = Transform2d::IDENTITY;
    let origin = Vec2::ZERO;
    assert!(polygon_outline(&[], &ctm, origin).is_none());
    assert!(polygon_outline(&[Vec2::ZERO, Vec2::ONE], &ctm, origin).is_none());
    let tri = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 8.0)];
    assert!(polygon_outline(&tri, &ctm, origin).is_some());
}

#[test]
fn polygon_outline_maps_into_surface_space() {
    let tri = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 8.0)];
    let ctm = Transform2d {
        a: 2.0,
        b: 0.0,
        c: 0.0,
        d: 2.0,
        e: 100.0,
        f: 50.0,
    };
    let origin = Vec2::new(40.0, 30.0);
    let outline = polygon_outline(&tri, &ctm, origin).unwrap();
    assert_eq!(outline.points.len(), 3);
    // (0,0) -> viewport (100, 50) -> surface (60, 20)
    assert_eq!(outline.points[0], Vec2::new(60.0, 20.0));
    assert_eq!(outline.points[1], Vec2::new(80.0, 20.0));
    assert_eq!(outline.points[2], Vec2::new(70.0, 36.0));
}

#[test]
fn sample_count_clamps_both_ends() {
    assert_eq!(sample_count(f32::NAN), OUTLINE_SAMPLES_MIN);
    assert_eq!(sample_count(f32::INFINITY), OUTLINE_SAMPLES_MIN);
    assert_eq!(sample_count(0.0), OUTLINE_SAMPLES_MIN);
    assert_eq!(sample_count(-5.0), OUTLINE_SAMPLES_MIN);
    // Short path: below the floor.
    assert_eq!(sample_count(30.0), OUTLINE_SAMPLES_MIN);
    // Mid-range path scales with spacing.
    assert_eq!(sample_count(600.0), (600.0 / OUTLINE_SAMPLE_SPACING) as usize);
    // Very long path: capped.
    assert_eq!(sample_count(1.0e6), OUTLINE_SAMPLES_MAX);
}

#[test]
fn rect_outline_walks_the_corners_clockwise() {
    let o = rect_outline(10.0, 20.0, 30.0, 40.0);
    assert_eq!(o.points.len(), 4);
    assert_eq!(o.points[0], Vec2::new(10.0, 20.0));
    assert_eq!(o.points[1], Vec2::new(40.0, 20.0));
    assert_eq!(o.points[2], Vec2::new(40.0, 60.0));
    assert_eq!(o.points[3], Vec2::new(10.0, 60.0));
    assert!(!o.is_empty());
}

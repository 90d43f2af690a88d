// Host-side tests for the rate-based spawn policy (dot emitters).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod metrics {
        include!("../src/core/metrics.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
    pub mod outline {
        include!("../src/core/outline.rs");
    }
    pub mod glow {
        include!("../src/core/glow.rs");
    }
    pub mod emitter {
        include!("../src/core/emitter.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod engine {
        include!("../src/core/engine.rs");
    }
}

use fx::color::Color;
use fx::emitter::{EmitterRect, EmitterSpec};
use fx::engine::FxEngine;
use fx::metrics::SceneMetrics;
use fx::style::{EmitterStyle, RenderMode};
use smallvec::smallvec;

const DT: f32 = 1.0 / 60.0;

fn rect() -> EmitterRect {
    EmitterRect {
        cx: 400.0,
        cy: 300.0,
        w: 80.0,
        h: 40.0,
    }
}

fn dot_style(rate_idle: f32, rate_hover: f32) -> EmitterStyle {
    EmitterStyle {
        mode: RenderMode::Dot,
        palette: smallvec![Color::WHITE],
        gravity: 8.0,
        spread: 0.6,
        size: [1.0, 2.0],
        // Long-lived so nothing decays during the counting window.
        life: [1000.0, 1000.0],
        rate_idle,
        rate_hover,
        speed: [30.0, 70.0],
        fog_target: 0,
    }
}

fn engine_with(style: EmitterStyle) -> FxEngine {
    let mut engine = FxEngine::new(7);
    engine.set_metrics(SceneMetrics::default());
    engine.rebuild_emitters(vec![EmitterSpec {
        rect: Some(rect()),
        style,
        glow: None,
    }]);
    engine
}

#[test]
fn idle_rate_spawns_floor_of_rate_times_time() {
    // rate 5/s over 10 simulated seconds -> 50 particles.
    let mut engine = engine_with(dot_style(5.0, 30.0));
    for _ in 0..600 {
        engine.advance(DT);
    }
    let n = engine.particle_count() as i64;
    assert!((49..=50).contains(&n), "expected ~50 dots, got {}", n);
}

#[test]
fn hover_switches_to_hover_rate() {
    let mut engine = engine_with(dot_style(5.0, 30.0));
    engine.set_hover(0, true);
    for _ in 0..600 {
        engine.advance(DT);
    }
    let n = engine.particle_count() as i64;
    assert!((299..=300).contains(&n), "expected ~300 dots, got {}", n);
}

#[test]
fn spawn_rate_is_area_scaled() {
    let mut engine = engine_with(dot_style(5.0, 30.0));
    // Quarter area -> quarter density.
    engine.set_metrics(SceneMetrics::new(800.0, 450.0, 1.0));
    for _ in 0..600 {
        engine.advance(DT);
    }
    let n = engine.particle_count() as i64;
    assert!((11..=13).contains(&n), "expected ~12 dots, got {}", n);
}

#[test]
fn fractional_accumulator_never_overspawns() {
    let mut engine = engine_with(dot_style(7.3, 0.0));
    let mut frames = 0u32;
    for _ in 0..240 {
        engine.advance(DT);
        frames += 1;
        let ceiling = (7.3 * DT * frames as f32).ceil() as usize;
        assert!(engine.particle_count() <= ceiling);
    }
}

#[test]
fn burst_applies_exactly_once() {
    // No base rate: everything spawned comes from the burst.
    let mut engine = engine_with(dot_style(0.0, 0.0));
    engine.queue_burst(0);
    engine.advance(DT);
    let after_burst = engine.particle_count();
    assert_eq!(after_burst, (80.0 * DT) as usize); // floor(1.33) = 1
    for _ in 0..120 {
        engine.advance(DT);
    }
    assert_eq!(engine.particle_count(), after_burst);
}

#[test]
fn burst_scales_with_frame_delta() {
    let mut engine = engine_with(dot_style(0.0, 0.0));
    engine.queue_burst(0);
    engine.advance(0.05);
    // 80/s over a 50 ms frame -> 4 particles.
    assert_eq!(engine.particle_count(), 4);
}

#[test]
fn detached_emitter_is_skipped_not_destroyed() {
    let mut engine = engine_with(dot_style(0.0, 0.0));
    engine.set_rect(0, None);
    engine.queue_burst(0);
    for _ in 0..10 {
        engine.advance(DT);
    }
    assert_eq!(engine.particle_count(), 0);

    // Re-attach: the pending burst is still there and fires.
    engine.set_rect(0, Some(rect()));
    engine.advance(0.05);
    assert_eq!(engine.particle_count(), 4);
}

#[test]
fn input_from_a_previous_wiring_generation_is_dropped() {
    let mut engine = engine_with(dot_style(0.0, 30.0));
    let old = engine.generation();
    // Rescan with the same element count: index 0 now belongs to a fresh
    // emitter, and listeners wired before the rescan must not reach it.
    engine.rebuild_emitters(vec![EmitterSpec {
        rect: Some(rect()),
        style: dot_style(0.0, 30.0),
        glow: None,
    }]);

    engine.set_hover_from(old, 0, true);
    engine.queue_burst_from(old, 0);
    assert!(!engine.emitters()[0].hover);
    assert!(!engine.emitters()[0].pending_burst);
    for _ in 0..60 {
        engine.advance(DT);
    }
    assert_eq!(engine.particle_count(), 0);

    let current = engine.generation();
    engine.set_hover_from(current, 0, true);
    engine.queue_burst_from(current, 0);
    assert!(engine.emitters()[0].hover);
    assert!(engine.emitters()[0].pending_burst);
}

#[test]
fn dots_spawn_inside_jittered_rect() {
    let mut engine = engine_with(dot_style(0.0, 0.0));
    engine.queue_burst(0);
    engine.advance(0.05);
    let r = rect();
    for p in engine.particles() {
        assert!((p.x - r.cx).abs() <= r.w * 0.5);
        assert!((p.y - r.cy).abs() <= r.h * 0.5);
    }
}

use super::constants::MAX_FRAME_DT;
use super::emitter::{Emitter, EmitterRect, EmitterRegistry, EmitterSpec};
use super::glow::GlowSpec;
use super::metrics::SceneMetrics;
use super::particle::{Particle, ParticlePool};
use super::style::StyleTable;
use rand::prelude::*;
use rand::rngs::StdRng;

/// The whole simulation behind the overlay: metrics, presets, emitters and
/// the particle pool, owned as private state behind one instance. The web
/// layer feeds it geometry and input flags and reads back draw state; it
/// never touches these internals directly.
pub struct FxEngine {
    metrics: SceneMetrics,
    styles: StyleTable,
    registry: EmitterRegistry,
    pool: ParticlePool,
    rng: StdRng,
    time: f32,
}

impl FxEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            metrics: SceneMetrics::default(),
            styles: StyleTable::with_defaults(),
            registry: EmitterRegistry::new(),
            pool: ParticlePool::new(),
            rng: StdRng::seed_from_u64(seed),
            time: 0.0,
        }
    }

    pub fn metrics(&self) -> SceneMetrics {
        self.metrics
    }

    /// Synchronous metrics swap; takes effect for the very next spawn/draw.
    pub fn set_metrics(&mut self, metrics: SceneMetrics) {
        self.metrics = metrics;
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleTable {
        &mut self.styles
    }

    /// Replace the emitter set (scene rescan). Live fog particles keep
    /// running but their owner handles go stale and retire on expiry.
    pub fn rebuild_emitters(&mut self, specs: Vec<EmitterSpec>) {
        self.registry.rebuild(specs, &mut self.rng);
    }

    pub fn emitters(&self) -> &[Emitter] {
        self.registry.emitters()
    }

    pub fn emitter_count(&self) -> usize {
        self.registry.len()
    }

    pub fn set_hover(&mut self, index: usize, hover: bool) {
        self.registry.set_hover(index, hover);
    }

    pub fn queue_burst(&mut self, index: usize) {
        self.registry.queue_burst(index);
    }

    /// Current emitter-set generation; input listeners capture it at wiring
    /// time and pass it back through the `_from` setters.
    pub fn generation(&self) -> u32 {
        self.registry.generation()
    }

    pub fn set_hover_from(&mut self, generation: u32, index: usize, hover: bool) {
        self.registry.set_hover_from(generation, index, hover);
    }

    pub fn queue_burst_from(&mut self, generation: u32, index: usize) {
        self.registry.queue_burst_from(generation, index);
    }

    pub fn set_rect(&mut self, index: usize, rect: Option<EmitterRect>) {
        self.registry.set_rect(index, rect);
    }

    pub fn set_glow(&mut self, index: usize, glow: Option<GlowSpec>) {
        self.registry.set_glow(index, glow);
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    /// Wall-clock the drift field and glow pulses run on; sum of clamped
    /// frame deltas, so a stalled tab resumes smoothly.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// One frame: consume input flags, spawn, then integrate. `dt` in
    /// seconds; clamped so a resumed background tab cannot take one giant
    /// integration step.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.time += dt;
        self.registry
            .spawn_into(dt, &self.metrics, &mut self.pool, &mut self.rng);
        self.pool.step(
            dt,
            self.time,
            &self.metrics,
            &mut self.registry,
            &mut self.rng,
        );
    }
}

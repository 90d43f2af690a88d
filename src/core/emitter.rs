use super::constants::*;
use super::glow::GlowSpec;
use super::metrics::SceneMetrics;
use super::particle::{OwnerRef, Particle, ParticlePool};
use super::style::{EmitterStyle, RenderMode};
use rand::prelude::*;

/// Center/size rectangle of a scene element in surface-local CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitterRect {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
}

/// Per-element emission state. `hover` and `pending_burst` are set by input
/// handlers between frames and consumed by the next spawn pass; everything
/// else is owned by the frame loop.
pub struct Emitter {
    /// `None` while the backing element is detached from the document; the
    /// emitter is then skipped, not destroyed.
    pub rect: Option<EmitterRect>,
    pub style: EmitterStyle,
    pub glow: Option<GlowSpec>,
    pub hover: bool,
    pub pending_burst: bool,
    /// Random phase seed shared with this emitter's fog drift and glow pulse.
    pub seed: f32,
    accum: f32,
    fog_count: u32,
}

impl Emitter {
    fn from_spec(spec: EmitterSpec, rng: &mut impl Rng) -> Self {
        Self {
            rect: spec.rect,
            style: spec.style,
            glow: spec.glow,
            hover: false,
            pending_burst: false,
            seed: rng.gen::<f32>() * 1000.0,
            accum: 0.0,
            fog_count: 0,
        }
    }

    pub fn fog_count(&self) -> u32 {
        self.fog_count
    }
}

/// What the scene scanner hands the registry for each hotspot.
pub struct EmitterSpec {
    pub rect: Option<EmitterRect>,
    pub style: EmitterStyle,
    pub glow: Option<GlowSpec>,
}

/// Steady-state fog population for a base target at the current area scale.
pub fn fog_target(base: u32, area_scale: f32) -> u32 {
    ((base as f32 * area_scale).round() as u32).max(FOG_TARGET_MIN)
}

/// One emitter per interactive scene element, addressed by index. A full
/// rebuild bumps the generation so owner handles held by live fog particles
/// go stale instead of resolving against the wrong element.
#[derive(Default)]
pub struct EmitterRegistry {
    emitters: Vec<Emitter>,
    generation: u32,
}

impl EmitterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn get(&self, index: usize) -> Option<&Emitter> {
        self.emitters.get(index)
    }

    /// Replace the emitter set after the scene element set changed.
    pub fn rebuild(&mut self, specs: Vec<EmitterSpec>, rng: &mut impl Rng) {
        self.generation = self.generation.wrapping_add(1);
        self.emitters = specs
            .into_iter()
            .map(|s| Emitter::from_spec(s, rng))
            .collect();
    }

    pub fn set_hover(&mut self, index: usize, hover: bool) {
        if let Some(em) = self.emitters.get_mut(index) {
            em.hover = hover;
        }
    }

    pub fn queue_burst(&mut self, index: usize) {
        if let Some(em) = self.emitters.get_mut(index) {
            em.pending_burst = true;
        }
    }

    /// Input-path variants. Page-lifetime listeners are wired against a
    /// specific emitter set; after a rebuild their index may point at a
    /// different element, so stale-generation calls are dropped.
    pub fn set_hover_from(&mut self, generation: u32, index: usize, hover: bool) {
        if generation == self.generation {
            self.set_hover(index, hover);
        }
    }

    pub fn queue_burst_from(&mut self, generation: u32, index: usize) {
        if generation == self.generation {
            self.queue_burst(index);
        }
    }

    /// Geometry refresh; `None` marks the element detached. Does not bump
    /// the generation, so live fog particles keep their owners.
    pub fn set_rect(&mut self, index: usize, rect: Option<EmitterRect>) {
        if let Some(em) = self.emitters.get_mut(index) {
            em.rect = rect;
        }
    }

    pub fn set_glow(&mut self, index: usize, glow: Option<GlowSpec>) {
        if let Some(em) = self.emitters.get_mut(index) {
            em.glow = glow;
        }
    }

    /// Spawn pass for one frame.
    ///
    /// Dot emitters: fractional-accumulator rate spawning, area-scaled, with
    /// the one-shot click burst folded into this tick's rate. Fog emitters:
    /// population-controlled trickle toward the area-scaled target.
    pub fn spawn_into(
        &mut self,
        dt: f32,
        metrics: &SceneMetrics,
        pool: &mut ParticlePool,
        rng: &mut impl Rng,
    ) {
        let generation = self.generation;
        for (index, em) in self.emitters.iter_mut().enumerate() {
            let Some(rect) = em.rect else {
                continue;
            };
            let burst = std::mem::take(&mut em.pending_burst);
            match em.style.mode {
                RenderMode::Fog => {
                    let target = fog_target(em.style.fog_target, metrics.area_scale);
                    let deficit = target.saturating_sub(em.fog_count);
                    for _ in 0..deficit.min(FOG_TRICKLE_MAX) {
                        let owner = OwnerRef {
                            index: index as u32,
                            generation,
                        };
                        pool.push(Particle::fog(
                            &rect,
                            &em.style,
                            metrics.scale,
                            em.seed,
                            owner,
                            rng,
                        ));
                        em.fog_count += 1;
                    }
                }
                RenderMode::Dot => {
                    let base = if em.hover {
                        em.style.rate_hover
                    } else {
                        em.style.rate_idle
                    };
                    let mut rate = base * dt * metrics.area_scale;
                    if burst {
                        rate += BURST_RATE * dt;
                    }
                    em.accum += rate;
                    let n = em.accum.floor();
                    em.accum -= n;
                    for _ in 0..n as u32 {
                        pool.push(Particle::dot(&rect, &em.style, metrics.scale, rng));
                    }
                }
            }
        }
    }

    /// Decide the fate of an expired fog particle: `Some` with the owner's
    /// current rect and style means respawn in place; `None` means retire
    /// it (stale handle, detached element, or population above target).
    pub fn recycle_owner(
        &mut self,
        owner: OwnerRef,
        area_scale: f32,
    ) -> Option<(EmitterRect, EmitterStyle)> {
        if owner.generation != self.generation {
            return None;
        }
        let em = self.emitters.get_mut(owner.index as usize)?;
        if em.style.mode != RenderMode::Fog {
            em.fog_count = em.fog_count.saturating_sub(1);
            return None;
        }
        let Some(rect) = em.rect else {
            em.fog_count = em.fog_count.saturating_sub(1);
            return None;
        };
        if em.fog_count > fog_target(em.style.fog_target, area_scale) {
            em.fog_count = em.fog_count.saturating_sub(1);
            return None;
        }
        Some((rect, em.style.clone()))
    }
}

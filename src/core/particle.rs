use super::color::Color;
use super::constants::*;
use super::emitter::{EmitterRect, EmitterRegistry};
use super::metrics::SceneMetrics;
use super::style::{EmitterStyle, RenderMode};
use rand::prelude::*;

/// Non-owning handle from a fog particle back to its emitter. Stale after a
/// registry rebuild; resolving one then yields "owner not found", which
/// retires the particle instead of recycling it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerRef {
    pub index: u32,
    pub generation: u32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Elapsed lifetime, seconds.
    pub t: f32,
    pub life: f32,
    /// On-screen base size; already multiplied by the scene scale at spawn.
    pub size: f32,
    pub color: Color,
    pub mode: RenderMode,
    /// Per-particle drift field seed (fog).
    pub seed: f32,
    pub owner: Option<OwnerRef>,
}

impl Particle {
    /// Normalized age in [0, ...); >= 1 means expired.
    #[inline]
    pub fn age_ratio(&self) -> f32 {
        if self.life <= 0.0 {
            1.0
        } else {
            self.t / self.life
        }
    }

    /// Rate-spawned dot particle: cone emission plus gravity bias, jittered
    /// inside the emitter rect so the source does not read as a point.
    pub fn dot(
        rect: &EmitterRect,
        style: &EmitterStyle,
        scale: f32,
        rng: &mut impl Rng,
    ) -> Particle {
        let angle = (rng.gen::<f32>() - 0.5) * std::f32::consts::PI * style.spread;
        let speed = sample(style.speed, rng) * scale;
        Particle {
            x: rect.cx + (rng.gen::<f32>() - 0.5) * rect.w * DOT_JITTER_W,
            y: rect.cy + (rng.gen::<f32>() - 0.5) * rect.h * DOT_JITTER_H,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed + style.gravity * scale,
            t: 0.0,
            life: sample(style.life, rng),
            size: sample(style.size, rng) * scale,
            color: style.pick_color(rng),
            mode: RenderMode::Dot,
            seed: 0.0,
            owner: None,
        }
    }

    /// Fresh fog puff. Age is pre-seeded into `[0, 0.8*life)` so a batch of
    /// puffs spawned on the same frame does not pulse in lockstep.
    pub fn fog(
        rect: &EmitterRect,
        style: &EmitterStyle,
        scale: f32,
        emitter_seed: f32,
        owner: OwnerRef,
        rng: &mut impl Rng,
    ) -> Particle {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            t: 0.0,
            life: 1.0,
            size: 1.0,
            color: style.pick_color(rng),
            mode: RenderMode::Fog,
            seed: emitter_seed + rng.gen::<f32>() * 1000.0,
            owner: Some(owner),
        };
        p.resample_fog(rect, style, scale, rng);
        p.t = rng.gen::<f32>() * p.life * FOG_PHASE_PRESEED;
        p
    }

    /// In-place respawn near the owner's current rect. Resets age to zero;
    /// recycle keeps the cloud continuous, so no phase pre-seed here.
    pub fn resample_fog(
        &mut self,
        rect: &EmitterRect,
        style: &EmitterStyle,
        scale: f32,
        rng: &mut impl Rng,
    ) {
        self.x = rect.cx + (rng.gen::<f32>() - 0.5) * rect.w * FOG_JITTER_W;
        self.y = rect.cy + (rng.gen::<f32>() - FOG_JITTER_H_BIAS) * rect.h * FOG_JITTER_H;
        self.vx = (rng.gen::<f32>() - 0.5) * 2.0 * FOG_INIT_VX * scale;
        self.vy = -(rng.gen::<f32>() * FOG_INIT_VY_SPAN + FOG_INIT_VY_MIN) * scale;
        self.t = 0.0;
        self.life = sample(style.life, rng);
        self.size = sample(style.size, rng) * scale;
    }
}

/// The live particle set. `step` is the only place per-frame time and space
/// integration happens; removal order is irrelevant, so expiry uses
/// swap-remove.
#[derive(Default)]
pub struct ParticlePool {
    parts: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.parts
    }

    pub fn push(&mut self, p: Particle) {
        self.parts.push(p);
    }

    /// Advance every live particle by `dt` (already clamped by the engine).
    ///
    /// Dots age out and are removed; fog puffs recycle in place from their
    /// owner's current rect, or retire when the owner is gone, detached, or
    /// over its population target.
    pub fn step(
        &mut self,
        dt: f32,
        time: f32,
        metrics: &SceneMetrics,
        registry: &mut EmitterRegistry,
        rng: &mut impl Rng,
    ) {
        let scale = metrics.scale;
        let mut i = self.parts.len();
        while i > 0 {
            i -= 1;
            self.parts[i].t += dt;
            let expired = self.parts[i].age_ratio() >= 1.0;
            match self.parts[i].mode {
                RenderMode::Dot => {
                    if expired {
                        self.parts.swap_remove(i);
                        continue;
                    }
                    let p = &mut self.parts[i];
                    p.x += p.vx * dt;
                    p.y += p.vy * dt;
                }
                RenderMode::Fog => {
                    if expired {
                        let owner = self.parts[i].owner;
                        let respawn = owner
                            .and_then(|o| registry.recycle_owner(o, metrics.area_scale));
                        match respawn {
                            Some((rect, style)) => {
                                self.parts[i].resample_fog(&rect, &style, scale, rng);
                            }
                            None => {
                                self.parts.swap_remove(i);
                                continue;
                            }
                        }
                    }
                    let p = &mut self.parts[i];
                    let drift_x =
                        DRIFT_AMP_X * scale * (p.seed + p.x * DRIFT_KX + time * DRIFT_WX).sin();
                    let drift_y = DRIFT_AMP_Y * scale
                        * (p.seed * 0.7 + p.y * DRIFT_KY + time * DRIFT_WY).cos()
                        - DRIFT_UP_BIAS * scale;
                    p.x += (p.vx + drift_x) * dt * DRIFT_HALF_RATE;
                    p.y += (p.vy + drift_y) * dt * DRIFT_HALF_RATE;
                }
            }
        }
    }
}

#[inline]
fn sample(range: [f32; 2], rng: &mut impl Rng) -> f32 {
    if range[1] > range[0] {
        rng.gen_range(range[0]..=range[1])
    } else {
        range[0]
    }
}

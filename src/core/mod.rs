// Pure simulation core: no DOM types in here. The web layer in the crate
// root feeds geometry in and reads draw state out, and the host-side tests
// under tests/ include these modules directly.

pub mod color;
pub mod constants;
pub mod emitter;
pub mod engine;
pub mod glow;
pub mod metrics;
pub mod outline;
pub mod particle;
pub mod style;

pub use color::Color;
pub use emitter::{fog_target, Emitter, EmitterRect, EmitterRegistry, EmitterSpec};
pub use engine::FxEngine;
pub use glow::{glow_passes, DashPass, GlowPasses, GlowSpec, StrokePass};
pub use metrics::SceneMetrics;
pub use outline::{polygon_outline, rect_outline, sample_count, Outline, Transform2d};
pub use particle::{OwnerRef, Particle, ParticlePool};
pub use style::{EmitterStyle, RenderMode, StyleTable, DEFAULT_EFFECT};

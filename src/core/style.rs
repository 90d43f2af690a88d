use super::color::Color;
use fnv::FnvHashMap;
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};

/// How a particle is drawn and retired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Shrinking, fading filled circle; removed at end of life.
    Dot,
    /// Additive soft puff; recycled in place at end of life.
    Fog,
}

/// Immutable behavior profile for one effect name.
///
/// The historical tuning tables disagreed on exact numbers, so these are
/// plain data: callers may override any preset through [`StyleTable`].
#[derive(Clone, Debug)]
pub struct EmitterStyle {
    pub mode: RenderMode,
    pub palette: SmallVec<[Color; 4]>,
    /// Constant vertical velocity bias (design px/s); negative rises.
    pub gravity: f32,
    /// Angular spread factor; emission angle is uniform in ±(spread·π/2).
    pub spread: f32,
    pub size: [f32; 2],
    /// Lifetime range in seconds.
    pub life: [f32; 2],
    pub rate_idle: f32,
    pub rate_hover: f32,
    pub speed: [f32; 2],
    /// Steady-state population at area_scale = 1. Fog mode only.
    pub fog_target: u32,
}

impl EmitterStyle {
    pub fn pick_color(&self, rng: &mut impl Rng) -> Color {
        match self.palette.len() {
            0 => Color::WHITE,
            1 => self.palette[0],
            n => self.palette[rng.gen_range(0..n)],
        }
    }
}

/// Effect presets keyed by the hotspot `data-effect` name.
pub struct StyleTable {
    styles: FnvHashMap<String, EmitterStyle>,
    fallback: EmitterStyle,
}

pub const DEFAULT_EFFECT: &str = "glow";

impl StyleTable {
    pub fn with_defaults() -> Self {
        let mut styles = FnvHashMap::default();
        styles.insert(
            "chalk".to_string(),
            EmitterStyle {
                mode: RenderMode::Fog,
                palette: smallvec![Color::WHITE],
                gravity: -3.0,
                spread: 0.0,
                size: [14.0, 30.0],
                life: [9.0, 14.0],
                rate_idle: 0.0,
                rate_hover: 0.0,
                speed: [1.0, 3.0],
                fog_target: 120,
            },
        );
        styles.insert(
            "glow".to_string(),
            EmitterStyle {
                mode: RenderMode::Dot,
                palette: smallvec![hex("#7bd4ff")],
                gravity: 8.0,
                spread: 0.6,
                size: [1.0, 2.0],
                life: [0.7, 1.1],
                rate_idle: 5.0,
                rate_hover: 30.0,
                speed: [30.0, 70.0],
                fog_target: 0,
            },
        );
        styles.insert(
            "paper".to_string(),
            EmitterStyle {
                mode: RenderMode::Dot,
                palette: smallvec![hex("#c9d7e6")],
                gravity: 5.0,
                spread: 0.7,
                size: [1.0, 2.0],
                life: [0.7, 1.3],
                rate_idle: 5.0,
                rate_hover: 28.0,
                speed: [25.0, 55.0],
                fog_target: 0,
            },
        );
        styles.insert(
            "confetti".to_string(),
            EmitterStyle {
                mode: RenderMode::Dot,
                palette: smallvec![
                    hex("#ff6b6b"),
                    hex("#ffd166"),
                    hex("#06d6a0"),
                    hex("#4cc9f0"),
                ],
                gravity: 25.0,
                spread: 1.0,
                size: [1.0, 3.0],
                life: [0.5, 0.9],
                rate_idle: 0.0,
                rate_hover: 35.0,
                speed: [60.0, 120.0],
                fog_target: 0,
            },
        );
        let fallback = styles[DEFAULT_EFFECT].clone();
        Self { styles, fallback }
    }

    /// Resolve an effect name, falling back to the default preset for
    /// unknown names so a typo in markup degrades instead of erroring.
    pub fn resolve(&self, name: &str) -> &EmitterStyle {
        self.styles.get(name).unwrap_or(&self.fallback)
    }

    pub fn insert(&mut self, name: impl Into<String>, style: EmitterStyle) {
        self.styles.insert(name.into(), style);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

// Web-layer tuning: selectors, attribute names and canvas draw parameters.
// Simulation constants live in `core/constants.rs`.

pub const FX_CANVAS_ID: &str = "fx-layer";
pub const SURFACE_SELECTOR: &str = ".desk-bg";
pub const HOTSPOT_SELECTOR: &str = "#desk-hotspots .hotspot";

pub const EFFECT_ATTR: &str = "data-effect";
pub const GLOW_ATTR: &str = "data-glow";
pub const GLOW_COLOR_ATTR: &str = "data-glow-color";
pub const GLOW_WIDTH_ATTR: &str = "data-glow-width";
pub const GLOW_BLUR_ATTR: &str = "data-glow-blur";
pub const GLOW_ALPHA_ATTR: &str = "data-glow-alpha";
pub const GLOW_PULSE_ATTR: &str = "data-glow-pulse";
pub const GLOW_TWINKLE_ATTR: &str = "data-glow-twinkle";

// Glow defaults when an element requests glow but omits an attribute
// (design-scale px, like the style presets).
pub const GLOW_DEFAULT_WIDTH: f32 = 6.0;
pub const GLOW_DEFAULT_BLUR: f32 = 12.0;
pub const GLOW_DEFAULT_ALPHA: f32 = 0.5;
pub const GLOW_DEFAULT_PULSE: f32 = 1.0;

// Dot radius never shrinks below this, so a dying particle stays visible
// to its last frame.
pub const DOT_MIN_RADIUS: f32 = 0.6;

// Per-puff opacity; fog density comes from stacking many additive puffs,
// not from any one puff.
pub const FOG_PUFF_ALPHA: f32 = 0.08;
pub const FOG_BLUR_FILTER: &str = "blur(1px)";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Simulation tuning constants shared by the engine core and the host-side
// tests. Render-only tuning lives in `src/constants.rs`.

// Fixed design resolution the artwork was authored against. All scale and
// area-scale factors are relative to this.
pub const DESIGN_WIDTH: f32 = 1600.0;
pub const DESIGN_HEIGHT: f32 = 900.0;

// Largest delta-time a single frame may integrate. A backgrounded tab can
// hand us seconds of wall time on resume; clamping keeps the step stable.
pub const MAX_FRAME_DT: f32 = 0.05;

// One-shot click burst, expressed as a spawn rate (particles per second)
// applied for exactly one tick. Deliberately not area-scaled.
pub const BURST_RATE: f32 = 80.0;

// Fog population control.
pub const FOG_TRICKLE_MAX: u32 = 4; // new puffs per tick while below target
pub const FOG_TARGET_MIN: u32 = 8; // floor after area scaling
pub const FOG_PHASE_PRESEED: f32 = 0.8; // initial t in [0, 0.8*life)

// Dot spawn jitter inside the emitter rect (fractions of width/height).
pub const DOT_JITTER_W: f32 = 0.8;
pub const DOT_JITTER_H: f32 = 0.6;

// Fog spawn placement: wider horizontal jitter, vertical band biased a
// little below center so puffs rise through the element.
pub const FOG_JITTER_W: f32 = 0.9;
pub const FOG_JITTER_H: f32 = 0.6;
pub const FOG_JITTER_H_BIAS: f32 = 0.2;

// Fog initial velocity bands (CSS px/s at design scale).
pub const FOG_INIT_VX: f32 = 1.0; // vx in [-1, 1]
pub const FOG_INIT_VY_MIN: f32 = 0.5; // vy in [-2.5, -0.5]
pub const FOG_INIT_VY_SPAN: f32 = 2.0;

// Sinusoidal drift field for fog motion.
pub const DRIFT_KX: f32 = 0.015; // spatial frequency
pub const DRIFT_KY: f32 = 0.012;
pub const DRIFT_WX: f32 = 0.25; // temporal frequency
pub const DRIFT_WY: f32 = 0.22;
pub const DRIFT_AMP_X: f32 = 10.0; // amplitudes at design scale
pub const DRIFT_AMP_Y: f32 = 6.0;
pub const DRIFT_UP_BIAS: f32 = 6.0; // constant upward pull
pub const DRIFT_HALF_RATE: f32 = 0.5; // fog integrates at half speed

// Outline sampling for curved shapes.
pub const OUTLINE_SAMPLE_SPACING: f32 = 6.0; // px of path length per sample
pub const OUTLINE_SAMPLES_MIN: usize = 24;
pub const OUTLINE_SAMPLES_MAX: usize = 160;

// Glow pass geometry, relative to the outer halo.
pub const GLOW_RIM_WIDTH_RATIO: f32 = 0.28;
pub const GLOW_RIM_ALPHA_RATIO: f32 = 0.15;
pub const GLOW_PULSE_SPEED: f32 = 1.7; // rad/s of the halo pulse

// Twinkle dash passes (design-scale px; both scaled at render time).
pub const TWINKLE_DASH_A: [f32; 2] = [10.0, 14.0];
pub const TWINKLE_DASH_B: [f32; 2] = [4.0, 22.0];
pub const TWINKLE_SPEED_A: f32 = 18.0; // dash-offset px/s, forward
pub const TWINKLE_SPEED_B: f32 = -11.0; // reversed, different speed
pub const TWINKLE_WIDTH_RATIO_A: f32 = 0.45;
pub const TWINKLE_WIDTH_RATIO_B: f32 = 0.30;
pub const TWINKLE_ALPHA_RATIO_A: f32 = 0.35;
pub const TWINKLE_ALPHA_RATIO_B: f32 = 0.25;

use super::color::Color;
use super::constants::*;
use super::outline::Outline;

/// Cached glow styling for one scene element. Built at scan time from the
/// element's `data-glow-*` attributes; read-only during rendering.
#[derive(Clone, Debug)]
pub struct GlowSpec {
    pub outline: Outline,
    pub color: Color,
    /// Outer halo stroke width at design scale.
    pub width: f32,
    /// Outer halo blur radius at design scale.
    pub blur: f32,
    pub alpha: f32,
    /// Peak alpha multiplier of the sinusoidal pulse; 1.0 disables it.
    pub pulse: f32,
    pub twinkle: bool,
}

/// One solid stroke pass, in on-screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePass {
    pub width: f32,
    pub blur: f32,
    pub alpha: f32,
}

/// One dashed twinkle pass, in on-screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPass {
    pub width: f32,
    pub alpha: f32,
    pub dash: [f32; 2],
    pub offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowPasses {
    pub halo: StrokePass,
    pub rim: StrokePass,
    pub twinkle: Option<[DashPass; 2]>,
}

/// Resolve the concentric stroke passes for one glow at the given time.
///
/// The halo alpha swings between 1x and `pulse`x of the base alpha; the rim
/// tracks it at a fixed ratio so the sharp inner edge pulses in sync. All
/// widths, blurs and dash metrics are multiplied by `scale` here so the
/// renderer never sees a design-time magnitude.
pub fn glow_passes(spec: &GlowSpec, scale: f32, time: f32, seed: f32) -> GlowPasses {
    let halo_alpha = if (spec.pulse - 1.0).abs() > f32::EPSILON {
        let s = 0.5 * (1.0 + (time * GLOW_PULSE_SPEED + seed).sin());
        spec.alpha * (1.0 + (spec.pulse - 1.0) * s)
    } else {
        spec.alpha
    }
    .clamp(0.0, 1.0);

    let halo_width = spec.width * scale;
    let halo = StrokePass {
        width: halo_width,
        blur: spec.blur * scale,
        alpha: halo_alpha,
    };
    let rim = StrokePass {
        width: halo_width * GLOW_RIM_WIDTH_RATIO,
        blur: 0.0,
        alpha: halo_alpha * GLOW_RIM_ALPHA_RATIO,
    };
    let twinkle = spec.twinkle.then(|| {
        [
            DashPass {
                width: halo_width * TWINKLE_WIDTH_RATIO_A,
                alpha: halo_alpha * TWINKLE_ALPHA_RATIO_A,
                dash: [TWINKLE_DASH_A[0] * scale, TWINKLE_DASH_A[1] * scale],
                offset: time * TWINKLE_SPEED_A * scale,
            },
            DashPass {
                width: halo_width * TWINKLE_WIDTH_RATIO_B,
                alpha: halo_alpha * TWINKLE_ALPHA_RATIO_B,
                dash: [TWINKLE_DASH_B[0] * scale, TWINKLE_DASH_B[1] * scale],
                offset: time * TWINKLE_SPEED_B * scale,
            },
        ]
    });
    GlowPasses { halo, rim, twinkle }
}

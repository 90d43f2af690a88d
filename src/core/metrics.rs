use super::constants::{DESIGN_HEIGHT, DESIGN_WIDTH};

/// Resolution-independence factors for the animation surface.
///
/// `scale` multiplies every linear quantity (sizes, speeds, stroke widths,
/// blur radii); `area_scale` multiplies population quantities (spawn rates,
/// fog targets) so apparent density stays constant across viewports.
/// Simulation space is CSS pixels; `dpr` only drives the canvas backing
/// transform in the web layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneMetrics {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
    pub scale: f32,
    pub area_scale: f32,
}

impl SceneMetrics {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        let width = sane(width);
        let height = sane(height);
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let scale = (width / DESIGN_WIDTH).min(height / DESIGN_HEIGHT);
        let area_scale = (width * height) / (DESIGN_WIDTH * DESIGN_HEIGHT);
        Self {
            width,
            height,
            dpr,
            scale,
            area_scale,
        }
    }
}

impl Default for SceneMetrics {
    /// Metrics at the design resolution: both factors exactly 1.
    fn default() -> Self {
        Self::new(DESIGN_WIDTH, DESIGN_HEIGHT, 1.0)
    }
}

#[inline]
fn sane(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

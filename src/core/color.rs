/// Small RGB color used by particle palettes and glow styling.
///
/// Stored as 8-bit channels; alpha is applied at draw time so one color can
/// be re-emitted at many opacities without reparsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse `#rgb` or `#rrggbb`. Anything else yields `None`; callers fall
    /// back to a preset default rather than failing.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.trim().strip_prefix('#')?;
        match hex.len() {
            3 => {
                let v = u16::from_str_radix(hex, 16).ok()?;
                let r = ((v >> 8) & 0xf) as u8;
                let g = ((v >> 4) & 0xf) as u8;
                let b = (v & 0xf) as u8;
                Some(Color {
                    r: r << 4 | r,
                    g: g << 4 | g,
                    b: b << 4 | b,
                })
            }
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some(Color {
                    r: (v >> 16) as u8,
                    g: (v >> 8) as u8,
                    b: v as u8,
                })
            }
            _ => None,
        }
    }

    /// CSS `rgba(...)` string with the given alpha, clamped to [0, 1].
    pub fn rgba(&self, alpha: f32) -> String {
        let a = alpha.clamp(0.0, 1.0);
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, a)
    }
}

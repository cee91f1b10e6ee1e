/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are linear-light and multiplied by `a`.
///
/// The swapchain is sRGB when available, so colors authored as sRGB bytes
/// (CSS names, hex literals) are linearized on construction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// CSS named colors understood by [`Color::from_css_name`].
const CSS_NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("purple", [128, 0, 128]),
    ("pink", [255, 192, 203]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
];

impl Color {
    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied linear color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Looks up an opaque CSS named color (case-insensitive).
    pub fn from_css_name(name: &str) -> Option<Self> {
        let name = name.trim();
        CSS_NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, [r, g, b])| Self::from_srgb_u8(r, g, b, 255))
    }

    /// Creates a premultiplied color from straight-alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// sRGB transfer function, decoding direction.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names_resolve_case_insensitively() {
        assert_eq!(Color::from_css_name("Red"), Color::from_css_name("red"));
        assert!(Color::from_css_name("lime").is_some());
        assert!(Color::from_css_name("not-a-color").is_none());
    }

    #[test]
    fn srgb_extremes_are_exact() {
        let white = Color::from_srgb_u8(255, 255, 255, 255);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 255), Color::black());
    }

    #[test]
    fn srgb_midtone_is_darker_in_linear() {
        // CSS "green" is sRGB 128 → about 0.216 linear.
        let green = Color::from_css_name("green").unwrap();
        assert!((green.g - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn premultiplies_by_alpha() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
    }
}

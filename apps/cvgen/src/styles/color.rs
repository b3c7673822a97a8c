//! Colour derivation from the user's accent colour.
//!
//! A palette role either has an explicit override in the style or is derived by
//! blending the accent toward white: `c + (255 - c) * f`, rounded per channel.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::styles::StyleConfig;

pub const BOX_BACKGROUND_FADE: f64 = 0.95;
pub const BOX_BORDER_FADE: f64 = 0.7;
pub const PILL_BORDER_FADE: f64 = 0.6;
pub const SIDEBAR_BACKGROUND_FADE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parses `#rrggbb` (the `#` is optional, hex digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb, AppError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| AppError::InvalidColor(hex.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Moves each channel `fraction` of the way toward 255.
    pub fn blend_toward_white(self, fraction: f64) -> Rgb {
        let blend = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * fraction).round().clamp(0.0, 255.0) as u8
        };
        Rgb(blend(self.0), blend(self.1), blend(self.2))
    }

    /// Channels scaled to 0.0–1.0, the form PDF colour operators take.
    pub fn unit(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }
}

pub fn derive_header_accent(style: &StyleConfig, accent: Rgb) -> Rgb {
    style.colors.header_background.unwrap_or(accent)
}

pub fn derive_box_background(style: &StyleConfig, accent: Rgb) -> Rgb {
    style
        .colors
        .box_background
        .unwrap_or_else(|| accent.blend_toward_white(BOX_BACKGROUND_FADE))
}

pub fn derive_box_border(style: &StyleConfig, accent: Rgb) -> Rgb {
    style
        .colors
        .box_border
        .unwrap_or_else(|| accent.blend_toward_white(BOX_BORDER_FADE))
}

pub fn derive_pill_border(style: &StyleConfig, accent: Rgb) -> Rgb {
    style
        .colors
        .pill_border
        .unwrap_or_else(|| accent.blend_toward_white(PILL_BORDER_FADE))
}

pub fn derive_sidebar_background(accent: Rgb) -> Rgb {
    accent.blend_toward_white(SIDEBAR_BACKGROUND_FADE)
}

/// Every colour role a render pass needs, resolved once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedPalette {
    pub accent: Rgb,
    pub header_accent: Rgb,
    pub box_background: Rgb,
    pub box_border: Rgb,
    pub pill_background: Rgb,
    pub pill_border: Rgb,
    pub sidebar_background: Rgb,
}

pub fn derive_theme(style: &StyleConfig, accent: Rgb) -> DerivedPalette {
    DerivedPalette {
        accent,
        header_accent: derive_header_accent(style, accent),
        box_background: derive_box_background(style, accent),
        box_border: derive_box_border(style, accent),
        pill_background: style.colors.pill_background,
        pill_border: derive_pill_border(style, accent),
        sidebar_background: derive_sidebar_background(accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::{get_style_config, ThemeId};

    const INDIGO: Rgb = Rgb(102, 126, 234);
    const TEAL: Rgb = Rgb(13, 148, 136);
    const NAVY: Rgb = Rgb(30, 58, 138);

    #[test]
    fn test_from_hex_accepts_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#667eea").unwrap(), INDIGO);
        assert_eq!(Rgb::from_hex("667EEA").unwrap(), INDIGO);
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in ["", "#fff", "#12345g", "red", "#1234567"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(AppError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_hex_round_trip() {
        assert_eq!(INDIGO.to_hex(), "#667eea");
        assert_eq!(Rgb::from_hex(&TEAL.to_hex()).unwrap(), TEAL);
    }

    #[test]
    fn test_box_background_fraction() {
        assert_eq!(INDIGO.blend_toward_white(0.95), Rgb(247, 249, 254));
        assert_eq!(TEAL.blend_toward_white(0.95), Rgb(243, 250, 249));
        assert_eq!(NAVY.blend_toward_white(0.95), Rgb(244, 245, 249));
        assert_eq!(Rgb::BLACK.blend_toward_white(0.95), Rgb(242, 242, 242));
        assert_eq!(Rgb::WHITE.blend_toward_white(0.95), Rgb::WHITE);
    }

    #[test]
    fn test_box_border_fraction() {
        assert_eq!(INDIGO.blend_toward_white(0.7), Rgb(209, 216, 249));
        assert_eq!(TEAL.blend_toward_white(0.7), Rgb(182, 223, 219));
        assert_eq!(NAVY.blend_toward_white(0.7), Rgb(188, 196, 220));
        assert_eq!(Rgb::BLACK.blend_toward_white(0.7), Rgb(179, 179, 179));
        assert_eq!(Rgb::WHITE.blend_toward_white(0.7), Rgb::WHITE);
    }

    #[test]
    fn test_pill_border_fraction() {
        assert_eq!(INDIGO.blend_toward_white(0.6), Rgb(194, 203, 247));
        assert_eq!(TEAL.blend_toward_white(0.6), Rgb(158, 212, 207));
        assert_eq!(NAVY.blend_toward_white(0.6), Rgb(165, 176, 208));
        assert_eq!(Rgb::BLACK.blend_toward_white(0.6), Rgb(153, 153, 153));
        assert_eq!(Rgb::WHITE.blend_toward_white(0.6), Rgb::WHITE);
    }

    #[test]
    fn test_sidebar_background_fraction() {
        assert_eq!(derive_sidebar_background(INDIGO), Rgb(240, 242, 253));
        assert_eq!(derive_sidebar_background(TEAL), Rgb(231, 244, 243));
        assert_eq!(derive_sidebar_background(NAVY), Rgb(233, 235, 243));
        assert_eq!(derive_sidebar_background(Rgb::BLACK), Rgb(230, 230, 230));
        assert_eq!(derive_sidebar_background(Rgb::WHITE), Rgb::WHITE);
    }

    #[test]
    fn test_blend_never_darkens() {
        for c in [INDIGO, TEAL, NAVY, Rgb::BLACK] {
            let b = c.blend_toward_white(0.7);
            assert!(b.0 >= c.0 && b.1 >= c.1 && b.2 >= c.2);
        }
    }

    #[test]
    fn test_overrides_win_over_derivation() {
        let modern = get_style_config(ThemeId::Modern);
        assert_eq!(derive_box_background(modern, INDIGO), Rgb(249, 250, 251));
        assert_eq!(derive_box_border(modern, INDIGO), Rgb(229, 231, 235));
        assert_eq!(derive_pill_border(modern, INDIGO), Rgb(229, 231, 235));

        let professional = get_style_config(ThemeId::Professional);
        assert_eq!(derive_pill_border(professional, INDIGO), Rgb(30, 58, 138));
    }

    #[test]
    fn test_tech_derives_every_role_from_accent() {
        let tech = get_style_config(ThemeId::Tech);
        let palette = derive_theme(tech, INDIGO);
        assert_eq!(palette.header_accent, INDIGO);
        assert_eq!(palette.box_background, Rgb(247, 249, 254));
        assert_eq!(palette.box_border, Rgb(209, 216, 249));
        assert_eq!(palette.pill_border, Rgb(194, 203, 247));
        assert_eq!(palette.sidebar_background, Rgb(240, 242, 253));
        assert_eq!(palette.pill_background, Rgb::WHITE);
    }

    #[test]
    fn test_header_accent_is_unmodified_accent_without_override() {
        for id in [ThemeId::Modern, ThemeId::Minimalist, ThemeId::Professional] {
            assert_eq!(derive_header_accent(get_style_config(id), TEAL), TEAL);
        }
    }
}

//! The fixed SignalCalc brand palette.
//!
//! Four base colours plus one derived shadow tint. The palette is built once
//! at startup and passed explicitly into the renderer; nothing reads colours
//! from ambient globals.

use super::Colour;

/// Alpha applied to the derived glyph shadow tint.
const SHADOW_ALPHA: u8 = 110;

/// Relative HSL darkening applied to the gradient end colour for the shadow.
const SHADOW_DARKEN_PERCENT: f32 = 35.0;

/// The icon's colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPalette {
    /// Top-left end of the background gradient (deep indigo).
    pub gradient_start: Colour,
    /// Bottom-right end of the background gradient (sky blue).
    pub gradient_end: Colour,
    /// Badge fill (coral).
    pub accent: Colour,
    /// Calculator button fill.
    pub button: Colour,
    /// Semi-transparent tint for the embossed glyph shadow.
    pub shadow: Colour,
}

impl IconPalette {
    /// The SignalCalc brand colours.
    pub fn signal_calc() -> Self {
        let gradient_start = Colour::rgb(0x1A, 0x2A, 0x6C);
        let gradient_end = Colour::rgb(0x3A, 0x7B, 0xD5);
        Self {
            gradient_start,
            gradient_end,
            accent: Colour::rgb(0xF0, 0x65, 0x48),
            button: Colour::rgb(0xE2, 0xE8, 0xF0),
            shadow: shadow_tint(gradient_end),
        }
    }
}

impl Default for IconPalette {
    fn default() -> Self {
        Self::signal_calc()
    }
}

/// Derive the glyph shadow tint from a base colour: darken in HSL space,
/// then reduce alpha.
fn shadow_tint(base: Colour) -> Colour {
    darken(base, SHADOW_DARKEN_PERCENT).with_alpha(SHADOW_ALPHA)
}

/// Darken a colour by a percentage of its current lightness, in HSL space.
fn darken(colour: Colour, percent: f32) -> Colour {
    use palette::{Hsl, IntoColor, Srgb};

    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness -= hsl.lightness * (percent / 100.0);
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::new(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
        colour.a,
    )
}
